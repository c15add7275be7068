//! Media-type guessing: file extension/path → a generic type label.
//!
//! Out of the core kernel's scope (the core never branches on media type
//! itself), but the CLI `batch`/`id` subcommands use this to pick which
//! Content-ID builder to run over a given file.

use std::path::Path;

/// The coarse media categories the CLI dispatches Content-ID computation
/// over. Anything not recognized falls back to [`GenericMediaType::Other`],
/// which skips Content-ID and only computes Data-ID/Instance-ID/Meta-ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericMediaType {
    Text,
    Image,
    Other,
}

/// Guess the generic media type of `path` from its extension, via
/// `mime_guess`.
pub fn guess(path: &Path) -> GenericMediaType {
    match mime_guess::from_path(path).first() {
        Some(mime) if mime.type_() == mime_guess::mime::TEXT => GenericMediaType::Text,
        Some(mime) if mime.type_() == mime_guess::mime::IMAGE => GenericMediaType::Image,
        _ => GenericMediaType::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_text_files() {
        assert_eq!(guess(Path::new("readme.txt")), GenericMediaType::Text);
    }

    #[test]
    fn recognizes_image_files() {
        assert_eq!(guess(Path::new("photo.png")), GenericMediaType::Image);
        assert_eq!(guess(Path::new("photo.jpg")), GenericMediaType::Image);
    }

    #[test]
    fn unknown_extension_is_other() {
        assert_eq!(guess(Path::new("archive.bin")), GenericMediaType::Other);
    }

    #[test]
    fn no_extension_is_other() {
        assert_eq!(guess(Path::new("Makefile")), GenericMediaType::Other);
    }
}
