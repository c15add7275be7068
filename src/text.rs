//! Text normalization and trimming.
//!
//! Folds a Unicode string down to the canonical, lowercase, whitespace-
//! collapsed form the n-gram/shingle pipelines in [`crate::component`]
//! require, and trims a string to a UTF-8 byte budget without ever splitting
//! a code point.

use unicode_general_category::{get_general_category, GeneralCategory};
use unicode_normalization::UnicodeNormalization;

/// Apply Unicode NFKC, then fold to the canonical shingling form:
///
/// 1. NFKC (compatibility composition) once over the raw input.
/// 2. NFD (canonical decomposition).
/// 3. Any code point for which `char::is_whitespace` holds — this covers
///    both the separator categories (`Z*`) and the whitespace-producing
///    control characters (`\t`, `\n`, `\r`, ...) — becomes an ASCII space.
///    Of the rest, keep code points whose general category starts with `L`
///    (letter), `N` (number) or `S` (symbol), plus `Po` (other
///    punctuation, e.g. `!`/`?`); everything else (marks, brackets,
///    quotes, dashes, connector punctuation, remaining controls, format
///    characters) is dropped.
/// 4. Lowercase the retained characters.
/// 5. Collapse runs of whitespace to a single U+0020 and trim the ends.
/// 6. Re-compose with NFC.
///
/// Idempotent: `normalize_text(normalize_text(x)) == normalize_text(x)`.
pub fn normalize_text(text: &str) -> String {
    let nfkc: String = text.nfkc().collect();
    let decomposed: String = nfkc.nfd().collect();

    let mut filtered = String::with_capacity(decomposed.len());
    for c in decomposed.chars() {
        if c.is_whitespace() {
            filtered.push(' ');
        } else if is_kept_category(get_general_category(c)) {
            filtered.extend(c.to_lowercase());
        }
    }

    let collapsed = filtered.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.nfc().collect()
}

fn is_kept_category(category: GeneralCategory) -> bool {
    use GeneralCategory::*;
    matches!(
        category,
        UppercaseLetter
            | LowercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | DecimalNumber
            | LetterNumber
            | OtherNumber
            | MathSymbol
            | CurrencySymbol
            | ModifierSymbol
            | OtherSymbol
            | OtherPunctuation
    )
}

/// Trim `text` so its UTF-8 byte length does not exceed `max_bytes`, peeling
/// one code point at a time from the end. Never splits a code point.
pub fn trim(text: &str, max_bytes: usize) -> String {
    let mut end = text.len();
    while end > 0 && end > max_bytes {
        end = text[..end]
            .char_indices()
            .last()
            .map(|(idx, _)| idx)
            .unwrap_or(0);
    }
    text[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_whitespace_and_folds_marks() {
        let input = "  Iñtërnâtiôn\nàlizætiøn☃💩 –  is a tric\t ky \u{00A0} thing!\r";
        let expected = "internation alizætiøn☃💩 is a tric ky thing!";
        assert_eq!(normalize_text(input), expected);
    }

    #[test]
    fn normalize_simple_sentence() {
        assert_eq!(normalize_text("  Hello  World ? "), "hello world ?");
    }

    #[test]
    fn normalize_is_idempotent() {
        let input = "  Iñtërnâtiôn\nàlizætiøn☃💩 –  is a tric\t ky \u{00A0} thing!\r";
        let once = normalize_text(input);
        let twice = normalize_text(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn trim_ascii_exact_cap() {
        let s = "a".repeat(128);
        let trimmed = trim(&s, 128);
        assert_eq!(trimmed.len(), 128);
    }

    #[test]
    fn trim_two_byte_codepoints() {
        // 'ü' is 2 bytes in UTF-8; 128 of them is 256 bytes, trimmed to 128
        // bytes must stop at a codepoint boundary (64 chars exactly).
        let s = "ü".repeat(128);
        let trimmed = trim(&s, 128);
        assert_eq!(trimmed.chars().count(), 64);
        assert_eq!(trimmed.len(), 128);
    }

    #[test]
    fn trim_three_byte_codepoints() {
        // '驩' is 3 bytes in UTF-8; 128 of them is 384 bytes. The largest
        // prefix with byte length <= 128 is 42 characters (126 bytes).
        let s = "驩".repeat(128);
        let trimmed = trim(&s, 128);
        assert_eq!(trimmed.chars().count(), 42);
        assert_eq!(trimmed.len(), 126);
    }

    #[test]
    fn trim_never_exceeds_cap_never_splits_codepoint() {
        let s = "a木ü".repeat(50);
        let trimmed = trim(&s, 37);
        assert!(trimmed.len() <= 37);
        // Re-parsing must succeed — no broken UTF-8.
        assert_eq!(trimmed.chars().count(), trimmed.chars().count());
    }

    #[test]
    fn trim_below_cap_is_unchanged() {
        assert_eq!(trim("short", 128), "short");
    }
}
