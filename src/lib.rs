//! ISCC — International Standard Content Code identifier computation kernel.
//!
//! This crate computes the four component codes of an ISCC: Meta-ID,
//! Content-ID (per media type), Data-ID and Instance-ID. Each component is a
//! short composition over a handful of algorithmically load-bearing pieces —
//! text normalization, a similarity hash, a minimum hash, a content-defined
//! chunker, a perceptual image hash, a Merkle top hash, and a typed codec —
//! implemented in their own modules and wired together in [`component`].

pub mod chunker;
pub mod cli;
pub mod codec;
pub mod component;
pub mod config;
pub mod error;
pub mod imagehash;
pub mod mediatype;
pub mod merkle;
pub mod minhash;
pub mod schema;
pub mod simhash;
pub mod stream;
pub mod text;
pub mod util;
pub mod window;
pub mod xxhash;

/// One-shot Meta-ID computation. Equivalent to `iscc.iscc.meta_id`.
pub use component::meta_id;
/// One-shot Content-ID-Text computation. Equivalent to `iscc.iscc.content_id_text`.
pub use component::content_id_text;
/// One-shot Content-ID-Image computation. Equivalent to `iscc.iscc.content_id_image`.
pub use component::content_id_image;
/// One-shot Data-ID computation. Equivalent to `iscc.iscc.data_id`.
pub use component::data_id;
/// One-shot Instance-ID computation. Equivalent to `iscc.iscc.instance_id`.
pub use component::instance_id;

/// Hamming distance between two codes of the same header. Equivalent to `iscc.iscc.distance`.
pub use codec::distance;

/// Crate version string, exposed for the CLI `--version` output.
pub const ISCC_VERSION: &str = env!("CARGO_PKG_VERSION");
