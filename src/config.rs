//! Compile-time configuration constants for the ISCC kernel.
//!
//! These are the normative values from the component builders in
//! [`crate::component`]: n-gram/shingle widths and the title/extra trim caps.
//! They never change at runtime — two implementations using different values
//! here produce diverging codes for the same input.

/// Maximum UTF-8 byte length of a trimmed Meta-ID `title` field. Equivalent to `INPUT_TRIM`.
pub const INPUT_TRIM: usize = 128;

/// Maximum UTF-8 byte length of a trimmed Meta-ID `extra` field.
pub const INPUT_TRIM_EXTRA: usize = 4096;

/// Sliding-window width (in code points) used to build Meta-ID n-grams.
pub const WINDOW_SIZE_MID: usize = 4;

/// Sliding-window width (in words) used to build Content-ID-Text shingles.
pub const WINDOW_SIZE_CID_T: usize = 5;
