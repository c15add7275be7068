//! Stream provider: a uniform byte-stream source for the chunker and
//! Merkle-leaf loop, over either an in-memory buffer or an open file.
//!
//! Mirrors the teacher's file-handle-on-every-exit-path discipline: a
//! [`Streamable`] built from a path opens the file lazily and the
//! `std::fs::File` it wraps is dropped (closing the descriptor) as soon as
//! the `Streamable` itself is dropped, success or failure.

use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::Path;

/// A blocking byte source. Both variants implement [`Read`] directly via
/// [`Streamable::reader`], so callers that only need `Read` should prefer
/// that over matching on the enum.
pub enum Streamable {
    Bytes(Cursor<Vec<u8>>),
    File(File),
}

impl Streamable {
    /// Wrap an in-memory buffer.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Streamable::Bytes(Cursor::new(bytes))
    }

    /// Open `path` for reading.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        Ok(Streamable::File(File::open(path)?))
    }
}

impl Read for Streamable {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Streamable::Bytes(cursor) => cursor.read(buf),
            Streamable::File(file) => file.read(buf),
        }
    }
}
