//! Command-line argument definitions via `clap`'s derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = crate::cli::constants::PROGRAM_NAME, version, about = "Compute International Standard Content Codes")]
pub struct Cli {
    /// Emit machine-readable JSON instead of plain text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase output verbosity (can be repeated).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute a Meta-ID from a title and optional extra metadata.
    Meta {
        title: String,
        #[arg(default_value = "")]
        extra: String,
    },
    /// Compute a Content-ID-Text from a UTF-8 text file or literal string.
    Text {
        /// Path to a text file; reads the literal argument instead if `--literal` is set.
        input: String,
        #[arg(long)]
        literal: bool,
        #[arg(long)]
        partial: bool,
    },
    /// Compute a Content-ID-Image from an image file.
    #[cfg(feature = "image-io")]
    Image {
        path: PathBuf,
        #[arg(long)]
        partial: bool,
    },
    /// Compute a Data-ID from a file's content-defined chunks.
    Data { path: PathBuf },
    /// Compute an Instance-ID from a file's raw bytes.
    Instance { path: PathBuf },
    /// Compute every applicable component code for one or more files.
    /// Directories are expanded recursively.
    Id {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Compute the Hamming distance between two codes of the same type.
    Distance {
        a: String,
        b: String,
        /// Allow comparing codes with differing headers by common prefix.
        #[arg(long)]
        mixed: bool,
    },
    /// Compute Data-ID and Instance-ID for every file under the given paths.
    Batch {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
}
