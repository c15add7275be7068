//! Serde DTOs for the CLI's `--json` output. Pure data-transfer shapes —
//! nothing here feeds back into the kernel.

use serde::Serialize;

/// A single computed component code plus the header byte it carries.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentResult {
    pub kind: &'static str,
    pub code: String,
}

/// The full set of codes computed for one input, as emitted by the CLI's
/// `id` subcommand.
#[derive(Debug, Clone, Serialize, Default)]
pub struct IsccResult {
    pub meta_id: Option<String>,
    pub content_id: Option<String>,
    pub data_id: Option<String>,
    pub instance_id: Option<String>,
    pub title: Option<String>,
    pub extra: Option<String>,
}

/// Output shape for the CLI's `distance` subcommand.
#[derive(Debug, Clone, Serialize)]
pub struct DistanceResult {
    pub a: String,
    pub b: String,
    pub hamming_distance: u32,
}
