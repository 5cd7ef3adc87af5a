//! CLI command implementations

pub mod check;
pub mod films;
pub mod list;
pub mod show;
pub mod stocks;

use serde::Serialize;

/// Machine-readable summary of one catalog entry.
#[derive(Serialize)]
pub struct PresetInfo {
    /// Persisted tag.
    pub tag: u32,
    /// Selector label.
    pub label: &'static str,
    /// Position in selector order.
    pub index: usize,
    /// Default command string.
    pub command: String,
}
