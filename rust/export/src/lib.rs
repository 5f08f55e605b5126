mod error;
mod walk;

// Flat re-exports — the public API surface
pub use error::{Error, Result};
pub use walk::{ExportOptions, ExportRecord, export, export_tree, resolve_root};
