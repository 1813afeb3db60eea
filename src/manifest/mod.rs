//! Patch manifest model for modify-patchlist.
//!
//! This module defines the structs that represent `modify_patchlist.yaml`:
//! the list of OPatch releases to document and the per-field overrides used
//! when rendering their table rows. Parsing is forward-compatible (unknown
//! keys are ignored) and tolerant of blank or null override values.

mod model;
pub mod types;


// Re-export public API
pub use model::{DocumentationOverrides, Manifest, load_yaml};
pub use types::{DEFAULT_SOFTWARE_PIECE, Overrides, PatchRecord};
