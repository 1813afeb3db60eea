//! Filesystem utilities for modify-patchlist.
//!
//! The user guide is rewritten in place, so writes go through a temp file and
//! rename rather than truncating the document directly.

pub mod atomic;

pub use atomic::atomic_write_file;
