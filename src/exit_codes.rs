//! Exit code constants for modify-patchlist.
//!
//! - 0: Success
//! - 1: User error (missing or malformed manifest/document, bad arguments)
//! - 2: I/O failure while writing the patched document

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: missing input files, malformed YAML, or invalid arguments.
pub const USER_ERROR: i32 = 1;

/// I/O failure: the patched document could not be written back.
pub const IO_FAILURE: i32 = 2;
