//! Markdown document I/O.
//!
//! The document is handled as a vector of lines where every line keeps its
//! own terminator (`\n`, `\r\n`, or none for a final unterminated line), so
//! joining the vector reproduces the file byte for byte.

use crate::error::{PatchlistError, Result};
use std::io::ErrorKind;
use std::path::Path;

/// Read `path` into lines, preserving line terminators.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Lines of the document
/// * `Err(PatchlistError::ConfigNotFound)` - The file does not exist
/// * `Err(PatchlistError::ReadError)` - The file exists but is unreadable or not UTF-8
pub fn load_markdown<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();

    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => PatchlistError::ConfigNotFound {
            kind: "markdown document",
            path: path.to_path_buf(),
        },
        _ => PatchlistError::ReadError {
            kind: "markdown document",
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    Ok(split_lines(&content))
}

/// Overwrite `path` with `content`.
///
/// The write goes through a temp file and rename, so the previous document
/// stays intact if anything fails.
pub fn save_markdown<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    crate::fs::atomic_write_file(path, content)
}

/// Split text into lines that keep their terminators.
pub fn split_lines(content: &str) -> Vec<String> {
    content.split_inclusive('\n').map(str::to_string).collect()
}

/// Concatenate lines back into document text.
pub fn join_lines(lines: &[String]) -> String {
    lines.concat()
}

/// Line content without its terminator.
pub fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// The terminator the document uses, judged by its first terminated line.
///
/// Documents without any newline get `\n`.
pub fn line_terminator(lines: &[String]) -> &'static str {
    match lines.iter().find(|line| line.ends_with('\n')) {
        Some(line) if line.ends_with("\r\n") => "\r\n",
        _ => "\n",
    }
}
