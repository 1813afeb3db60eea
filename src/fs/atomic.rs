//! Atomic file replacement.
//!
//! Writes follow this pattern:
//! 1. Write content to `.{filename}.tmp` in the target's directory
//! 2. Copy the target's permissions onto the temp file, if the target exists
//! 3. Sync the temp file to disk
//! 4. Rename it over the target
//!
//! Source and destination share a directory, so the rename never crosses a
//! filesystem. `std::fs::rename` replaces an existing destination on both
//! POSIX and Windows. After a crash the temp file may remain next to the
//! target.

use crate::error::{PatchlistError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`.
///
/// # Returns
///
/// * `Ok(())` - The target now holds exactly `content`
/// * `Err(PatchlistError::Io)` - Temp file creation, write, sync, or rename failed;
///   the target is left as it was
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    if let Err(err) = write_temp(&temp_path, path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(err);
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PatchlistError::io(format!("failed to replace '{}'", path.display()), e)
    })
}

/// `.{filename}.tmp` next to the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PatchlistError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_temp(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(temp_path).map_err(|e| {
        PatchlistError::io(
            format!("failed to create temporary file '{}'", temp_path.display()),
            e,
        )
    })?;

    file.write_all(content)
        .map_err(|e| PatchlistError::io("failed to write temporary file", e))?;

    if let Ok(metadata) = fs::metadata(target) {
        file.set_permissions(metadata.permissions())
            .map_err(|e| PatchlistError::io("failed to copy file permissions", e))?;
    }

    file.sync_all()
        .map_err(|e| PatchlistError::io("failed to sync temporary file to disk", e))
}
