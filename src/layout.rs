//! Project path layout.
//!
//! The tool ships inside the repository it documents. Without arguments the
//! repository root is the third ancestor directory of the executable, which
//! for a cargo build (`<root>/target/<profile>/modify-patchlist`) is the
//! directory holding `target/`.

use crate::error::{PatchlistError, Result};
use std::path::{Path, PathBuf};

/// Manifest file name, relative to the project root.
pub const MANIFEST_FILE: &str = "modify_patchlist.yaml";

/// User guide path, relative to the project root.
pub const USER_GUIDE_FILE: &str = "docs/user-guide.md";

/// Number of directory levels between the executable and the project root.
const ROOT_DEPTH: usize = 3;

/// Resolved input/output paths for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub document: PathBuf,
}

impl ProjectLayout {
    /// Layout with the default file names under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            manifest: root.join(MANIFEST_FILE),
            document: root.join(USER_GUIDE_FILE),
            root,
        }
    }

    /// Layout rooted relative to the running executable.
    pub fn from_executable() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| {
            PatchlistError::UserError(format!(
                "failed to locate the running executable: {}; pass --root",
                e
            ))
        })?;
        Ok(Self::from_root(root_above(&exe)?))
    }

    /// Replace the manifest path.
    pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
        self.manifest = manifest.into();
        self
    }

    /// Replace the document path.
    pub fn with_document(mut self, document: impl Into<PathBuf>) -> Self {
        self.document = document.into();
        self
    }
}

/// The directory [`ROOT_DEPTH`] levels above `path`.
fn root_above(path: &Path) -> Result<PathBuf> {
    path.ancestors()
        .nth(ROOT_DEPTH)
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            PatchlistError::UserError(format!(
                "cannot derive project root from '{}'; pass --root",
                path.display()
            ))
        })
}
