//! Manifest root and loading.

use super::types::{Overrides, PatchRecord, null_as_default};
use crate::error::{PatchlistError, Result};
use serde::Deserialize;
use std::io::ErrorKind;
use std::path::Path;

/// Contents of `modify_patchlist.yaml`.
///
/// Only the keys this tool reads are modelled; everything else in the file
/// is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Releases to document, in the order they should be inserted.
    #[serde(deserialize_with = "null_as_default")]
    pub opatch_patches: Vec<PatchRecord>,

    #[serde(deserialize_with = "null_as_default")]
    pub documentation_overrides: DocumentationOverrides,
}

/// The `documentation_overrides` section, keyed by patch category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentationOverrides {
    #[serde(deserialize_with = "null_as_default")]
    pub opatch_patches: Overrides,
}

impl Manifest {
    /// Load a manifest from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Manifest)` - Successfully parsed manifest
    /// * `Err(PatchlistError::ConfigNotFound)` - The file does not exist
    /// * `Err(PatchlistError::ReadError)` - The file exists but cannot be read
    /// * `Err(PatchlistError::ConfigParseError)` - The YAML is malformed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PatchlistError::ConfigNotFound {
                kind: "manifest",
                path: path.to_path_buf(),
            },
            _ => PatchlistError::ReadError {
                kind: "manifest",
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        Self::from_yaml(&content).map_err(|message| PatchlistError::ConfigParseError {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Parse a manifest from a YAML string.
    ///
    /// Returns the parser's message on failure so the caller can attach the
    /// file path.
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| e.to_string())
    }

    /// Overrides that apply to OPatch rows.
    pub fn overrides(&self) -> &Overrides {
        &self.documentation_overrides.opatch_patches
    }
}

/// Read and parse the manifest at `path`.
pub fn load_yaml<P: AsRef<Path>>(path: P) -> Result<Manifest> {
    Manifest::load(path)
}
