//! Manifest entry types and serde helpers.
//!
//! YAML written by hand is loose about scalars: an override may be an empty
//! string, a null, or missing. The helpers here normalize those into plain
//! `String`s. Releases are the exception: YAML reads an unquoted `13.10` as
//! the float `13.1`, so a numeric release is rejected instead of converted.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;

/// Software piece shown when the manifest does not override it.
pub const DEFAULT_SOFTWARE_PIECE: &str = "OPatch Utility";

/// One OPatch release listed under `opatch_patches`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatchRecord {
    /// Version string made of dot-separated numeric segments (e.g. `13.9.4.0`).
    #[serde(deserialize_with = "release_string")]
    pub release: String,

    /// Name of the downloadable patch archive.
    #[serde(deserialize_with = "scalar_string")]
    pub patchfile: String,
}

impl PatchRecord {
    #[cfg(test)]
    pub fn new(release: impl Into<String>, patchfile: impl Into<String>) -> Self {
        Self {
            release: release.into(),
            patchfile: patchfile.into(),
        }
    }
}

/// Values under `documentation_overrides.opatch_patches`.
///
/// An empty value means "use the computed default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Overrides {
    #[serde(deserialize_with = "scalar_string")]
    pub category: String,

    #[serde(deserialize_with = "scalar_string")]
    pub software_piece: String,

    #[serde(deserialize_with = "scalar_string")]
    pub file_name: String,
}

impl Overrides {
    /// Category cell text; blank unless overridden.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Software piece cell text; [`DEFAULT_SOFTWARE_PIECE`] unless overridden.
    pub fn software_piece(&self) -> &str {
        non_empty(&self.software_piece).unwrap_or(DEFAULT_SOFTWARE_PIECE)
    }

    /// File cell text for `record`; its patchfile unless overridden.
    pub fn file_name<'a>(&'a self, record: &'a PatchRecord) -> &'a str {
        non_empty(&self.file_name).unwrap_or(&record.patchfile)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Deserialize any YAML scalar into a string.
///
/// Null becomes the empty string and numbers keep their YAML rendering.
pub(crate) fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Sequence(_) => Err(D::Error::custom("expected a scalar, found a sequence")),
        Value::Mapping(_) => Err(D::Error::custom("expected a scalar, found a mapping")),
        Value::Tagged(tagged) => Err(D::Error::custom(format!(
            "expected a scalar, found tagged value {}",
            tagged.tag
        ))),
    }
}

/// Deserialize a release, which must be written as a string.
pub(crate) fn release_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Err(D::Error::custom(format!(
            "release must be a quoted string, found the number {}; quote the value to keep every segment",
            n
        ))),
        _ => Err(D::Error::custom("release must be a quoted string")),
    }
}

/// Deserialize a value that may be written as an explicit null.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
