//! Version tokens read from table lines.
//!
//! Versions are compared as plain strings, so `13.9.4` sorts below
//! `13.9.4.0` and `13.10.0.0` sorts below `13.9.3.0`.

use regex::Regex;
use std::sync::LazyLock;

/// Digits and dots only.
static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9.]+$").expect("Invalid version regex"));

/// Whether `text` looks like a release cell value.
pub fn is_version(text: &str) -> bool {
    VERSION_REGEX.is_match(text)
}

/// Whether a row holding `existing` should sit below a new row for `release`.
///
/// True only when `existing` sorts strictly before `release` as a string.
pub fn sorts_below(existing: &str, release: &str) -> bool {
    existing != release && existing < release
}

/// Pull the version out of a single-cell line such as `<td>13.9.3.0</td>`.
///
/// The line must split on `>` into exactly three fragments; the candidate is
/// the second fragment up to its first `<`. Anything that is not made of
/// digits and dots yields `None`.
pub fn extract_version(line: &str) -> Option<&str> {
    let fragments: Vec<&str> = line.split('>').collect();
    if fragments.len() != 3 {
        return None;
    }
    let candidate = fragments[1].split('<').next()?;
    is_version(candidate).then_some(candidate)
}
