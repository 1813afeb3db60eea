//! Row insertion into the download summary table.
//!
//! The user guide carries an HTML table under a fixed heading:
//!
//! ```text
//! #### Required Oracle Software - Download Summary
//!
//! <table>
//! <tbody>
//! <tr>
//! <td>13.9.3.0</td>
//! <td></td>
//! <td>OPatch Utility</td>
//! <td>p6880880_190000_Linux-x86-64.zip</td>
//! </tr>
//! </tbody>
//! </table>
//! ```
//!
//! Rows are kept in descending release order, compared as plain strings. A
//! new row goes directly above the first existing row whose release sorts
//! strictly before the new one.
//! When the table closes without such a row, nothing is inserted.

mod row;
mod version;


pub use row::format_row;
pub use version::{extract_version, sorts_below};

use crate::document::{line_terminator, strip_terminator};
use crate::manifest::{Overrides, PatchRecord};
use std::fmt;

/// Heading that introduces the target table.
pub const SECTION_HEADING: &str = "#### Required Oracle Software - Download Summary";

/// Line that opens the table body.
pub const TBODY_OPEN: &str = "<tbody>";

/// Line that closes the table body.
pub const TBODY_CLOSE: &str = "</tbody>";

/// Result of inserting a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was spliced in at this zero-based line index.
    Inserted { line: usize },
    /// The document was left unchanged.
    NoMatch(ScanStop),
}

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }
}

/// Why a scan ended without inserting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStop {
    /// The record has an empty release.
    EmptyRelease,
    /// The section heading never appears.
    SectionMissing,
    /// The heading appears but no `<tbody>` follows it.
    TableMissing,
    /// The table body ended (or the document ended inside it) before any
    /// lower release was seen.
    TableClosed,
}

impl fmt::Display for ScanStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ScanStop::EmptyRelease => "release is empty",
            ScanStop::SectionMissing => "section heading not found",
            ScanStop::TableMissing => "no <tbody> after the section heading",
            ScanStop::TableClosed => "no lower release before </tbody>",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingSection,
    SeekingTableOpen,
    ScanningRows,
}

/// Insert one row per record, in order.
///
/// Each record rescans `lines` from the top, so later records see the rows
/// inserted for earlier ones. No deduplication is done: the same record
/// inserted twice produces two rows.
pub fn insert_rows(
    records: &[PatchRecord],
    overrides: &Overrides,
    lines: &mut Vec<String>,
) -> Vec<InsertOutcome> {
    records
        .iter()
        .map(|record| {
            let outcome = insert_row(record, overrides, lines);
            match &outcome {
                InsertOutcome::Inserted { line } => tracing::info!(
                    release = %record.release,
                    patchfile = %record.patchfile,
                    line = line + 1,
                    "inserted patch row"
                ),
                InsertOutcome::NoMatch(reason) => tracing::debug!(
                    release = %record.release,
                    %reason,
                    "patch row not inserted"
                ),
            }
            outcome
        })
        .collect()
}

/// Insert the row for a single record.
pub fn insert_row(
    record: &PatchRecord,
    overrides: &Overrides,
    lines: &mut Vec<String>,
) -> InsertOutcome {
    if record.release.is_empty() {
        return InsertOutcome::NoMatch(ScanStop::EmptyRelease);
    }

    match find_insertion_point(lines, &record.release) {
        Ok(at) => {
            let mut row = format_row(record, overrides);
            row.push_str(line_terminator(lines));
            lines.insert(at, row);
            InsertOutcome::Inserted { line: at }
        }
        Err(stop) => InsertOutcome::NoMatch(stop),
    }
}

/// Locate the line index the new row should occupy.
///
/// The index is the `<tr` line opening the first row whose release sorts
/// before `release`, or the version line itself when that row has no
/// separate opening line.
fn find_insertion_point(lines: &[String], release: &str) -> Result<usize, ScanStop> {
    let mut state = ScanState::SeekingSection;
    let mut row_start: Option<usize> = None;

    for (idx, line) in lines.iter().enumerate() {
        let text = strip_terminator(line).trim();

        match state {
            ScanState::SeekingSection => {
                if text == SECTION_HEADING {
                    state = ScanState::SeekingTableOpen;
                }
            }
            ScanState::SeekingTableOpen => {
                if text == TBODY_OPEN {
                    state = ScanState::ScanningRows;
                }
            }
            ScanState::ScanningRows => {
                if text == TBODY_CLOSE {
                    return Err(ScanStop::TableClosed);
                }
                if text.starts_with("<tr") {
                    row_start = Some(idx);
                }

                if let Some(existing) = extract_version(line)
                    && sorts_below(existing, release)
                {
                    return Ok(row_start.unwrap_or(idx));
                }

                if text.starts_with("</tr") {
                    row_start = None;
                }
            }
        }
    }

    Err(match state {
        ScanState::SeekingSection => ScanStop::SectionMissing,
        ScanState::SeekingTableOpen => ScanStop::TableMissing,
        ScanState::ScanningRows => ScanStop::TableClosed,
    })
}
