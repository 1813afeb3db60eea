//! Table row rendering.

use crate::manifest::{Overrides, PatchRecord};

/// Render the single-line HTML row for `record`, without a line terminator.
///
/// The first cell is left blank; the remaining cells are category, software
/// piece, and file name, each resolved against `overrides`.
pub fn format_row(record: &PatchRecord, overrides: &Overrides) -> String {
    format!(
        "<tr><td></td><td>{}</td><td>{}</td><td>{}</td></tr>",
        overrides.category(),
        overrides.software_piece(),
        overrides.file_name(record)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_row() {
        let record = PatchRecord::new("13.9.4.0", "p12345.zip");

        assert_eq!(
            format_row(&record, &Overrides::default()),
            "<tr><td></td><td></td><td>OPatch Utility</td><td>p12345.zip</td></tr>"
        );
    }

    #[test]
    fn overridden_row() {
        let record = PatchRecord::new("13.9.4.0", "p12345.zip");
        let overrides = Overrides {
            category: "Utilities".to_string(),
            software_piece: "OPatch 13.9".to_string(),
            file_name: "p6880880_190000_Linux-x86-64.zip".to_string(),
        };

        assert_eq!(
            format_row(&record, &overrides),
            "<tr><td></td><td>Utilities</td><td>OPatch 13.9</td><td>p6880880_190000_Linux-x86-64.zip</td></tr>"
        );
    }
}
