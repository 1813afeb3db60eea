//! The patch pipeline: load, insert, write.

use crate::cli::Cli;
use crate::document::{join_lines, load_markdown, save_markdown};
use crate::error::Result;
use crate::inserter::{InsertOutcome, insert_rows};
use crate::layout::ProjectLayout;
use crate::manifest::load_yaml;
use std::path::PathBuf;

/// What a pipeline run did to the document.
#[derive(Debug)]
pub struct PatchSummary {
    pub document: PathBuf,
    pub outcomes: Vec<InsertOutcome>,
    /// Full patched document text.
    pub content: String,
}

impl PatchSummary {
    pub fn inserted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_inserted()).count()
    }
}

/// Run the tool for parsed CLI arguments.
pub fn run(cli: &Cli) -> Result<()> {
    let layout = resolve_layout(cli)?;
    tracing::debug!(root = %layout.root.display(), "resolved project layout");
    let summary = patch_document(&layout, !cli.dry_run)?;

    if cli.dry_run {
        print!("{}", summary.content);
    } else {
        println!(
            "Inserted {} of {} patch rows into {}",
            summary.inserted(),
            summary.outcomes.len(),
            summary.document.display()
        );
    }
    Ok(())
}

/// Resolve input paths from the CLI flags, falling back to the fixed layout.
pub fn resolve_layout(cli: &Cli) -> Result<ProjectLayout> {
    let mut layout = match &cli.root {
        Some(root) => ProjectLayout::from_root(root),
        None => ProjectLayout::from_executable()?,
    };
    if let Some(manifest) = &cli.manifest {
        layout = layout.with_manifest(manifest);
    }
    if let Some(doc) = &cli.doc {
        layout = layout.with_document(doc);
    }
    Ok(layout)
}

/// Insert every manifest record into the document and optionally save it.
///
/// Both inputs are loaded before anything is written, so a missing or
/// malformed input never touches the document.
pub fn patch_document(layout: &ProjectLayout, write: bool) -> Result<PatchSummary> {
    let manifest = load_yaml(&layout.manifest)?;
    tracing::info!(
        manifest = %layout.manifest.display(),
        records = manifest.opatch_patches.len(),
        "loaded manifest"
    );

    let mut lines = load_markdown(&layout.document)?;
    tracing::info!(
        document = %layout.document.display(),
        lines = lines.len(),
        "loaded document"
    );

    let outcomes = insert_rows(&manifest.opatch_patches, manifest.overrides(), &mut lines);
    let content = join_lines(&lines);

    if write {
        save_markdown(&layout.document, &content)?;
        tracing::info!(document = %layout.document.display(), "saved document");
    }

    Ok(PatchSummary {
        document: layout.document.clone(),
        outcomes,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PatchlistError;
    use crate::exit_codes;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const GUIDE: &str = "# User Guide\n\n\
#### Required Oracle Software - Download Summary\n\n\
<table>\n<tbody>\n\
<tr>\n<td>13.9.3.0</td>\n<td></td>\n<td>OPatch Utility</td>\n<td>p6880880_190000_Linux-x86-64.zip</td>\n</tr>\n\
</tbody>\n</table>\n";

    const MANIFEST: &str = r#"
opatch_patches:
  - release: "13.9.4.0"
    patchfile: p12345.zip
documentation_overrides:
  opatch_patches:
    category: ""
    software_piece: ""
    file_name: ""
"#;

    fn write_project(root: &Path, manifest: &str, guide: &str) {
        fs::write(root.join("modify_patchlist.yaml"), manifest).unwrap();
        fs::create_dir_all(root.join("docs")).unwrap();
        fs::write(root.join("docs").join("user-guide.md"), guide).unwrap();
    }

    fn cli_for(root: &Path) -> Cli {
        Cli {
            root: Some(root.to_path_buf()),
            manifest: None,
            doc: None,
            dry_run: false,
            verbose: 0,
            log_format: crate::cli::LogFormat::Text,
        }
    }

    #[test]
    fn patches_user_guide_in_place() {
        let temp_dir = TempDir::new().unwrap();
        write_project(temp_dir.path(), MANIFEST, GUIDE);

        run(&cli_for(temp_dir.path())).unwrap();

        let patched = fs::read_to_string(temp_dir.path().join("docs/user-guide.md")).unwrap();
        assert_eq!(
            patched,
            GUIDE.replacen(
                "<tbody>\n",
                "<tbody>\n<tr><td></td><td></td><td>OPatch Utility</td><td>p12345.zip</td></tr>\n",
                1
            )
        );
    }

    #[test]
    fn dry_run_leaves_document_untouched() {
        let temp_dir = TempDir::new().unwrap();
        write_project(temp_dir.path(), MANIFEST, GUIDE);
        let layout = ProjectLayout::from_root(temp_dir.path());

        let summary = patch_document(&layout, false).unwrap();

        assert_eq!(summary.inserted(), 1);
        assert!(summary.content.contains("<td>p12345.zip</td>"));
        assert_eq!(fs::read_to_string(&layout.document).unwrap(), GUIDE);
    }

    #[test]
    fn no_insertion_point_rewrites_identical_document() {
        let temp_dir = TempDir::new().unwrap();
        write_project(temp_dir.path(), MANIFEST, &GUIDE.replace("13.9.3.0", "13.9.5.0"));
        let layout = ProjectLayout::from_root(temp_dir.path());
        let before = fs::read_to_string(&layout.document).unwrap();

        let summary = patch_document(&layout, true).unwrap();

        assert_eq!(summary.inserted(), 0);
        assert_eq!(summary.outcomes.len(), 1);
        assert_eq!(fs::read_to_string(&layout.document).unwrap(), before);
    }

    #[test]
    fn missing_manifest_exits_with_user_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("docs")).unwrap();
        fs::write(temp_dir.path().join("docs/user-guide.md"), GUIDE).unwrap();

        let err = run(&cli_for(temp_dir.path())).unwrap_err();

        assert!(matches!(err, PatchlistError::ConfigNotFound { kind: "manifest", .. }));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn missing_document_exits_with_user_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("modify_patchlist.yaml"), MANIFEST).unwrap();

        let err = run(&cli_for(temp_dir.path())).unwrap_err();

        assert!(matches!(
            err,
            PatchlistError::ConfigNotFound {
                kind: "markdown document",
                ..
            }
        ));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn malformed_manifest_leaves_document_untouched() {
        let temp_dir = TempDir::new().unwrap();
        write_project(temp_dir.path(), "opatch_patches: [\n", GUIDE);

        let err = run(&cli_for(temp_dir.path())).unwrap_err();

        assert!(matches!(err, PatchlistError::ConfigParseError { .. }));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        let guide = fs::read_to_string(temp_dir.path().join("docs/user-guide.md")).unwrap();
        assert_eq!(guide, GUIDE);
    }

    #[test]
    fn unreadable_document_exits_with_user_error() {
        let temp_dir = TempDir::new().unwrap();
        write_project(temp_dir.path(), MANIFEST, GUIDE);
        let doc = temp_dir.path().join("docs/user-guide.md");
        fs::write(&doc, [0xc3u8, 0x28, b'\n']).unwrap();

        let err = run(&cli_for(temp_dir.path())).unwrap_err();

        assert!(matches!(err, PatchlistError::ReadError { .. }));
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert_eq!(fs::read(&doc).unwrap(), vec![0xc3u8, 0x28, b'\n']);
    }

    #[test]
    fn explicit_paths_override_root() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("patches.yaml");
        let guide = temp_dir.path().join("guide.md");
        fs::write(&manifest, MANIFEST).unwrap();
        fs::write(&guide, GUIDE).unwrap();

        let mut cli = cli_for(&temp_dir.path().join("does-not-exist"));
        cli.manifest = Some(manifest);
        cli.doc = Some(guide.clone());
        run(&cli).unwrap();

        assert!(fs::read_to_string(&guide).unwrap().contains("<td>p12345.zip</td>"));
    }
}
