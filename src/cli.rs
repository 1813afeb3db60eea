//! CLI argument parsing for modify-patchlist.
//!
//! Every argument is optional: a bare invocation patches
//! `docs/user-guide.md` from `modify_patchlist.yaml` under the project root
//! derived from the executable's location.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Insert OPatch release rows from the patch manifest into the user guide's
/// "Required Oracle Software - Download Summary" table.
#[derive(Parser, Debug)]
#[command(name = "modify-patchlist")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root holding the manifest and `docs/` (default: three levels
    /// above the executable).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Manifest path, overriding `<root>/modify_patchlist.yaml`.
    #[arg(long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Markdown document path, overriding `<root>/docs/user-guide.md`.
    #[arg(long, value_name = "FILE")]
    pub doc: Option<PathBuf>,

    /// Print the patched document to stdout instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

/// Format for log lines written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["modify-patchlist"]).unwrap();

        assert!(cli.root.is_none());
        assert!(cli.manifest.is_none());
        assert!(cli.doc.is_none());
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.log_format, LogFormat::Text);
    }

    #[test]
    fn all_arguments_parse() {
        let cli = Cli::try_parse_from([
            "modify-patchlist",
            "--root",
            "/repo",
            "--manifest",
            "/tmp/m.yaml",
            "--doc",
            "guide.md",
            "--dry-run",
            "-vv",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.root, Some(PathBuf::from("/repo")));
        assert_eq!(cli.manifest, Some(PathBuf::from("/tmp/m.yaml")));
        assert_eq!(cli.doc, Some(PathBuf::from("guide.md")));
        assert!(cli.dry_run);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.log_format, LogFormat::Json);
    }

    #[test]
    fn positional_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["modify-patchlist", "extra"]).is_err());
    }
}
