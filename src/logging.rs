//! Tracing setup.

use crate::cli::{Cli, LogFormat};
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the global subscriber from the CLI verbosity flags.
///
/// Progress (manifest and document loaded, rows inserted, document saved) is
/// shown at the default `info` level. `RUST_LOG` takes precedence when set.
/// Logs go to stderr so `--dry-run` output on stdout stays clean.
pub fn init_tracing(cli: &Cli) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose)));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "modify_patchlist=info",
        1 => "modify_patchlist=debug",
        _ => "modify_patchlist=trace",
    }
}
