//! Tracing setup.
//!
//! The interactive storefront owns the terminal, so while it runs log lines
//! go to a file under the data directory. Plain subcommands log to stderr.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use crate::args::LogLevel;

pub const LOG_FILE: &str = "tato-aisle.log";

pub enum LogTarget<'a> {
    Stderr,
    File { dir: &'a Path },
}

/// Install the global subscriber. `RUST_LOG` wins over `level`.
///
/// Calling this twice is harmless; the first subscriber stays installed.
pub fn init(target: LogTarget<'_>, level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    match target {
        LogTarget::File { dir } => {
            if std::fs::create_dir_all(dir).is_ok() {
                let log_path = dir.join(LOG_FILE);
                if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
                    let file_layer = tracing_subscriber::fmt::layer()
                        .with_writer(file)
                        .with_ansi(false)
                        .with_target(true);

                    let installed = tracing_subscriber::registry()
                        .with(filter)
                        .with(file_layer)
                        .try_init()
                        .is_ok();
                    if installed {
                        tracing::info!(path = %log_path.display(), "file logging initialized");
                    }
                }
            }
            // No usable log file: stay silent rather than draw over the UI.
        }
        LogTarget::Stderr => {
            let stderr_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);

            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init();
        }
    }
}

fn default_directive(level: LogLevel) -> String {
    // Our crates at the requested level, everything else at warn.
    format!(
        "warn,tato_aisle={level},tato_runtime={level},tato_engine={level},tato_core={level}",
        level = level
    )
}
