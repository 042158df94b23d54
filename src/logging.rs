//! Logging setup
//!
//! Events go to `wallet-watch.log` in the base directory. Command-line runs
//! also echo warnings to stderr; the interactive screen never writes log
//! output to the terminal.

use std::fs::OpenOptions;
use std::sync::Arc;

use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use crate::config::paths::WalletPaths;
use crate::config::settings::Settings;
use crate::error::WalletError;

/// Environment variable holding a filter directive (e.g. `debug`)
pub const LOG_ENV: &str = "WALLET_WATCH_LOG";

/// Where log output goes besides the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    FileOnly,
    FileAndStderr,
}

/// Build the file filter from the environment, else the configured level
pub fn build_filter(env_directive: Option<&str>, configured_level: &str) -> EnvFilter {
    env_directive
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .or_else(|| EnvFilter::try_new(configured_level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

/// Install the global subscriber
pub fn init_logging(
    paths: &WalletPaths,
    settings: &Settings,
    output: LogOutput,
) -> Result<(), WalletError> {
    paths.ensure_directories()?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| {
            WalletError::Config(format!(
                "Could not open log file {}: {}",
                paths.log_file().display(),
                e
            ))
        })?;

    let env_directive = std::env::var(LOG_ENV).ok();
    let file_log = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file))
        .with_filter(build_filter(env_directive.as_deref(), &settings.log_level));

    let stderr_log = (output == LogOutput::FileAndStderr).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .without_time()
            .with_target(false)
            .with_filter(LevelFilter::WARN)
    });

    tracing_subscriber::registry()
        .with(file_log)
        .with(stderr_log)
        .try_init()
        .map_err(|e| WalletError::Config(format!("Could not initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        let filter = build_filter(Some("debug"), "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_configured_level_used_without_env() {
        let filter = build_filter(None, "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_bad_directives_fall_back_to_info() {
        let filter = build_filter(Some("wallet_watch=loud"), "wallet_watch=verbose");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
