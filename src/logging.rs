//! Process-wide logging bootstrap for programs built on this crate.
//!
//! The repository core never logs; snapshot files and the demo programs emit
//! `event=... module=...` lines through the `log` facade.

use flexi_logger::{Logger, LoggerHandle, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use thiserror::Error;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    _logger: LoggerHandle,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggingError {
    #[error("unsupported log level `{0}`; expected trace|debug|info|warn|error")]
    UnsupportedLevel(String),

    #[error("logging already initialized with level `{active}`; refusing to switch to `{requested}`")]
    LevelConflict {
        active: &'static str,
        requested: &'static str,
    },

    #[error("failed to start logger: {0}")]
    Backend(String),
}

/// Start logging to stderr at `level`.
///
/// Repeated calls with the same level are no-ops; a different level is rejected.
/// `RUST_LOG`, when set, overrides the level filter of the first initialization.
pub fn init_logging(level: &str) -> Result<(), LoggingError> {
    let requested = normalize_level(level)?;

    let state = LOGGING_STATE.get_or_try_init(|| -> Result<LoggingState, LoggingError> {
        let logger = Logger::try_with_env_or_str(requested)
            .map_err(|err| LoggingError::Backend(err.to_string()))?
            .log_to_stderr()
            .write_mode(WriteMode::Direct)
            .format(flexi_logger::default_format)
            .start()
            .map_err(|err| LoggingError::Backend(err.to_string()))?;

        info!(
            "event=logging_init module=logging status=ok level={} version={}",
            requested,
            env!("CARGO_PKG_VERSION")
        );

        Ok(LoggingState {
            level: requested,
            _logger: logger,
        })
    })?;

    if state.level != requested {
        return Err(LoggingError::LevelConflict {
            active: state.level,
            requested,
        });
    }

    Ok(())
}

/// Active log level, or `None` before [`init_logging`] succeeded.
pub fn logging_level() -> Option<&'static str> {
    LOGGING_STATE.get().map(|state| state.level)
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn normalize_level(level: &str) -> Result<&'static str, LoggingError> {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok("trace"),
        "debug" => Ok("debug"),
        "info" => Ok("info"),
        "warn" | "warning" => Ok("warn"),
        "error" => Ok("error"),
        other => Err(LoggingError::UnsupportedLevel(other.to_string())),
    }
}
