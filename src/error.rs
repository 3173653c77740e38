use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problems loading or validating the game configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("grid size {size} is outside the supported range {min}..={max}")]
    InvalidGridSize { size: u16, min: u16, max: u16 },
    #[error("tick interval {interval_ms} ms is below the minimum of {min_ms} ms")]
    InvalidTickInterval { interval_ms: u64, min_ms: u64 },
}

/// Top-level failures surfaced by the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}
