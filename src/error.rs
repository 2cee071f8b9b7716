//! Error type shared by the buffer boundary, I/O helpers and native backends.
//!
//! The numeric core never fails; only construction, configuration, disk I/O
//! and the native collaborator return `Result`.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EdgeError {
    /// Byte length does not match `width * height * 4`.
    #[error("invalid buffer shape: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    InvalidBufferShape {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("native backend not initialized")]
    NotInitialized,

    #[error("unsupported kernel size {0}")]
    UnsupportedKernelSize(usize),

    #[error("invalid thresholds: low {low} exceeds high {high}")]
    InvalidThresholds { low: f64, high: f64 },

    #[error("backend error: {0}")]
    Backend(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EdgeError>;
