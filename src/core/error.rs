// src/core/error.rs

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Cannot open problem file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stream error: {0}")]
    Stream(#[from] std::io::Error),

    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Cannot parse token '{token}' as {target}")]
    Parse { token: String, target: &'static str },

    #[error("Modulus must be positive, got {0}")]
    InvalidModulus(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, KitError>;
