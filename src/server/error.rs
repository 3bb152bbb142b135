//! Static host errors

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ServerError {
    /// The bundle directory does not exist; run `trunk build` first
    #[error("UI bundle not found at {0:?}")]
    MissingBundle(PathBuf),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ServerResult<T> = Result<T, ServerError>;
