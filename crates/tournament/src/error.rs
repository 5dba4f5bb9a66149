use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TournamentError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown engine {0:?}")]
    UnknownEngine(String),
}
