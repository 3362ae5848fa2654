use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the agent library
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read knowledge graph {path}: {source}")]
    GraphRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Knowledge graph {path} contains no facts")]
    GraphEmpty { path: PathBuf },

    #[error("Invalid frame: {0}")]
    Frame(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
