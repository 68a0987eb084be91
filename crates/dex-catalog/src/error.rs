use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("catalog request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read catalog from stdin: {0}")]
    Stdin(#[source] std::io::Error),

    #[error("catalog is not a JSON array of records: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record {index} has no name")]
    MissingName { index: usize },

    #[error("record {index} has an invalid strength: {value}")]
    InvalidStrength { index: usize, value: f64 },

    #[error("catalog loader task ended before delivering a result")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Errors caused by the data itself rather than by getting hold of it.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            CatalogError::Json(_)
                | CatalogError::MissingName { .. }
                | CatalogError::InvalidStrength { .. }
        )
    }
}
