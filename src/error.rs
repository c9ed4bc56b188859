use std::path::PathBuf;

use thiserror::Error;

/// Failures at the durable-store layer.
///
/// A missing store file is deliberately *not* an error — the store
/// auto-initializes itself to `{}` on first use. A store that exists but
/// cannot be parsed is corrupt, and we refuse to guess at its contents.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("link store at {path:?} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("link store I/O failure")]
    Io(#[from] std::io::Error),
}

/// Failures of registry operations, as seen by the HTTP layer.
///
/// `MissingUrl` and `CodeExists` are detected before any mutation and map to
/// 400; `NotFound` maps to 404; `Store` covers everything that becomes a 500.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("URL is required")]
    MissingUrl,

    #[error("short code '{0}' already exists")]
    CodeExists(String),

    #[error("short code '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
