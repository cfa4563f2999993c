use std::path::PathBuf;

use plz_forms::ValidationFailure;
use thiserror::Error;

/// Errors from a restaurant lookup backend
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("invalid plz: {0}")]
    InvalidPlz(#[from] ValidationFailure),

    #[error("restaurant backend unavailable: {0}")]
    Unavailable(String),
}

/// A catalog seed file could not be loaded
#[derive(Debug, Error)]
#[error("failed to load restaurant seed {path:?}")]
pub struct LoadError {
    pub path: PathBuf,
    #[source]
    pub source: SeedError,
}

/// Why a seed file could not be loaded
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("duplicate restaurant id {0}")]
    DuplicateId(i64),
}
