use crate::input::InputError;
use crimedb_core::{CaseError, DbError};
use std::path::PathBuf;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

/// Failures rendered at the command boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Case(#[from] CaseError),
    #[error("cannot open store `{}`: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: DbError,
    },
    #[error("failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// `1` for rejected input or references, `2` when the store is unusable.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Input(_) => 1,
            Self::Case(CaseError::StorageUnavailable(_)) => 2,
            Self::Case(_) => 1,
            Self::Open { .. } | Self::Json(_) => 2,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Case(err) => err.is_retryable(),
            Self::Open { source, .. } => source.is_contention(),
            _ => false,
        }
    }
}
