//! Error kinds surfaced by the accessor.

use crate::spec::FeatureOrderMismatch;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no such file: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected shape in {}: {source}", path.display())]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Validation(#[from] FeatureOrderMismatch),
}

impl Error {
    /// Category name shown by the command-line entry point.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NotFound",
            Self::Io { .. } => "IOError",
            Self::Parse { .. } => "ParseError",
            Self::Schema { .. } => "SchemaError",
            Self::Validation(_) => "ValidationError",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
