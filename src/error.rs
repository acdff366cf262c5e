// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything here is fatal: the run aborts on the first error and no
/// partial output is kept.
#[derive(Debug, Error)]
pub enum Error {
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("invalid JSON in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("required field `{field}` missing from {path}")]
    MissingField { field: &'static str, path: PathBuf },

    #[error("invalid settings file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("missing font file: {path}")]
    FontAsset { path: PathBuf },

    #[error("failed to load font family `{family}`: {source}")]
    FontLoad {
        family: String,
        #[source]
        source: genpdf::error::Error,
    },

    #[error("page layout engine failed: {source}")]
    Render {
        #[from]
        source: genpdf::error::Error,
    },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    pub fn missing_field(field: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::MissingField {
            field,
            path: path.into(),
        }
    }

    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
