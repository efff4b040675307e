// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
///
/// Layer variants are transparent so the message that reaches the user is the
/// one produced by the layer that failed.
#[derive(Debug, Error)]
pub enum CcwcError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CcwcError>,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}

impl CcwcError {
    /// Path named by a not-found failure, looking through any context wrappers.
    pub fn not_found_path(&self) -> Option<&PathBuf> {
        match self {
            Self::Context { source, .. } => source.not_found_path(),
            Self::Infrastructure(InfrastructureError::NotFound { path }) => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CcwcError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("'{}': No such file or directory", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read '{source_name}': {source}")]
    FileRead {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{source_name}': invalid UTF-8 sequence at byte offset {offset}")]
    Decoding {
        source_name: String,
        offset: usize,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CcwcError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl From<std::io::Error> for CcwcError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CcwcError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CcwcError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CcwcError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
