use std::{fmt, path::PathBuf};

use ccwc_domain::{ContentUnit, CountKind};
use ccwc_shared_kernel::{DomainError, DomainResult, Result};

/// Identifies the input of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDesignator {
    File(PathBuf),
    Stdin,
}

impl SourceDesignator {
    /// Designate a named file.
    ///
    /// # Errors
    ///
    /// Rejects a zero-length name before any I/O happens.
    pub fn file(name: impl Into<PathBuf>) -> DomainResult<Self> {
        let path = name.into();
        if path.as_os_str().is_empty() {
            return Err(DomainError::InvalidInput { reason: "file name must not be empty".to_string() });
        }
        Ok(Self::File(path))
    }

    /// Label appended to results: the path for files, nothing for stdin.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::File(path) => Some(path.display().to_string()),
            Self::Stdin => None,
        }
    }
}

impl fmt::Display for SourceDesignator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Port producing the content needed to compute one counting kind.
///
/// Raw bytes for [`CountKind::Bytes`], decoded text otherwise.
pub trait ContentResolver {
    fn source(&self) -> &SourceDesignator;

    fn resolve(&mut self, kind: CountKind) -> Result<ContentUnit>;
}
