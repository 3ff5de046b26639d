//! Error types for filesystem and archive operations.

use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `FsOpsError`.
pub type Result<T> = std::result::Result<T, FsOpsError>;

/// Errors that can occur during a filesystem or archive operation.
///
/// Every variant names the path the operation was touching when it failed,
/// so callers can report which entry of a recursive traversal went wrong
/// instead of a bare success flag.
#[derive(Error, Debug)]
pub enum FsOpsError {
    /// A required input path does not exist.
    #[error("source not found: {path}")]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// The platform rejected the operation with a permission error.
    #[error("permission denied: {path}")]
    PermissionDenied {
        /// The path the operation was denied on.
        path: PathBuf,
    },

    /// I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The path the operation was touching.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The zip codec rejected the container or one of its entries.
    #[error("invalid archive {path}: {message}")]
    InvalidArchive {
        /// Path of the archive.
        path: PathBuf,
        /// Codec-provided detail.
        message: String,
    },

    /// The copy source's base name is in the exclusion set.
    #[error("excluded by name: {path}")]
    Excluded {
        /// The excluded path.
        path: PathBuf,
    },
}

impl FsOpsError {
    /// Classifies an [`std::io::Error`] against the path it occurred on.
    ///
    /// `NotFound` and `PermissionDenied` kinds get their own variants so
    /// callers can match on the failure kind; everything else stays a
    /// generic [`FsOpsError::Io`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fsops_core::FsOpsError;
    ///
    /// let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
    /// let classified = FsOpsError::io("/tmp/missing", err);
    /// assert!(matches!(classified, FsOpsError::SourceNotFound { .. }));
    /// ```
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::SourceNotFound { path },
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// Converts a zip codec error, unwrapping I/O errors so they are
    /// classified like any other platform rejection.
    pub(crate) fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        match source {
            zip::result::ZipError::Io(e) => Self::io(path, e),
            other => Self::InvalidArchive {
                path: path.into(),
                message: other.to_string(),
            },
        }
    }

    /// Converts a directory-walk error, naming the entry that failed when
    /// the walker knows it and `fallback` otherwise.
    pub(crate) fn walk(fallback: &Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map_or_else(|| fallback.to_path_buf(), Path::to_path_buf);
        Self::io(path, source.into())
    }

    /// Returns the path the error occurred on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceNotFound { path }
            | Self::PermissionDenied { path }
            | Self::Io { path, .. }
            | Self::InvalidArchive { path, .. }
            | Self::Excluded { path } => path,
        }
    }

    /// Returns `true` if this error means a required input was missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_display() {
        let err = FsOpsError::SourceNotFound {
            path: PathBuf::from("/tmp/missing"),
        };
        assert!(err.to_string().contains("source not found"));
        assert!(err.to_string().contains("/tmp/missing"));
    }

    #[test]
    fn test_io_classification_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = FsOpsError::io("/a/b", io_err);
        assert!(err.is_not_found());
        assert_eq!(err.path(), Path::new("/a/b"));
    }

    #[test]
    fn test_io_classification_permission_denied() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = FsOpsError::io("/etc/shadow", io_err);
        assert!(matches!(err, FsOpsError::PermissionDenied { .. }));
        assert_eq!(err.path(), Path::new("/etc/shadow"));
    }

    #[test]
    fn test_io_classification_other() {
        let io_err = std::io::Error::other("disk on fire");
        let err = FsOpsError::io("/data", io_err);
        assert!(matches!(err, FsOpsError::Io { .. }));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_invalid_archive_display() {
        let err = FsOpsError::InvalidArchive {
            path: PathBuf::from("broken.zip"),
            message: "bad central directory".into(),
        };
        let display = err.to_string();
        assert!(display.contains("invalid archive"));
        assert!(display.contains("broken.zip"));
        assert!(display.contains("bad central directory"));
    }

    #[test]
    fn test_excluded_display() {
        let err = FsOpsError::Excluded {
            path: PathBuf::from("node_modules"),
        };
        assert!(err.to_string().contains("excluded by name"));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error;

        let io_err = std::io::Error::other("inner");
        let err = FsOpsError::io("/x", io_err);
        assert!(err.source().is_some());
    }
}
