use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the filesystem operation layer.
///
/// Every fallible operation in this crate reports failure through this type.
/// The `Display` text is the underlying OS description (opaque, unstructured)
/// so an embedding host can forward it verbatim as the message half of its
/// `(false, message)` return convention.
#[derive(Error, Debug)]
pub enum FsError {
    /// Wrapper for underlying IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context message.
    #[error("{0}")]
    Message(String),

    /// Contextual error that includes source and destination paths.
    #[error("`{}` -> `{}`: {}", .src.display(), .dst.display(), .msg)]
    PathContext {
        src: PathBuf,
        dst: PathBuf,
        msg: String,
    },
}

impl From<walkdir::Error> for FsError {
    fn from(e: walkdir::Error) -> Self {
        FsError::Io(e.into())
    }
}

impl From<String> for FsError {
    fn from(s: String) -> Self {
        FsError::Message(s)
    }
}

/// Convenience alias used across the operation modules.
pub type Result<T> = std::result::Result<T, FsError>;
