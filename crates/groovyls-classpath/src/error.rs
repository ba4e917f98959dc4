//! Error types for groovyls-classpath

use std::path::PathBuf;

/// Result type for classpath operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling a classpath
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Classpath entry {entry} cannot be joined: {message}")]
    InvalidEntry { entry: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
