//! Error types for groovyls-sources

use std::path::PathBuf;

/// Result type for source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building compilation units
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Classpath(#[from] groovyls_classpath::Error),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
