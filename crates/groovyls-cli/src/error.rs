//! Error types for groovyls-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error loading settings files
    #[error(transparent)]
    Settings(#[from] groovyls_settings::Error),

    /// Error assembling the classpath
    #[error(transparent)]
    Classpath(#[from] groovyls_classpath::Error),

    /// Error building the compilation unit
    #[error(transparent)]
    Sources(#[from] groovyls_sources::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
