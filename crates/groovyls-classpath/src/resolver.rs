//! Additional classpath folder resolution
//!
//! The folder comes from the `groovy.additional.libraries` setting. It is
//! accepted only if the setting holds a non-empty string naming an existing
//! directory. Every other outcome means "no additional folder"; nothing is
//! reported as an error and nothing is cached between calls.

use groovyls_settings::ConfigurationStore;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings key holding the additional libraries folder.
pub const ADDITIONAL_LIBRARIES_KEY: &str = "groovy.additional.libraries";

/// Outcome of checking the configured folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FolderCheck {
    /// The key is unset, null, or an empty string.
    NotConfigured,
    /// The key holds something other than a string.
    NotAString,
    /// Nothing exists at the configured path.
    Missing(PathBuf),
    /// The configured path exists but is not a directory.
    NotADirectory(PathBuf),
    /// The configured path was a directory when checked.
    Resolved(PathBuf),
}

impl FolderCheck {
    /// The resolved folder, or `None` for every other outcome.
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Self::Resolved(path) => Some(path),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// The configured path, if the setting held one.
    pub fn configured_path(&self) -> Option<&Path> {
        match self {
            Self::Missing(path) | Self::NotADirectory(path) | Self::Resolved(path) => Some(path),
            Self::NotConfigured | Self::NotAString => None,
        }
    }
}

impl std::fmt::Display for FolderCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "{} is not set", ADDITIONAL_LIBRARIES_KEY),
            Self::NotAString => write!(f, "{} is not a string", ADDITIONAL_LIBRARIES_KEY),
            Self::Missing(path) => write!(f, "{} does not exist", path.display()),
            Self::NotADirectory(path) => write!(f, "{} is not a directory", path.display()),
            Self::Resolved(path) => write!(f, "{} is a directory", path.display()),
        }
    }
}

/// Check a raw setting value without consulting any store.
///
/// The returned path is the configured string unchanged.
pub fn check_folder(value: Option<&Value>) -> FolderCheck {
    let raw = match value {
        None | Some(Value::Null) => return FolderCheck::NotConfigured,
        Some(Value::String(s)) if s.is_empty() => return FolderCheck::NotConfigured,
        Some(Value::String(s)) => s,
        Some(_) => return FolderCheck::NotAString,
    };

    let path = PathBuf::from(raw);
    match fs::metadata(&path) {
        Ok(metadata) if metadata.is_dir() => FolderCheck::Resolved(path),
        Ok(_) => FolderCheck::NotADirectory(path),
        Err(_) => FolderCheck::Missing(path),
    }
}

/// Check the folder named by `groovy.additional.libraries` in `store`.
pub fn inspect_additional_classpath_folder(store: &impl ConfigurationStore) -> FolderCheck {
    let check = check_folder(store.get(ADDITIONAL_LIBRARIES_KEY));
    tracing::debug!(outcome = %check, "Checked additional classpath folder");
    check
}

/// The configured additional classpath folder, if it is an existing directory.
pub fn resolve_additional_classpath_folder(store: &impl ConfigurationStore) -> Option<PathBuf> {
    inspect_additional_classpath_folder(store).into_path()
}
