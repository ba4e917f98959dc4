//! [`TestWorkspace`] builder for classpath and source discovery scenarios.

use groovyls_settings::{Settings, WORKSPACE_SETTINGS_PATH};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Settings key holding the additional libraries folder.
pub const LIBRARIES_KEY: &str = "groovy.additional.libraries";

/// A temporary workspace directory with helpers for test setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use groovyls_test_utils::TestWorkspace;
///
/// let ws = TestWorkspace::new();
/// let libs = ws.library_folder("libs", &["camel-core.jar", "README.md"]);
/// ws.write_workspace_settings(&libs);
/// ws.assert_file_exists(".vscode/settings.json");
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Create the directory `relative` and its parents.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }

    /// Create a folder containing empty files with the given names.
    pub fn library_folder(&self, relative: &str, files: &[&str]) -> PathBuf {
        let dir = self.create_dir(relative);
        for name in files {
            fs::write(dir.join(name), b"").unwrap();
        }
        dir
    }

    /// Write `.vscode/settings.json` pointing the libraries key at `folder`.
    pub fn write_workspace_settings(&self, folder: &Path) -> PathBuf {
        let mut doc = serde_json::Map::new();
        doc.insert(
            LIBRARIES_KEY.to_string(),
            folder.to_string_lossy().into_owned().into(),
        );
        let content = serde_json::Value::Object(doc).to_string();
        self.write_file(WORKSPACE_SETTINGS_PATH, &content)
    }

    /// In-memory settings with the libraries key set to `value`.
    pub fn settings_with_libraries(value: impl Into<serde_json::Value>) -> Settings {
        Settings::empty().with(LIBRARIES_KEY, value)
    }

    // -----------------------------------------------------------------------
    // Assertion helpers
    // -----------------------------------------------------------------------

    /// Panic if `relative` does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let path = self.path(relative);
        assert!(path.exists(), "Expected file to exist: {}", path.display());
    }
}
