//! Library folders and the `.jar` classpath built from them

use crate::{Error, Result, resolve_additional_classpath_folder};
use groovyls_settings::ConfigurationStore;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

const JAR_EXTENSION: &str = ".jar";

/// A readable directory whose `.jar` files extend the classpath.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryFolder {
    path: PathBuf,
}

impl LibraryFolder {
    /// Accept `path` if it exists, is a directory, and can be listed.
    pub fn open(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();

        if !path.is_dir() {
            tracing::debug!(?path, "Library folder rejected: not a directory");
            return None;
        }

        if let Err(e) = fs::read_dir(&path) {
            tracing::debug!(?path, error = %e, "Library folder rejected: not readable");
            return None;
        }

        Some(Self { path })
    }

    /// The folder configured under `groovy.additional.libraries`, if usable.
    pub fn from_settings(store: &impl ConfigurationStore) -> Option<Self> {
        resolve_additional_classpath_folder(store).and_then(Self::open)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Regular files directly inside the folder whose names end in `.jar`,
    /// compared case-insensitively, sorted by path.
    pub fn jars(&self) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(&self.path).map_err(|e| Error::io(&self.path, e))?;

        let mut jars = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&self.path, e))?;
            let path = entry.path();
            if is_jar_name(&entry.file_name()) && path.is_file() {
                jars.push(path);
            }
        }
        jars.sort();

        tracing::debug!(folder = ?self.path, count = jars.len(), "Collected library jars");
        Ok(jars)
    }
}

fn is_jar_name(name: &std::ffi::OsStr) -> bool {
    name.to_string_lossy()
        .to_lowercase()
        .ends_with(JAR_EXTENSION)
}

/// Ordered classpath entries without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Classpath {
    entries: Vec<PathBuf>,
}

impl Classpath {
    pub fn new() -> Self {
        Self::default()
    }

    /// The jars of `folder`, or an empty classpath when there is no folder.
    pub fn from_folder(folder: Option<&LibraryFolder>) -> Result<Self> {
        let mut classpath = Self::new();
        if let Some(folder) = folder {
            classpath.extend(folder.jars()?);
        }
        Ok(classpath)
    }

    /// Append `entry` unless it is already present.
    pub fn push(&mut self, entry: impl Into<PathBuf>) {
        let entry = entry.into();
        if !self.entries.contains(&entry) {
            self.entries.push(entry);
        }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join entries with the platform path-list separator.
    pub fn to_os_string(&self) -> Result<OsString> {
        std::env::join_paths(&self.entries).map_err(|e| {
            let entry = self
                .entries
                .iter()
                .find(|entry| std::env::join_paths([entry]).is_err())
                .cloned()
                .unwrap_or_default();
            Error::InvalidEntry {
                entry,
                message: e.to_string(),
            }
        })
    }
}

impl Extend<PathBuf> for Classpath {
    fn extend<I: IntoIterator<Item = PathBuf>>(&mut self, iter: I) {
        for entry in iter {
            self.push(entry);
        }
    }
}

impl FromIterator<PathBuf> for Classpath {
    fn from_iter<I: IntoIterator<Item = PathBuf>>(iter: I) -> Self {
        let mut classpath = Self::new();
        classpath.extend(iter);
        classpath
    }
}

impl<'a> IntoIterator for &'a Classpath {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::ffi::OsStr;

    #[rstest]
    #[case("camel-core.jar", true)]
    #[case("SLF4J-API.JAR", true)]
    #[case("groovy.Jar", true)]
    #[case("notes.jar.txt", false)]
    #[case("jar", false)]
    #[case("lib.zip", false)]
    fn jar_names_match_case_insensitively(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(is_jar_name(OsStr::new(name)), expected);
    }

    #[test]
    fn push_skips_duplicates() {
        let mut classpath = Classpath::new();
        classpath.push("/libs/a.jar");
        classpath.push("/libs/b.jar");
        classpath.push("/libs/a.jar");

        assert_eq!(
            classpath.entries(),
            &[PathBuf::from("/libs/a.jar"), PathBuf::from("/libs/b.jar")]
        );
    }

    #[test]
    fn empty_classpath_joins_to_empty_string() {
        assert_eq!(Classpath::new().to_os_string().unwrap(), OsString::new());
    }

    #[cfg(unix)]
    #[test]
    fn entry_with_separator_cannot_be_joined() {
        let classpath: Classpath = [PathBuf::from("/ok.jar"), PathBuf::from("/bad:name.jar")]
            .into_iter()
            .collect();

        match classpath.to_os_string() {
            Err(Error::InvalidEntry { entry, .. }) => {
                assert_eq!(entry, PathBuf::from("/bad:name.jar"))
            }
            other => panic!("expected invalid entry, got {:?}", other),
        }
    }
}
