//! Compilation units and their sources

use groovyls_classpath::CompilerConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Where a source's text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum SourceOrigin {
    /// Read from the file on disk at compile time.
    Disk,
    /// An editor buffer's in-memory text.
    Open { contents: String },
}

/// One Groovy source in a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceUnit {
    pub path: PathBuf,
    #[serde(flatten)]
    pub origin: SourceOrigin,
}

impl SourceUnit {
    pub fn disk(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            origin: SourceOrigin::Disk,
        }
    }

    pub fn open(path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            origin: SourceOrigin::Open {
                contents: contents.into(),
            },
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.origin, SourceOrigin::Open { .. })
    }
}

/// A compiler configuration and the sources compiled with it, keyed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit {
    config: CompilerConfig,
    sources: BTreeMap<PathBuf, SourceUnit>,
}

impl CompilationUnit {
    pub fn new(config: CompilerConfig) -> Self {
        Self {
            config,
            sources: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &CompilerConfig {
        &self.config
    }

    /// Add a source, replacing any source with the same path.
    pub fn add_source(&mut self, source: SourceUnit) {
        self.sources.insert(source.path.clone(), source);
    }

    /// Remove the sources at `paths`. Returns how many were present.
    pub fn remove_sources<'a>(&mut self, paths: impl IntoIterator<Item = &'a PathBuf>) -> usize {
        paths
            .into_iter()
            .filter(|path| self.sources.remove(*path).is_some())
            .count()
    }

    pub fn source(&self, path: &Path) -> Option<&SourceUnit> {
        self.sources.get(path)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.sources.contains_key(path)
    }

    /// Sources in path order.
    pub fn sources(&self) -> impl Iterator<Item = &SourceUnit> {
        self.sources.values()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}
