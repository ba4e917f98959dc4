//! Incremental compilation unit factory

use crate::{
    CompilationUnit, FileContentsTracker, Result, SourceUnit, collect_groovy_files,
    normalize_lexically,
};
use groovyls_classpath::{CompilerConfig, LibraryFolder};
use groovyls_settings::ConfigurationStore;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Builds and caches the workspace compilation unit.
///
/// The first [`create`](Self::create) builds a unit from scratch. Later calls
/// reuse it and only replace the sources whose paths the tracker reports as
/// changed. Changing the library folder drops the cached unit, since its
/// classpath is fixed at construction.
#[derive(Debug, Default)]
pub struct CompilationUnitFactory {
    compilation_unit: Option<CompilationUnit>,
    library_folder: Option<LibraryFolder>,
}

impl CompilationUnitFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library_folder(folder: LibraryFolder) -> Self {
        Self {
            compilation_unit: None,
            library_folder: Some(folder),
        }
    }

    pub fn library_folder(&self) -> Option<&LibraryFolder> {
        self.library_folder.as_ref()
    }

    /// Use `path` as the additional libraries folder if it is a readable
    /// directory. Returns whether it was accepted; a rejected path keeps the
    /// previous folder and cached unit.
    pub fn set_additional_libs_folder(&mut self, path: Option<&str>) -> bool {
        match path.and_then(LibraryFolder::open) {
            Some(folder) => {
                tracing::debug!(folder = ?folder.path(), "Additional libraries folder set");
                self.library_folder = Some(folder);
                self.invalidate_compilation_unit();
                true
            }
            None => false,
        }
    }

    /// Apply `groovy.additional.libraries` from `store`.
    pub fn apply_settings(&mut self, store: &impl ConfigurationStore) -> bool {
        match LibraryFolder::from_settings(store) {
            Some(folder) => {
                self.library_folder = Some(folder);
                self.invalidate_compilation_unit();
                true
            }
            None => false,
        }
    }

    pub fn invalidate_compilation_unit(&mut self) {
        self.compilation_unit = None;
    }

    /// Whether a unit is cached for the next [`create`](Self::create).
    pub fn is_cached(&self) -> bool {
        self.compilation_unit.is_some()
    }

    /// Build or update the compilation unit.
    ///
    /// With a workspace root, every `.groovy` file under it is a source, and
    /// open buffers under the root replace their files' disk contents.
    /// Without one, only open buffers are sources.
    pub fn create(
        &mut self,
        workspace_root: Option<&Path>,
        tracker: &FileContentsTracker,
    ) -> Result<&CompilationUnit> {
        let (mut unit, changed) = match self.compilation_unit.take() {
            Some(mut unit) => {
                let changed = tracker.changed_paths();
                let removed = unit.remove_sources(changed);
                tracing::debug!(changed = changed.len(), removed, "Updating compilation unit");
                (unit, Some(changed))
            }
            None => {
                let config = CompilerConfig::customizable(self.library_folder.as_ref())?;
                tracing::debug!(
                    classpath = config.classpath.len(),
                    "Building new compilation unit"
                );
                // Everything is new, so changed paths do not matter.
                (CompilationUnit::new(config), None)
            }
        };

        match workspace_root {
            Some(root) => add_directory(&mut unit, root, tracker, changed),
            None => {
                for path in tracker.open_paths() {
                    if is_wanted(changed, path) {
                        add_open_file(&mut unit, path, tracker);
                    }
                }
            }
        }

        Ok(&*self.compilation_unit.insert(unit))
    }
}

fn is_wanted(changed: Option<&HashSet<PathBuf>>, path: &Path) -> bool {
    changed.is_none_or(|changed| changed.contains(path))
}

fn add_directory(
    unit: &mut CompilationUnit,
    root: &Path,
    tracker: &FileContentsTracker,
    changed: Option<&HashSet<PathBuf>>,
) {
    if root.exists() {
        match collect_groovy_files(root) {
            Ok(files) => {
                for file in files {
                    if !tracker.is_open(&file) && is_wanted(changed, &file) {
                        unit.add_source(SourceUnit::disk(file));
                    }
                }
            }
            Err(e) => {
                tracing::warn!(?root, error = %e, "Failed to walk directory for source files");
            }
        }
    }

    let root = normalize_lexically(root);
    for path in tracker.open_paths() {
        if normalize_lexically(path).starts_with(&root) && is_wanted(changed, path) {
            add_open_file(unit, path, tracker);
        }
    }
}

fn add_open_file(unit: &mut CompilationUnit, path: &Path, tracker: &FileContentsTracker) {
    if let Some(contents) = tracker.contents(path) {
        unit.add_source(SourceUnit::open(path, contents));
    }
}
