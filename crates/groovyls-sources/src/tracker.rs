//! Editor buffers and the set of paths changed since the last build

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Tracks open editor buffers and which paths changed.
///
/// Opening, editing and closing a buffer all mark its path changed. The
/// caller clears the changed set with [`FileContentsTracker::reset_changed`]
/// once a compilation unit has been rebuilt.
#[derive(Debug, Clone, Default)]
pub struct FileContentsTracker {
    open: HashMap<PathBuf, String>,
    changed: HashSet<PathBuf>,
}

impl FileContentsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn did_open(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        let path = path.into();
        self.open.insert(path.clone(), text.into());
        self.changed.insert(path);
    }

    /// Replace the full text of a buffer. Opens it if it was not open.
    pub fn did_change(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.did_open(path, text);
    }

    pub fn did_close(&mut self, path: &Path) {
        self.open.remove(path);
        self.changed.insert(path.to_path_buf());
    }

    /// Mark a path changed without touching buffers, e.g. after the file
    /// was modified or deleted on disk.
    pub fn mark_changed(&mut self, path: impl Into<PathBuf>) {
        self.changed.insert(path.into());
    }

    pub fn is_open(&self, path: &Path) -> bool {
        self.open.contains_key(path)
    }

    pub fn contents(&self, path: &Path) -> Option<&str> {
        self.open.get(path).map(String::as_str)
    }

    /// Open buffer paths, sorted.
    pub fn open_paths(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.open.keys().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }

    pub fn changed_paths(&self) -> &HashSet<PathBuf> {
        &self.changed
    }

    pub fn is_changed(&self, path: &Path) -> bool {
        self.changed.contains(path)
    }

    pub fn reset_changed(&mut self) {
        self.changed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_change_close_mark_paths_changed() {
        let mut tracker = FileContentsTracker::new();
        let a = Path::new("/ws/a.groovy");
        let b = Path::new("/ws/b.groovy");

        tracker.did_open(a, "println 'a'");
        assert!(tracker.is_open(a));
        assert!(tracker.is_changed(a));

        tracker.reset_changed();
        assert!(!tracker.is_changed(a));

        tracker.did_change(a, "println 'a2'");
        assert_eq!(tracker.contents(a), Some("println 'a2'"));
        assert!(tracker.is_changed(a));

        tracker.did_close(a);
        assert!(!tracker.is_open(a));
        assert!(tracker.contents(a).is_none());
        assert!(tracker.is_changed(a));

        tracker.mark_changed(b);
        assert!(!tracker.is_open(b));
        assert_eq!(tracker.changed_paths().len(), 2);
    }

    #[test]
    fn open_paths_are_sorted() {
        let mut tracker = FileContentsTracker::new();
        tracker.did_open("/ws/z.groovy", "");
        tracker.did_open("/ws/a.groovy", "");
        tracker.did_open("/ws/m/b.groovy", "");

        assert_eq!(
            tracker.open_paths(),
            vec![
                Path::new("/ws/a.groovy"),
                Path::new("/ws/m/b.groovy"),
                Path::new("/ws/z.groovy")
            ]
        );
    }
}
