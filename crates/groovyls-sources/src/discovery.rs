//! Groovy source discovery under a workspace root

use crate::{Error, Result};
use std::io;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

pub const GROOVY_EXTENSION: &str = ".groovy";

/// Every regular file under `root` whose name ends in `.groovy`, sorted.
///
/// A `root` that is itself a `.groovy` file yields just that file. Symlinked
/// directories are not followed. Entries that cannot be read are skipped
/// with a warning; only an unreadable root is an error.
pub fn collect_groovy_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(walk_error(root, e)),
            Err(e) => {
                tracing::warn!(path = ?e.path(), error = %e, "Skipping unreadable entry");
                continue;
            }
        };

        if is_groovy_file(&entry) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_groovy_file(entry: &DirEntry) -> bool {
    if !entry.path().to_string_lossy().ends_with(GROOVY_EXTENSION) {
        return false;
    }

    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

fn walk_error(root: &Path, e: walkdir::Error) -> Error {
    let path = e.path().unwrap_or(root).to_path_buf();
    let source = e
        .into_io_error()
        .unwrap_or_else(|| io::Error::other("filesystem loop"));
    Error::io(path, source)
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }

    out
}
