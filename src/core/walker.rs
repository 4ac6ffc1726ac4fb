//! Directory walking functionality
//!
//! Traversal is top-down and deterministic: at every level files are listed
//! before subdirectories and each group is sorted by name, so a directory's
//! files are always grouped together before any of its children are visited.
//! Subdirectories whose name is in the ignored set are pruned at any depth.

use crate::core::observer::ScanObserver;
use crate::error::{ReadmeGenError, Result};
use crate::models::ScanRules;
use crate::utils::paths::file_name_of;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A file found during traversal
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    /// Size in bytes, `None` if metadata could not be read
    pub size: Option<u64>,
}

/// One directory and the files directly inside it
#[derive(Debug, Clone)]
pub struct DirectoryGroup {
    pub path: PathBuf,
    /// Path relative to the scan root; empty for the root itself
    pub relative: PathBuf,
    pub files: Vec<FileEntry>,
}

/// Filtered, ordered directory traversal
pub struct Walker<'a> {
    root: PathBuf,
    rules: &'a ScanRules,
    follow_links: bool,
}

impl<'a> Walker<'a> {
    /// Create a walker rooted at `root`
    pub fn new(root: impl Into<PathBuf>, rules: &'a ScanRules) -> Self {
        Self {
            root: root.into(),
            rules,
            follow_links: false,
        }
    }

    /// Follow symbolic links during traversal
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Walk the tree and return its directories in traversal order.
    ///
    /// Fails only if the root does not exist. Unreadable entries are
    /// reported to `observer` and skipped.
    pub fn walk(&self, observer: &dyn ScanObserver) -> Result<Vec<DirectoryGroup>> {
        if !self.root.exists() {
            return Err(ReadmeGenError::NotFound {
                path: self.root.clone(),
            });
        }

        let mut groups: Vec<DirectoryGroup> = Vec::new();
        if !self.root.is_dir() {
            return Ok(groups);
        }

        let rules = self.rules;
        let entries = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .sort_by(files_first_by_name)
            .into_iter()
            .filter_entry(|entry| !is_pruned(entry, rules));

        for result in entries {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err.path().map(Path::to_path_buf).unwrap_or_else(|| self.root.clone());
                    observer.on_warning(&path, &ReadmeGenError::from(err));
                    continue;
                }
            };

            let file_type = entry.file_type();
            if file_type.is_dir() {
                let relative = entry
                    .path()
                    .strip_prefix(&self.root)
                    .map(Path::to_path_buf)
                    .unwrap_or_default();
                observer.on_directory(&relative.to_string_lossy());
                groups.push(DirectoryGroup {
                    path: entry.path().to_path_buf(),
                    relative,
                    files: Vec::new(),
                });
                continue;
            }

            // unfollowed links to directories are neither files nor descended
            if file_type.is_symlink() && entry.path().is_dir() {
                continue;
            }

            let file = FileEntry {
                path: entry.path().to_path_buf(),
                name: file_name_of(entry.path()),
                size: fs::metadata(entry.path()).map(|meta| meta.len()).ok(),
            };

            let parent = entry.path().parent();
            match groups.iter_mut().rev().find(|group| Some(group.path.as_path()) == parent) {
                Some(group) => group.files.push(file),
                None => observer.on_warning(
                    entry.path(),
                    &ReadmeGenError::directory_traversal_error(entry.path(), "file outside any visited directory"),
                ),
            }
        }

        Ok(groups)
    }
}

/// Ignored directory names are pruned everywhere except at the root
fn is_pruned(entry: &DirEntry, rules: &ScanRules) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && rules.is_ignored_dir(&entry.file_name().to_string_lossy())
}

fn files_first_by_name(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}
