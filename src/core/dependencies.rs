//! Dependency extraction from manifests found during a scan
//!
//! Manifests are queued while walking and parsed once traversal is done, so
//! the merge order depends only on manifest kind: package.json first, then
//! requirements.txt, then pyproject.toml. Within one kind, files merge in the
//! order they were visited. Later entries overwrite earlier ones.

use crate::core::observer::ScanObserver;
use crate::error::{ReadmeGenError, Result};
use crate::models::{Dependencies, RecordBuilder};
use crate::parsers::ManifestKind;
use std::fs;
use std::path::{Path, PathBuf};

/// Queue of manifests awaiting extraction
#[derive(Debug, Default)]
pub struct DependencyExtractor {
    pending: Vec<(ManifestKind, PathBuf)>,
}

impl DependencyExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ManifestKind, path: impl Into<PathBuf>) {
        self.pending.push((kind, path.into()));
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Parse every queued manifest and merge the results into `builder`.
    ///
    /// A manifest that cannot be read or parsed contributes nothing and is
    /// reported to `observer`.
    pub fn merge_into(mut self, builder: &mut RecordBuilder, observer: &dyn ScanObserver) {
        // stable: visit order survives within a kind
        self.pending.sort_by_key(|(kind, _)| *kind);

        for (kind, path) in &self.pending {
            match extract(*kind, path) {
                Ok(dependencies) => {
                    tracing::debug!(
                        manifest = %path.display(),
                        count = dependencies.len(),
                        "extracted dependencies"
                    );
                    builder.merge_dependencies(dependencies);
                }
                Err(err) => observer.on_warning(path, &err),
            }
        }
    }
}

/// Read and parse a single manifest
pub fn extract(kind: ManifestKind, path: &Path) -> Result<Dependencies> {
    let content =
        fs::read_to_string(path).map_err(|source| ReadmeGenError::file_read_error(path, source))?;
    kind.parse(&content, path)
}
