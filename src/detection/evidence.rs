//! Read-only evidence accessors bound to one directory
//!
//! Every accessor tolerates missing or unreadable paths by returning a
//! neutral value. Nothing here propagates an error to the scorer.

use crate::detection::manifest::{Dependencies, ManifestKind};
use crate::fs::FileSystem;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Evidence view of a single directory on a [`FileSystem`]
#[derive(Clone, Copy)]
pub struct Evidence<'a> {
    fs: &'a dyn FileSystem,
    dir: &'a Path,
}

impl<'a> Evidence<'a> {
    pub fn new(fs: &'a dyn FileSystem, dir: &'a Path) -> Self {
        Self { fs, dir }
    }

    pub fn dir(&self) -> &Path {
        self.dir
    }

    pub fn resolve(&self, rel_path: &str) -> PathBuf {
        self.dir.join(rel_path)
    }

    /// True if the path exists, whether file or directory
    pub fn file_exists(&self, rel_path: &str) -> bool {
        self.fs.exists(&self.resolve(rel_path))
    }

    /// True only if the path exists and is a directory
    pub fn directory_exists(&self, rel_path: &str) -> bool {
        self.fs.is_dir(&self.resolve(rel_path))
    }

    /// File contents, or an empty string if absent or unreadable
    pub fn read_file(&self, rel_path: &str) -> String {
        let path = self.resolve(rel_path);
        if !self.fs.is_file(&path) {
            return String::new();
        }

        match self.fs.read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                debug!(path = %path.display(), error = %err, "Unreadable evidence file");
                String::new()
            }
        }
    }

    /// First of the given paths that exists
    pub fn first_existing<'p>(&self, candidates: &[&'p str]) -> Option<&'p str> {
        candidates.iter().copied().find(|c| self.file_exists(c))
    }

    /// True if any file belonging to this manifest kind exists
    pub fn has_manifest(&self, kind: ManifestKind) -> bool {
        kind.files().iter().any(|f| self.fs.is_file(&self.resolve(f)))
    }

    /// Merged dependency mapping from every file of this manifest kind.
    ///
    /// Absent manifests yield an empty mapping. Malformed ones are logged and
    /// contribute nothing.
    pub fn read_dependency_manifest(&self, kind: ManifestKind) -> Dependencies {
        let mut deps = Dependencies::new();

        for file in kind.files() {
            let path = self.resolve(file);
            if !self.fs.is_file(&path) {
                continue;
            }

            let content = self.read_file(file);
            match kind.parse(file, &content) {
                Ok(parsed) => deps.extend(parsed),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Ignoring malformed dependency manifest");
                }
            }
        }

        deps
    }
}
