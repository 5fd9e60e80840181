//! FileSystem trait definition

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Kind of a directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

/// A directory entry returned by read_dir
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_name(&self) -> &str {
        &self.name
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }
}

/// Read-only view of a file tree.
///
/// Detection never writes, so the trait only exposes the lookups the
/// evidence accessors and the scanner need. Implementations must return
/// `read_dir` entries sorted by name; the scanner relies on that for
/// deterministic result ordering.
pub trait FileSystem: Send + Sync {
    /// Check if a path exists (file or directory)
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path is a regular file
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as string
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// List directory contents, sorted by name
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_entry_accessors() {
        let entry = DirEntry {
            path: PathBuf::from("/repo/package.json"),
            name: "package.json".to_string(),
            kind: EntryKind::File,
        };
        assert_eq!(entry.path(), Path::new("/repo/package.json"));
        assert_eq!(entry.file_name(), "package.json");
        assert!(entry.is_file());
        assert!(!entry.is_dir());
    }

    #[test]
    fn test_dir_entry_other_kind() {
        let entry = DirEntry {
            path: PathBuf::from("/repo/socket"),
            name: "socket".to_string(),
            kind: EntryKind::Other,
        };
        assert!(!entry.is_file());
        assert!(!entry.is_dir());
    }
}
