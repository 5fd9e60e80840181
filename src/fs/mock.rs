use super::{DirEntry, EntryKind, FileSystem};
use anyhow::{anyhow, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone)]
enum MockEntry {
    File(String),
    Directory,
    /// Present in listings but fails to read or list
    Unreadable(EntryKind),
}

impl MockEntry {
    fn kind(&self) -> EntryKind {
        match self {
            MockEntry::File(_) => EntryKind::File,
            MockEntry::Directory => EntryKind::Directory,
            MockEntry::Unreadable(kind) => *kind,
        }
    }
}

/// In-memory [`FileSystem`] for tests.
///
/// Relative paths are resolved against the mock root (`/mock` by default).
/// Adding a file creates all of its parent directories.
pub struct MockFileSystem {
    entries: RwLock<BTreeMap<PathBuf, MockEntry>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            entries: RwLock::new(BTreeMap::new()),
            root,
        };
        fs.insert(fs.root.clone(), MockEntry::Directory);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = self.normalize_path(path.as_ref());
        self.insert(path, MockEntry::File(content.to_string()));
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.insert(path, MockEntry::Directory);
    }

    /// Adds a directory that shows up in its parent's listing but cannot be listed itself
    pub fn add_unreadable_dir(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.insert(path, MockEntry::Unreadable(EntryKind::Directory));
    }

    /// Adds a file that exists but cannot be read
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        let path = self.normalize_path(path.as_ref());
        self.insert(path, MockEntry::Unreadable(EntryKind::File));
    }

    fn insert(&self, path: PathBuf, entry: MockEntry) {
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());

        let mut current = PathBuf::new();
        if let Some(parent) = path.parent() {
            for component in parent.components() {
                current.push(component);
                entries
                    .entry(current.clone())
                    .or_insert(MockEntry::Directory);
            }
        }

        entries.insert(path, entry);
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    fn kind_of(&self, path: &Path) -> Option<EntryKind> {
        let path = self.normalize_path(path);
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries.get(&path).map(MockEntry::kind)
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.kind_of(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.kind_of(path) == Some(EntryKind::Directory)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.kind_of(path) == Some(EntryKind::File)
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let path = self.normalize_path(path);
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());

        match entries.get(&path) {
            Some(MockEntry::File(content)) => Ok(content.clone()),
            Some(MockEntry::Directory) => Err(anyhow!("Not a file: {:?}", path)),
            Some(MockEntry::Unreadable(_)) => Err(anyhow!("Permission denied: {:?}", path)),
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>> {
        let path = self.normalize_path(path);
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());

        match entries.get(&path) {
            Some(MockEntry::Directory) => {}
            Some(MockEntry::Unreadable(_)) => {
                return Err(anyhow!("Permission denied: {:?}", path))
            }
            Some(MockEntry::File(_)) => return Err(anyhow!("Not a directory: {:?}", path)),
            None => return Err(anyhow!("Directory not found: {:?}", path)),
        }

        // BTreeMap iteration keeps children in name order
        let children = entries
            .iter()
            .filter(|(p, _)| p.parent() == Some(path.as_path()))
            .map(|(p, entry)| DirEntry {
                path: p.clone(),
                name: p
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default(),
                kind: entry.kind(),
            })
            .collect();

        Ok(children)
    }
}
