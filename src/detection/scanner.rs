//! Tree scanner: scores the root, then every nested project below it

use crate::detection::evidence::Evidence;
use crate::detection::scoring::score;
use crate::detection::types::DetectionResult;
use crate::frameworks::{FrameworkId, FrameworkRegistry};
use crate::fs::{FileSystem, RealFileSystem};
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Deepest directory level (root children are level 1) the deep pass visits
pub const MAX_SCAN_DEPTH: usize = 10;

/// Directory names never descended into
pub const EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", ".vscode", ".next", "dist", "build"];

/// Files whose presence makes a directory a nested project
pub const PROJECT_MARKERS: &[&str] = &[
    "package.json",
    "go.mod",
    "requirements.txt",
    "pyproject.toml",
    "pom.xml",
    "build.gradle",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub max_depth: usize,
    pub excluded_dirs: Vec<String>,
    pub project_markers: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SCAN_DEPTH,
            excluded_dirs: EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            project_markers: PROJECT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl ScanConfig {
    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
    }

    /// Adds names to the deny-list, skipping ones already present
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.is_excluded(&name) {
                self.excluded_dirs.push(name);
            }
        }
        self
    }
}

/// Nested project found by the deep pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subproject {
    pub path: PathBuf,
    /// Path relative to the scan root, `/`-separated
    pub relative: String,
    pub depth: usize,
}

pub struct FrameworkScanner {
    registry: Arc<FrameworkRegistry>,
    fs: Arc<dyn FileSystem>,
    config: ScanConfig,
}

impl FrameworkScanner {
    pub fn new(registry: Arc<FrameworkRegistry>) -> Self {
        Self::with_fs(registry, Arc::new(RealFileSystem))
    }

    pub fn with_fs(registry: Arc<FrameworkRegistry>, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            registry,
            fs,
            config: ScanConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    pub fn registry(&self) -> &FrameworkRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Ranked detections for the root and every nested project under it.
    ///
    /// Results from nested projects carry their relative path in
    /// `subproject` and as a prefix on every evidence string. A root that
    /// is not a listable directory yields an empty list.
    pub fn scan_directory(&self, root: &Path) -> Vec<DetectionResult> {
        if !self.fs.is_dir(root) {
            warn!(root = %root.display(), "Scan root is not an accessible directory");
            return Vec::new();
        }

        let mut results = self.detect_in(root);

        let subprojects = self.subproject_dirs(root);
        for subproject in &subprojects {
            results.extend(
                self.detect_in(&subproject.path)
                    .into_iter()
                    .map(|r| r.in_subproject(&subproject.relative)),
            );
        }

        sort_results(&mut results);

        info!(
            root = %root.display(),
            subprojects = subprojects.len(),
            detections = results.len(),
            "Scan complete"
        );

        results
    }

    /// Scores every registered framework against one directory, keeping
    /// only those with nonzero certainty, in registry order
    pub fn detect_in(&self, dir: &Path) -> Vec<DetectionResult> {
        let evidence = Evidence::new(self.fs.as_ref(), dir);
        self.registry
            .frameworks()
            .iter()
            .map(|definition| score(&evidence, definition))
            .filter(|result| result.certainty > 0.0)
            .collect()
    }

    /// Directories below `root` that contain a project marker, in
    /// lexical pre-order, bounded by the configured depth
    pub fn subproject_dirs(&self, root: &Path) -> Vec<Subproject> {
        let mut found = Vec::new();
        let mut worklist: Vec<(PathBuf, usize)> = Vec::new();
        self.push_children(root, 1, &mut worklist);

        while let Some((dir, depth)) = worklist.pop() {
            if self.has_project_marker(&dir) {
                debug!(dir = %dir.display(), depth, "Found nested project");
                found.push(Subproject {
                    relative: relative_path(root, &dir),
                    path: dir.clone(),
                    depth,
                });
            }
            self.push_children(&dir, depth + 1, &mut worklist);
        }

        found
    }

    /// Template for a framework, with variants chosen from `dir`
    pub fn resolve_template(&self, id: &FrameworkId, dir: &Path) -> Cow<'static, str> {
        self.registry
            .resolve_template(id, &Evidence::new(self.fs.as_ref(), dir))
    }

    fn has_project_marker(&self, dir: &Path) -> bool {
        self.config
            .project_markers
            .iter()
            .any(|marker| self.fs.is_file(&dir.join(marker)))
    }

    fn push_children(&self, dir: &Path, depth: usize, worklist: &mut Vec<(PathBuf, usize)>) {
        if depth > self.config.max_depth {
            return;
        }

        let entries = match self.fs.read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "Skipping unreadable directory");
                return;
            }
        };

        // Reversed so the stack pops children in name order
        for entry in entries.into_iter().rev() {
            if entry.is_dir() && !self.config.is_excluded(entry.file_name()) {
                worklist.push((entry.path, depth));
            }
        }
    }
}

/// Stable sort by descending certainty; ties keep discovery order
pub fn sort_results(results: &mut [DetectionResult]) {
    results.sort_by(|a, b| b.certainty.total_cmp(&a.certainty));
}

fn relative_path(root: &Path, dir: &Path) -> String {
    let relative = dir.strip_prefix(root).unwrap_or(dir);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Scans `root` on the real filesystem with the built-in frameworks
pub fn scan_directory(root: impl AsRef<Path>) -> Vec<DetectionResult> {
    FrameworkScanner::new(Arc::new(FrameworkRegistry::new())).scan_directory(root.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MockFileSystem;

    fn scanner(fs: &Arc<MockFileSystem>) -> FrameworkScanner {
        FrameworkScanner::with_fs(Arc::new(FrameworkRegistry::new()), fs.clone())
    }

    #[test]
    fn test_depth_bound() {
        let fs = Arc::new(MockFileSystem::new());
        let mut path = PathBuf::new();
        for level in 1..=15 {
            path.push(format!("level{}", level));
            fs.add_file(path.join("package.json"), "{}");
        }

        let subprojects = scanner(&fs).subproject_dirs(fs.root());
        assert_eq!(subprojects.len(), MAX_SCAN_DEPTH);
        assert_eq!(subprojects.last().map(|s| s.depth), Some(MAX_SCAN_DEPTH));
        assert!(subprojects.last().unwrap().relative.ends_with("level10"));
    }

    #[test]
    fn test_custom_depth() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("a/package.json", "{}");
        fs.add_file("a/b/go.mod", "module x");

        let config = ScanConfig {
            max_depth: 1,
            ..ScanConfig::default()
        };
        let subprojects = scanner(&fs).with_config(config).subproject_dirs(fs.root());
        assert_eq!(subprojects.len(), 1);
        assert_eq!(subprojects[0].relative, "a");
    }

    #[test]
    fn test_excluded_dirs_are_never_entered() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("node_modules/left-pad/package.json", "{}");
        fs.add_file(".git/hooks/package.json", "{}");
        fs.add_file("dist/package.json", "{}");
        fs.add_file("vendor/lib/package.json", "{}");

        let relatives: Vec<_> = scanner(&fs)
            .subproject_dirs(fs.root())
            .into_iter()
            .map(|s| s.relative)
            .collect();
        assert_eq!(relatives, vec!["vendor/lib"]);

        let config = ScanConfig::default().exclude(["vendor"]);
        assert!(scanner(&fs)
            .with_config(config)
            .subproject_dirs(fs.root())
            .is_empty());
    }

    #[test]
    fn test_lexical_order_and_recursion_past_plain_dirs() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("services/zeta/go.mod", "module zeta");
        fs.add_file("services/alpha/requirements.txt", "");
        fs.add_file("apps/web/package.json", "{}");
        fs.add_file("apps/web/packages/ui/package.json", "{}");

        let relatives: Vec<_> = scanner(&fs)
            .subproject_dirs(fs.root())
            .into_iter()
            .map(|s| s.relative)
            .collect();
        assert_eq!(
            relatives,
            vec![
                "apps/web",
                "apps/web/packages/ui",
                "services/alpha",
                "services/zeta"
            ]
        );
    }

    #[test]
    fn test_unreadable_branch_is_skipped() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_unreadable_dir("locked");
        fs.add_file("open/package.json", "{}");

        let relatives: Vec<_> = scanner(&fs)
            .subproject_dirs(fs.root())
            .into_iter()
            .map(|s| s.relative)
            .collect();
        assert_eq!(relatives, vec!["open"]);
    }

    #[test]
    fn test_missing_root_yields_empty() {
        let fs = Arc::new(MockFileSystem::new());
        assert!(scanner(&fs)
            .scan_directory(Path::new("/does/not/exist"))
            .is_empty());

        fs.add_file("plain-file", "");
        assert!(scanner(&fs)
            .scan_directory(&fs.root().join("plain-file"))
            .is_empty());

        fs.add_unreadable_dir("locked");
        assert!(scanner(&fs)
            .scan_directory(&fs.root().join("locked"))
            .is_empty());
    }

    #[test]
    fn test_empty_tree() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("notes.txt", "nothing to see");
        assert!(scanner(&fs).scan_directory(fs.root()).is_empty());
    }

    #[test]
    fn test_nested_results_are_tagged_and_sorted() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("Dockerfile", "FROM scratch");
        fs.add_file(
            "api/go.mod",
            "module api\n\nrequire github.com/gin-gonic/gin v1.9.1\n",
        );

        let results = scanner(&fs).scan_directory(fs.root());
        let ids: Vec<_> = results.iter().map(|r| r.framework.as_str()).collect();
        // Equal scores keep discovery order, so the root's docker result precedes go
        assert_eq!(ids, vec!["gin", "docker", "go"]);

        assert_eq!(results[0].certainty, 65.0);
        assert_eq!(results[0].subproject.as_deref(), Some("api"));
        assert!(results[0]
            .detected_items
            .iter()
            .all(|item| item.starts_with("api: ")));
        assert_eq!(results[1].subproject, None);
        assert_eq!(results[1].detected_items, vec!["Dockerfile"]);
        assert_eq!(results[2].detected_items, vec!["api: go.mod"]);
    }

    #[test]
    fn test_scan_is_idempotent() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("package.json", r#"{"dependencies": {"express": "4.18.0"}}"#);
        fs.add_file("worker/requirements.txt", "celery\n");

        let scanner = scanner(&fs);
        let first = scanner.scan_directory(fs.root());
        let second = scanner.scan_directory(fs.root());
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn test_certainties_stay_in_range() {
        let fs = Arc::new(MockFileSystem::new());
        fs.add_file("wp-config.php", "<?php");
        fs.add_file("wp-login.php", "<?php");
        fs.add_dir("wp-content");
        fs.add_dir("wp-includes");
        fs.add_file("index.php", "<?php");
        fs.add_file("composer.json", "{}");

        let results = scanner(&fs).scan_directory(fs.root());
        assert_eq!(results[0].framework, FrameworkId::WordPress);
        assert!(results
            .iter()
            .all(|r| r.certainty > 0.0 && r.certainty <= 100.0));
        assert!(results
            .windows(2)
            .all(|w| w[0].certainty >= w[1].certainty));
    }
}
