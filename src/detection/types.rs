//! Core data types for framework detection

use crate::detection::manifest::ManifestKind;
use crate::frameworks::FrameworkId;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Coarse runtime category of a framework
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Static,
    Nodejs,
    Golang,
    Python,
    Java,
    Unknown,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Static => "static",
            Category::Nodejs => "nodejs",
            Category::Golang => "golang",
            Category::Python => "python",
            Category::Java => "java",
            Category::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptive record for a registered framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub name: Cow<'static, str>,
    pub category: Category,
    pub description: Cow<'static, str>,
}

impl Metadata {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        category: Category,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
        }
    }
}

/// Substrings expected inside one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPattern {
    pub file: String,
    pub substrings: Vec<String>,
}

/// Declarative evidence specification for one framework.
///
/// Each non-empty category contributes to the score on its own; empty
/// categories contribute nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub required_files: Vec<String>,
    pub required_dirs: Vec<String>,
    pub content_patterns: Vec<ContentPattern>,
    /// `true` means the dependency must be present, `false` that it must be absent
    pub dependencies: Vec<(String, bool)>,
    /// Manifest the dependency checks are evaluated against
    pub manifest: ManifestKind,
    pub priority: i32,
}

impl Default for Pattern {
    fn default() -> Self {
        Self {
            required_files: Vec::new(),
            required_dirs: Vec::new(),
            content_patterns: Vec::new(),
            dependencies: Vec::new(),
            manifest: ManifestKind::PackageJson,
            priority: 0,
        }
    }
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(mut self, files: &[&str]) -> Self {
        self.required_files
            .extend(files.iter().map(|f| f.to_string()));
        self
    }

    pub fn dirs(mut self, dirs: &[&str]) -> Self {
        self.required_dirs.extend(dirs.iter().map(|d| d.to_string()));
        self
    }

    pub fn content(mut self, file: &str, substrings: &[&str]) -> Self {
        self.content_patterns.push(ContentPattern {
            file: file.to_string(),
            substrings: substrings.iter().map(|s| s.to_string()).collect(),
        });
        self
    }

    pub fn requires(mut self, dependency: &str) -> Self {
        self.dependencies.push((dependency.to_string(), true));
        self
    }

    pub fn excludes(mut self, dependency: &str) -> Self {
        self.dependencies.push((dependency.to_string(), false));
        self
    }

    pub fn manifest(mut self, manifest: ManifestKind) -> Self {
        self.manifest = manifest;
        self
    }

    /// Flat bonus added to the score, only when some evidence already matched
    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.required_files.is_empty()
            && self.required_dirs.is_empty()
            && self.content_patterns.is_empty()
            && self.dependencies.is_empty()
    }
}

/// Output of a framework's custom detector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomDetection {
    pub detected: bool,
    pub certainty: f64,
    pub detected_items: Vec<String>,
}

impl CustomDetection {
    pub fn detected(certainty: f64, items: Vec<String>) -> Self {
        Self {
            detected: true,
            certainty,
            detected_items: items,
        }
    }

    pub fn not_detected() -> Self {
        Self::default()
    }
}

/// Scoring outcome for one (directory, framework) pair
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionResult {
    pub framework: FrameworkId,
    pub certainty: f64,
    pub detected_items: Vec<String>,
    pub metadata: Arc<Metadata>,
    /// Relative path of the nested project this result belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subproject: Option<String>,
}

impl DetectionResult {
    pub fn category(&self) -> Category {
        self.metadata.category
    }

    pub fn is_high_confidence(&self) -> bool {
        self.certainty >= 80.0
    }

    pub fn confidence_level(&self) -> &'static str {
        if self.certainty >= 80.0 {
            "high"
        } else if self.certainty >= 50.0 {
            "medium"
        } else {
            "low"
        }
    }

    /// Marks the result as coming from a nested project and prefixes its evidence
    pub(crate) fn in_subproject(mut self, relative: &str) -> Self {
        self.detected_items = self
            .detected_items
            .into_iter()
            .map(|item| format!("{}: {}", relative, item))
            .collect();
        self.subproject = Some(relative.to_string());
        self
    }
}
