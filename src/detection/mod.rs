//! Framework detection engine
//!
//! [`evidence`] exposes read-only lookups for one directory, [`scoring`]
//! turns a framework's pattern and detector into a certainty, and
//! [`scanner`] applies every registered framework to a tree.

pub mod evidence;
pub mod manifest;
pub mod scanner;
pub mod scoring;
pub mod types;

pub use evidence::Evidence;
pub use manifest::{Dependencies, ManifestKind};
pub use scanner::{scan_directory, FrameworkScanner, ScanConfig, Subproject};
pub use scoring::score;
pub use types::{Category, ContentPattern, CustomDetection, DetectionResult, Metadata, Pattern};
