//! framescout - framework detection for deployment scaffolding
//!
//! Inspects a directory tree, scores every registered framework against
//! the evidence it finds (files, directories, file contents and manifest
//! dependencies) and ranks the candidates, including those found in nested
//! sub-projects. Each framework carries a deployment-manifest template that
//! can be rendered for the detected project.
//!
//! # Core Concepts
//!
//! - **Registry**: ordered catalogue of [`FrameworkDefinition`]s, each a
//!   declarative pattern plus an optional custom detector and a template
//! - **Scoring**: turns one directory and one definition into a
//!   [`DetectionResult`] with a certainty in `[0, 100]`
//! - **Scanner**: walks the tree, finds nested projects and merges their
//!   results into one ranked list
//!
//! # Example Usage
//!
//! ```no_run
//! use framescout::{FrameworkRegistry, FrameworkScanner};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! let scanner = FrameworkScanner::new(Arc::new(FrameworkRegistry::new()));
//! let results = scanner.scan_directory(Path::new("."));
//!
//! if let Some(best) = results.first() {
//!     println!("{} ({:.0}%)", best.framework, best.certainty);
//!     println!("{}", scanner.resolve_template(&best.framework, Path::new(".")));
//! }
//! ```
//!
//! # Project Structure
//!
//! - [`frameworks`]: framework ids, definitions and the registry
//! - [`detection`]: evidence gathering, scoring and tree scanning
//! - [`fs`]: filesystem abstraction with a real and an in-memory backend

pub mod cli;
pub mod config;
pub mod detection;
pub mod frameworks;
pub mod fs;
pub mod util;

pub use config::{ConfigError, ScoutConfig};
pub use detection::scanner::{scan_directory, FrameworkScanner, ScanConfig, Subproject};
pub use detection::types::{Category, DetectionResult, Metadata, Pattern};
pub use frameworks::{
    CustomDetector, FrameworkDefinition, FrameworkId, FrameworkRegistry, Template,
};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
