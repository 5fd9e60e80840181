//! Vite-built frontends

use super::common::detect_any_file;
use super::*;
use crate::detection::types::Category;

const CONFIG_FILES: &[&str] = &[
    "vite.config.js",
    "vite.config.ts",
    "vite.config.mjs",
    "vite.config.mts",
];

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: vite-app
runtime: static
build:
  command: npm ci && npm run build
  output: dist
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    detect_any_file(evidence, CONFIG_FILES, 70.0)
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Vite,
        Metadata::new("Vite", Category::Static, "Frontend built with Vite"),
        Pattern::new().requires("vite"),
        Template::fixed(TEMPLATE),
    )
    .with_detector(detect)
}
