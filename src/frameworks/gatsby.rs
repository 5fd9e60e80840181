//! Gatsby static site generator

use super::common::detect_any_file;
use super::*;
use crate::detection::types::Category;

const CONFIG_FILES: &[&str] = &["gatsby-config.js", "gatsby-config.ts", "gatsby-config.mjs"];

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: gatsby-site
runtime: static
build:
  command: npm ci && npx gatsby build
  output: public
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    detect_any_file(evidence, CONFIG_FILES, 90.0)
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Gatsby,
        Metadata::new("Gatsby", Category::Static, "Gatsby React-based site generator"),
        Pattern::new().requires("gatsby"),
        Template::fixed(TEMPLATE),
    )
    .with_detector(detect)
}
