//! Hugo static site generator

use super::common::detect_any_file;
use super::*;
use crate::detection::types::Category;

const CONFIG_FILES: &[&str] = &["hugo.toml", "hugo.yaml", "hugo.json", "config.toml"];

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: hugo-site
runtime: static
build:
  command: hugo --minify
  output: public
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    if !evidence.directory_exists("content") {
        return CustomDetection::not_detected();
    }

    detect_any_file(evidence, CONFIG_FILES, 85.0)
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Hugo,
        Metadata::new("Hugo", Category::Static, "Hugo static site generator"),
        Pattern::new()
            .dirs(&["content", "layouts"])
            .content("config.toml", &["baseURL"]),
        Template::fixed(TEMPLATE),
    )
    .with_detector(detect)
}
