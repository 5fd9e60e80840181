//! Plain HTML site without a build step

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: static-site
runtime: static
build:
  command: \"\"
  output: .
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::StaticSite,
        Metadata::new("Static HTML", Category::Static, "Plain HTML, CSS and JavaScript"),
        Pattern::new().files(&["index.html"]),
        Template::fixed(TEMPLATE),
    )
}
