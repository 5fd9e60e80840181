//! Create React App single-page applications

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: react-app
runtime: static
build:
  command: npm ci && npm run build
  output: build
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::React,
        Metadata::new("React", Category::Static, "React single-page application"),
        Pattern::new()
            .files(&["public/index.html"])
            .content("package.json", &["react-scripts"])
            .requires("react-scripts"),
        Template::fixed(TEMPLATE),
    )
}
