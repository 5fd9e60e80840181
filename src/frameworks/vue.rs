//! Vue.js single-page applications

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: vue-app
runtime: static
build:
  command: npm ci && npm run build
  output: dist
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Vue,
        Metadata::new("Vue.js", Category::Static, "Vue.js single-page application"),
        Pattern::new()
            .content("package.json", &["\"vue\""])
            .requires("vue"),
        Template::fixed(TEMPLATE),
    )
}
