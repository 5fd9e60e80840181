//! Angular applications

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: angular-app
runtime: static
build:
  command: npm ci && npx ng build --configuration production
  output: dist
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Angular,
        Metadata::new("Angular", Category::Static, "Angular application"),
        Pattern::new()
            .files(&["angular.json"])
            .requires("@angular/core"),
        Template::fixed(TEMPLATE),
    )
}
