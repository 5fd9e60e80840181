//! Generic Go modules

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: go-app
runtime: golang
build:
  command: CGO_ENABLED=0 go build -o app .
start:
  command: ./app
port: 8080
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Go,
        Metadata::new("Go", Category::Golang, "Go module"),
        Pattern::new().files(&["go.mod"]),
        Template::fixed(TEMPLATE),
    )
}
