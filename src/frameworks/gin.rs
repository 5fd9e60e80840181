//! Gin web framework for Go

use super::*;
use crate::detection::manifest::ManifestKind;
use crate::detection::types::Category;

const MODULE: &str = "github.com/gin-gonic/gin";

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: gin-app
runtime: golang
build:
  command: CGO_ENABLED=0 go build -o app .
start:
  command: ./app
port: 8080
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Gin,
        Metadata::new("Gin", Category::Golang, "Gin HTTP web framework"),
        Pattern::new()
            .content("go.mod", &[MODULE])
            .requires(MODULE)
            .manifest(ManifestKind::GoMod)
            .priority(5),
        Template::fixed(TEMPLATE),
    )
}
