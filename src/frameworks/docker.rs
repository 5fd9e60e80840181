//! Projects that ship their own Dockerfile

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: container-app
runtime: docker
build:
  command: docker build -t app .
start:
  command: docker run -p 8080:8080 app
port: 8080
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Docker,
        Metadata::new("Docker", Category::Unknown, "Container image built from a Dockerfile"),
        Pattern::new().files(&["Dockerfile"]),
        Template::fixed(TEMPLATE),
    )
}
