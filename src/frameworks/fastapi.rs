//! FastAPI ASGI framework

use super::*;
use crate::detection::manifest::ManifestKind;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: fastapi-app
runtime: python
build:
  command: pip install -r requirements.txt
start:
  command: uvicorn main:app --host 0.0.0.0 --port 8000
port: 8000
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::FastApi,
        Metadata::new("FastAPI", Category::Python, "FastAPI modern async web framework"),
        Pattern::new()
            .content("main.py", &["from fastapi", "FastAPI("])
            .requires("fastapi")
            .manifest(ManifestKind::Python)
            .priority(5),
        Template::fixed(TEMPLATE),
    )
}
