//! Flask microframework

use super::*;
use crate::detection::manifest::ManifestKind;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: flask-app
runtime: python
build:
  command: pip install -r requirements.txt
start:
  command: gunicorn app:app --bind 0.0.0.0:8000
port: 8000
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Flask,
        Metadata::new("Flask", Category::Python, "Flask lightweight WSGI framework"),
        Pattern::new()
            .content("app.py", &["from flask", "Flask("])
            .requires("flask")
            .manifest(ManifestKind::Python)
            .priority(5),
        Template::fixed(TEMPLATE),
    )
}
