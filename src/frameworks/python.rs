//! Generic Python applications

use super::*;
use crate::detection::types::Category;

const ALTERNATE_MANIFESTS: &[&str] = &["pyproject.toml", "setup.py", "Pipfile"];

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: python-app
runtime: python
build:
  command: pip install -r requirements.txt
start:
  command: python app.py
port: 8000
";

/// Projects without `requirements.txt` still count as Python
fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    if evidence.file_exists("requirements.txt") {
        return CustomDetection::not_detected();
    }

    match evidence.first_existing(ALTERNATE_MANIFESTS) {
        Some(found) => CustomDetection::detected(40.0, vec![found.to_string()]),
        None => CustomDetection::not_detected(),
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Python,
        Metadata::new("Python", Category::Python, "Python application"),
        Pattern::new().files(&["requirements.txt"]),
        Template::fixed(TEMPLATE),
    )
    .with_detector(detect)
}
