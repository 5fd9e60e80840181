//! Generic PHP applications

use super::common::detect_any_file;
use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: php-app
runtime: php
build:
  command: composer install --no-dev --optimize-autoloader
start:
  command: php -S 0.0.0.0:8080 -t .
port: 8080
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    detect_any_file(evidence, &["index.php"], 40.0)
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Php,
        Metadata::new("PHP", Category::Unknown, "PHP application"),
        Pattern::new().files(&["composer.json"]),
        Template::fixed(TEMPLATE),
    )
    .with_detector(detect)
}
