//! WordPress installations

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
# Database credentials belong in the environment, not in wp-config.php.
name: wordpress-site
runtime: php
build:
  command: \"\"
start:
  command: php-fpm
port: 9000
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    if evidence.directory_exists("wp-content") && evidence.file_exists("wp-login.php") {
        CustomDetection::detected(
            90.0,
            vec!["wp-content/".to_string(), "wp-login.php".to_string()],
        )
    } else {
        CustomDetection::not_detected()
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::WordPress,
        Metadata::new("WordPress", Category::Unknown, "WordPress content management system"),
        Pattern::new()
            .files(&["wp-config.php"])
            .dirs(&["wp-content", "wp-includes"])
            .priority(10),
        Template::fixed(TEMPLATE),
    )
    .with_detector(detect)
}
