//! NestJS server framework

use super::common::file_mentioning;
use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: nestjs-app
runtime: nodejs
build:
  command: npm ci && npm run build
start:
  command: node dist/main.js
port: 3000
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    match file_mentioning(evidence, &["src/main.ts", "src/main.js"], &["NestFactory"]) {
        Some(main) => CustomDetection::detected(90.0, vec![format!("{} bootstraps NestFactory", main)]),
        None => CustomDetection::not_detected(),
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::NestJs,
        Metadata::new("NestJS", Category::Nodejs, "NestJS progressive Node.js framework"),
        Pattern::new()
            .files(&["nest-cli.json"])
            .requires("@nestjs/core")
            .priority(5),
        Template::fixed(TEMPLATE),
    )
    .with_detector(detect)
}
