//! Express web framework for Node.js

use super::common::file_mentioning;
use super::*;
use crate::detection::types::Category;

const ENTRY_POINTS: &[&str] = &[
    "app.js",
    "server.js",
    "index.js",
    "app.ts",
    "server.ts",
    "index.ts",
    "src/app.js",
    "src/server.js",
    "src/index.js",
    "src/app.ts",
    "src/server.ts",
    "src/index.ts",
];

const USAGES: &[&str] = &[
    "require('express')",
    "require(\"express\")",
    "from 'express'",
    "from \"express\"",
];

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: express-app
runtime: nodejs
build:
  command: npm ci --omit=dev
start:
  command: npm start
port: 3000
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    match file_mentioning(evidence, ENTRY_POINTS, USAGES) {
        Some(entry) => CustomDetection::detected(80.0, vec![format!("{} imports express", entry)]),
        None => CustomDetection::not_detected(),
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Express,
        Metadata::new("Express", Category::Nodejs, "Express web framework for Node.js"),
        Pattern::new()
            .content("package.json", &["express"])
            .requires("express")
            .priority(5),
        Template::fixed(TEMPLATE),
    )
    .with_detector(detect)
}
