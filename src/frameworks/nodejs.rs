//! Generic Node.js applications

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: node-app
runtime: nodejs
build:
  command: npm ci
start:
  command: npm start
port: 3000
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::NodeJs,
        Metadata::new("Node.js", Category::Nodejs, "Node.js application"),
        Pattern::new().files(&["package.json"]),
        Template::fixed(TEMPLATE),
    )
}
