//! Fastify web framework for Node.js

use super::*;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: fastify-app
runtime: nodejs
build:
  command: npm ci --omit=dev
start:
  command: npm start
port: 3000
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Fastify,
        Metadata::new("Fastify", Category::Nodejs, "Fastify low-overhead web framework"),
        Pattern::new()
            .content("package.json", &["fastify"])
            .requires("fastify")
            .priority(5),
        Template::fixed(TEMPLATE),
    )
}
