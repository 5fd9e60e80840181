//! SvelteKit, static when built with the static adapter

use super::common::has_dependency;
use super::*;
use crate::detection::manifest::ManifestKind;
use crate::detection::types::Category;

const NODE_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: sveltekit-app
runtime: nodejs
build:
  command: npm ci && npm run build
start:
  command: node build
port: 3000
";

const STATIC_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: sveltekit-site
runtime: static
build:
  command: npm ci && npm run build
  output: build
";

fn select_template(evidence: &Evidence<'_>) -> &'static str {
    if has_dependency(evidence, ManifestKind::PackageJson, "@sveltejs/adapter-static") {
        STATIC_TEMPLATE
    } else {
        NODE_TEMPLATE
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::SvelteKit,
        Metadata::new("SvelteKit", Category::Nodejs, "SvelteKit application framework"),
        Pattern::new()
            .files(&["svelte.config.js"])
            .requires("@sveltejs/kit")
            .priority(5),
        Template::Select(select_template),
    )
}
