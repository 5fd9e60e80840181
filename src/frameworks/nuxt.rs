//! Nuxt, deployed either as generated static files or a Nitro server

use super::common::{any_file_matches, detect_any_file};
use super::*;
use crate::detection::types::Category;
use regex::Regex;
use std::sync::OnceLock;

const CONFIG_FILES: &[&str] = &["nuxt.config.ts", "nuxt.config.js", "nuxt.config.mjs"];

fn ssr_disabled_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"ssr\s*:\s*false").expect("ssr regex is valid"))
}

const SERVER_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: nuxt-app
runtime: nodejs
build:
  command: npm ci && npm run build
start:
  command: node .output/server/index.mjs
port: 3000
";

const STATIC_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: nuxt-site
runtime: static
build:
  command: npm ci && npx nuxt generate
  output: .output/public
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    detect_any_file(evidence, CONFIG_FILES, 90.0)
}

fn select_template(evidence: &Evidence<'_>) -> &'static str {
    if any_file_matches(evidence, CONFIG_FILES, ssr_disabled_regex())
        || evidence.read_file("package.json").contains("nuxt generate")
    {
        STATIC_TEMPLATE
    } else {
        SERVER_TEMPLATE
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Nuxt,
        Metadata::new("Nuxt", Category::Nodejs, "Nuxt Vue.js framework"),
        Pattern::new()
            .content("package.json", &["\"nuxt\""])
            .requires("nuxt")
            .priority(5),
        Template::Select(select_template),
    )
    .with_detector(detect)
}
