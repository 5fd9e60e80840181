//! Next.js, deployed either as a static export or a Node.js server

use super::common::{any_file_matches, detect_any_file};
use super::*;
use crate::detection::types::Category;
use regex::Regex;
use std::sync::OnceLock;

const CONFIG_FILES: &[&str] = &["next.config.js", "next.config.mjs", "next.config.ts"];

fn static_export_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"output\s*:\s*['"]export['"]"#).expect("static export regex is valid")
    })
}

const SERVER_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: nextjs-app
runtime: nodejs
build:
  command: npm ci && npm run build
start:
  command: npm start
port: 3000
";

const STATIC_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: nextjs-site
runtime: static
build:
  command: npm ci && npm run build
  output: out
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    let detection = detect_any_file(evidence, CONFIG_FILES, 90.0);
    if detection.detected {
        return detection;
    }

    // Build output left behind by `next build`
    if evidence.directory_exists(".next") {
        return CustomDetection::detected(90.0, vec![".next/".to_string()]);
    }

    CustomDetection::not_detected()
}

fn is_static_export(evidence: &Evidence<'_>) -> bool {
    any_file_matches(evidence, CONFIG_FILES, static_export_regex())
        || evidence.read_file("package.json").contains("next export")
}

fn select_template(evidence: &Evidence<'_>) -> &'static str {
    if is_static_export(evidence) {
        STATIC_TEMPLATE
    } else {
        SERVER_TEMPLATE
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::NextJs,
        Metadata::new("Next.js", Category::Nodejs, "Next.js React framework"),
        Pattern::new()
            .content("package.json", &["\"next\""])
            .requires("next")
            .priority(5),
        Template::Select(select_template),
    )
    .with_detector(detect)
}
