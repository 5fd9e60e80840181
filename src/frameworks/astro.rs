//! Astro sites, either fully static or server-rendered

use super::common::{any_file_matches, detect_any_file};
use super::*;
use crate::detection::types::Category;
use regex::Regex;
use std::sync::OnceLock;

const CONFIG_FILES: &[&str] = &["astro.config.mjs", "astro.config.js", "astro.config.ts"];

fn server_output_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"output\s*:\s*['"](server|hybrid)['"]"#).expect("server output regex is valid")
    })
}

const STATIC_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: astro-site
runtime: static
build:
  command: npm ci && npm run build
  output: dist
";

const SERVER_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: astro-app
runtime: nodejs
build:
  command: npm ci && npm run build
start:
  command: node ./dist/server/entry.mjs
port: 4321
";

fn detect(evidence: &Evidence<'_>) -> CustomDetection {
    detect_any_file(evidence, CONFIG_FILES, 90.0)
}

fn select_template(evidence: &Evidence<'_>) -> &'static str {
    if any_file_matches(evidence, CONFIG_FILES, server_output_regex()) {
        SERVER_TEMPLATE
    } else {
        STATIC_TEMPLATE
    }
}

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Astro,
        Metadata::new("Astro", Category::Static, "Astro content-driven web framework"),
        Pattern::new().requires("astro").priority(5),
        Template::Select(select_template),
    )
    .with_detector(detect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::scoring::score;
    use crate::fs::MockFileSystem;

    #[test]
    fn test_astro_static_by_default() {
        let fs = MockFileSystem::new();
        fs.add_file("package.json", r#"{"dependencies": {"astro": "4.0.0"}}"#);
        fs.add_file("astro.config.mjs", "export default defineConfig({})");
        let evidence = Evidence::new(&fs, fs.root());

        assert_eq!(score(&evidence, &definition()).certainty, 95.0);
        assert!(definition()
            .template
            .render(&evidence)
            .contains("runtime: static"));
    }

    #[test]
    fn test_astro_server_output() {
        let fs = MockFileSystem::new();
        fs.add_file(
            "astro.config.mjs",
            "export default defineConfig({ output: 'hybrid', adapter: node() })",
        );
        let evidence = Evidence::new(&fs, fs.root());

        assert!(definition()
            .template
            .render(&evidence)
            .contains("entry.mjs"));
    }
}
