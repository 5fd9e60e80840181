//! Dependency manifest parsing
//!
//! Every supported ecosystem manifest is flattened into a single
//! `name -> version` map, merging production and development sections.
//! Parsers return `Err` on malformed input; callers decide whether to
//! swallow it.

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::sync::OnceLock;
use toml::Value as TomlValue;

/// Flat dependency mapping, name to version requirement
pub type Dependencies = BTreeMap<String, String>;

/// Placeholder version for dependencies declared without one
const ANY_VERSION: &str = "*";

/// Ecosystem manifest a pattern's dependency checks read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ManifestKind {
    /// `package.json`: `dependencies` + `devDependencies`
    PackageJson,
    /// `composer.json`: `require` + `require-dev`
    ComposerJson,
    /// `requirements.txt` and `pyproject.toml`
    Python,
    /// `go.mod` require directives
    GoMod,
    /// `pom.xml` dependencies
    Maven,
}

impl ManifestKind {
    pub fn files(&self) -> &'static [&'static str] {
        match self {
            ManifestKind::PackageJson => &["package.json"],
            ManifestKind::ComposerJson => &["composer.json"],
            ManifestKind::Python => &["requirements.txt", "pyproject.toml"],
            ManifestKind::GoMod => &["go.mod"],
            ManifestKind::Maven => &["pom.xml"],
        }
    }

    /// Canonical form of a dependency name for lookups
    pub fn normalize(&self, name: &str) -> String {
        match self {
            ManifestKind::Python => normalize_python_name(name),
            _ => name.trim().to_string(),
        }
    }

    /// Parses one of this kind's files
    pub fn parse(&self, file: &str, content: &str) -> Result<Dependencies> {
        match (self, file) {
            (ManifestKind::PackageJson, _) => {
                parse_json_sections(content, &["dependencies", "devDependencies"])
                    .context("Failed to parse package.json")
            }
            (ManifestKind::ComposerJson, _) => {
                parse_json_sections(content, &["require", "require-dev"])
                    .context("Failed to parse composer.json")
            }
            (ManifestKind::Python, "pyproject.toml") => {
                parse_pyproject(content).context("Failed to parse pyproject.toml")
            }
            (ManifestKind::Python, _) => Ok(parse_requirements(content)),
            (ManifestKind::GoMod, _) => Ok(parse_go_mod(content)),
            (ManifestKind::Maven, _) => parse_pom(content).context("Failed to parse pom.xml"),
        }
    }
}

fn normalize_python_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace(['_', '.'], "-")
}

fn parse_json_sections(content: &str, sections: &[&str]) -> Result<Dependencies> {
    let root: JsonValue = serde_json::from_str(content)?;
    let object = root
        .as_object()
        .ok_or_else(|| anyhow!("manifest root is not an object"))?;

    let mut deps = Dependencies::new();
    for section in sections {
        if let Some(JsonValue::Object(entries)) = object.get(*section) {
            for (name, version) in entries {
                let version = match version {
                    JsonValue::String(v) => v.clone(),
                    other => other.to_string(),
                };
                deps.insert(name.clone(), version);
            }
        }
    }

    Ok(deps)
}

fn requirement_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9][A-Za-z0-9._-]*)\s*(?:\[[^\]]*\])?\s*(.*)$")
            .expect("requirement regex is valid")
    })
}

fn egg_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#egg=([A-Za-z0-9._-]+)").expect("egg regex is valid"))
}

/// Parses a single PEP 508 style requirement into (normalized name, version spec)
fn parse_requirement(line: &str) -> Option<(String, String)> {
    let line = line.split(" #").next().unwrap_or(line);
    let line = line.split(';').next().unwrap_or(line).trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    if line.starts_with('-') || line.contains("://") {
        let caps = egg_regex().captures(line)?;
        return Some((normalize_python_name(&caps[1]), ANY_VERSION.to_string()));
    }

    let caps = requirement_regex().captures(line)?;
    let version = caps[2].trim();
    let version = if version.is_empty() {
        ANY_VERSION.to_string()
    } else {
        version.to_string()
    };
    Some((normalize_python_name(&caps[1]), version))
}

fn parse_requirements(content: &str) -> Dependencies {
    content.lines().filter_map(parse_requirement).collect()
}

fn push_requirements(list: Option<&TomlValue>, deps: &mut Dependencies) {
    if let Some(TomlValue::Array(items)) = list {
        for item in items.iter().filter_map(TomlValue::as_str) {
            if let Some((name, version)) = parse_requirement(item) {
                deps.insert(name, version);
            }
        }
    }
}

fn parse_pyproject(content: &str) -> Result<Dependencies> {
    let root: TomlValue = toml::from_str(content)?;
    let mut deps = Dependencies::new();

    if let Some(project) = root.get("project") {
        push_requirements(project.get("dependencies"), &mut deps);
        if let Some(TomlValue::Table(extras)) = project.get("optional-dependencies") {
            for group in extras.values() {
                push_requirements(Some(group), &mut deps);
            }
        }
    }

    if let Some(poetry) = root.get("tool").and_then(|t| t.get("poetry")) {
        let mut tables = vec![poetry.get("dependencies"), poetry.get("dev-dependencies")];
        if let Some(TomlValue::Table(groups)) = poetry.get("group") {
            tables.extend(groups.values().map(|g| g.get("dependencies")));
        }

        for table in tables.into_iter().flatten() {
            let Some(table) = table.as_table() else {
                continue;
            };
            for (name, spec) in table {
                if name.eq_ignore_ascii_case("python") {
                    continue;
                }
                let version = match spec {
                    TomlValue::String(v) => v.clone(),
                    TomlValue::Table(t) => t
                        .get("version")
                        .and_then(TomlValue::as_str)
                        .unwrap_or(ANY_VERSION)
                        .to_string(),
                    _ => ANY_VERSION.to_string(),
                };
                deps.insert(normalize_python_name(name), version);
            }
        }
    }

    Ok(deps)
}

fn parse_go_mod(content: &str) -> Dependencies {
    let mut deps = Dependencies::new();
    let mut in_block = false;

    for raw in content.lines() {
        let line = raw.split("//").next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let spec = if in_block {
            if line == ")" {
                in_block = false;
                continue;
            }
            line
        } else if let Some(rest) = line.strip_prefix("require") {
            let rest = rest.trim();
            if rest == "(" {
                in_block = true;
                continue;
            }
            rest
        } else {
            continue;
        };

        let mut parts = spec.split_whitespace();
        if let Some(module) = parts.next() {
            let version = parts.next().unwrap_or(ANY_VERSION);
            deps.insert(module.to_string(), version.to_string());
        }
    }

    deps
}

fn child_text(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
        .and_then(|c| c.text())
        .map(|t| t.trim().to_string())
}

fn parse_pom(content: &str) -> Result<Dependencies> {
    let doc = roxmltree::Document::parse(content)?;
    let mut deps = Dependencies::new();

    for node in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "dependency")
    {
        let Some(artifact) = child_text(node, "artifactId") else {
            continue;
        };
        let version = child_text(node, "version").unwrap_or_else(|| ANY_VERSION.to_string());

        if let Some(group) = child_text(node, "groupId") {
            deps.insert(format!("{}:{}", group, artifact), version.clone());
        }
        deps.insert(artifact, version);
    }

    Ok(deps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_json_merges_dev_dependencies() {
        let content = r#"{
            "name": "web",
            "dependencies": { "next": "13.0.0", "react": "^18.2.0" },
            "devDependencies": { "typescript": "5.0.0" }
        }"#;

        let deps = ManifestKind::PackageJson
            .parse("package.json", content)
            .unwrap();
        assert_eq!(deps.get("next").map(String::as_str), Some("13.0.0"));
        assert_eq!(deps.get("typescript").map(String::as_str), Some("5.0.0"));
        assert_eq!(deps.len(), 3);
    }

    #[test]
    fn test_package_json_without_sections() {
        let deps = ManifestKind::PackageJson
            .parse("package.json", r#"{"name": "bare"}"#)
            .unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_package_json_malformed() {
        assert!(ManifestKind::PackageJson
            .parse("package.json", "{ not json")
            .is_err());
        assert!(ManifestKind::PackageJson
            .parse("package.json", "[1, 2]")
            .is_err());
    }

    #[test]
    fn test_composer_json() {
        let content = r#"{
            "require": { "php": "^8.1", "laravel/framework": "^10.0" },
            "require-dev": { "phpunit/phpunit": "^10.0" }
        }"#;
        let deps = ManifestKind::ComposerJson
            .parse("composer.json", content)
            .unwrap();
        assert!(deps.contains_key("laravel/framework"));
        assert!(deps.contains_key("phpunit/phpunit"));
    }

    #[test]
    fn test_requirements_txt() {
        let content = "\
# web stack
Django==4.2.1
flask[async] >= 2.0 ; python_version > '3.8'
python_dotenv
-r base.txt
--index-url https://pypi.org/simple
git+https://github.com/encode/uvicorn.git#egg=uvicorn
requests  # http
";
        let deps = ManifestKind::Python
            .parse("requirements.txt", content)
            .unwrap();
        assert_eq!(deps.get("django").map(String::as_str), Some("==4.2.1"));
        assert_eq!(deps.get("flask").map(String::as_str), Some(">= 2.0"));
        assert_eq!(deps.get("python-dotenv").map(String::as_str), Some("*"));
        assert_eq!(deps.get("uvicorn").map(String::as_str), Some("*"));
        assert_eq!(deps.get("requests").map(String::as_str), Some("*"));
        assert_eq!(deps.len(), 5);
    }

    #[test]
    fn test_empty_requirements_txt() {
        let deps = ManifestKind::Python.parse("requirements.txt", "").unwrap();
        assert!(deps.is_empty());
    }

    #[test]
    fn test_pyproject_pep621_and_poetry() {
        let content = r#"
[project]
name = "svc"
dependencies = ["fastapi>=0.100", "uvicorn[standard]"]

[project.optional-dependencies]
test = ["pytest"]

[tool.poetry.dependencies]
python = "^3.11"
SQLAlchemy = "^2.0"
pydantic = { version = "^2.0", extras = ["email"] }

[tool.poetry.group.dev.dependencies]
black = "^23.0"
"#;
        let deps = ManifestKind::Python
            .parse("pyproject.toml", content)
            .unwrap();
        assert_eq!(deps.get("fastapi").map(String::as_str), Some(">=0.100"));
        assert!(deps.contains_key("uvicorn"));
        assert!(deps.contains_key("pytest"));
        assert_eq!(deps.get("sqlalchemy").map(String::as_str), Some("^2.0"));
        assert_eq!(deps.get("pydantic").map(String::as_str), Some("^2.0"));
        assert!(deps.contains_key("black"));
        assert!(!deps.contains_key("python"));
    }

    #[test]
    fn test_pyproject_malformed() {
        assert!(ManifestKind::Python
            .parse("pyproject.toml", "[project\nname=")
            .is_err());
    }

    #[test]
    fn test_go_mod() {
        let content = "\
module example.com/api

go 1.21

require github.com/gofiber/fiber/v2 v2.50.0

require (
\tgithub.com/gin-gonic/gin v1.9.1
\tgolang.org/x/net v0.17.0 // indirect
)
";
        let deps = ManifestKind::GoMod.parse("go.mod", content).unwrap();
        assert_eq!(
            deps.get("github.com/gin-gonic/gin").map(String::as_str),
            Some("v1.9.1")
        );
        assert!(deps.contains_key("github.com/gofiber/fiber/v2"));
        assert!(deps.contains_key("golang.org/x/net"));
        assert_eq!(deps.len(), 3);
    }

    #[test]
    fn test_pom_xml() {
        let content = r#"<?xml version="1.0"?>
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <dependencies>
    <dependency>
      <groupId>org.springframework.boot</groupId>
      <artifactId>spring-boot-starter-web</artifactId>
    </dependency>
    <dependency>
      <groupId>junit</groupId>
      <artifactId>junit</artifactId>
      <version>4.13.2</version>
      <scope>test</scope>
    </dependency>
  </dependencies>
</project>"#;
        let deps = ManifestKind::Maven.parse("pom.xml", content).unwrap();
        assert!(deps.contains_key("spring-boot-starter-web"));
        assert!(deps.contains_key("org.springframework.boot:spring-boot-starter-web"));
        assert_eq!(deps.get("junit").map(String::as_str), Some("4.13.2"));
    }

    #[test]
    fn test_pom_malformed() {
        assert!(ManifestKind::Maven.parse("pom.xml", "<project>").is_err());
    }

    #[test]
    fn test_normalize() {
        assert_eq!(ManifestKind::Python.normalize("Flask_Login"), "flask-login");
        assert_eq!(ManifestKind::PackageJson.normalize("@nestjs/core"), "@nestjs/core");
    }
}
