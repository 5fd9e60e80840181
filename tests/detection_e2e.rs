//! End-to-end detection tests against real directory trees

use framescout::detection::types::Category;
use framescout::{
    scan_directory, FrameworkDefinition, FrameworkId, FrameworkRegistry, FrameworkScanner,
    Metadata, Pattern, ScanConfig, Template,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use yare::parameterized;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, content).expect("Failed to write fixture file");
}

fn ids(results: &[framescout::DetectionResult]) -> Vec<String> {
    results.iter().map(|r| r.framework.to_string()).collect()
}

#[test]
fn test_nextjs_server_project() {
    let repo = TempDir::new().unwrap();
    write(
        repo.path(),
        "package.json",
        r#"{"name": "shop", "dependencies": {"next": "13.0.0"}}"#,
    );
    write(
        repo.path(),
        "next.config.js",
        "module.exports = { reactStrictMode: true }\n",
    );

    let scanner = FrameworkScanner::new(Arc::new(FrameworkRegistry::new()));
    let results = scanner.scan_directory(repo.path());

    let top = &results[0];
    assert_eq!(top.framework, FrameworkId::NextJs);
    assert_eq!(top.category(), Category::Nodejs);
    assert_eq!(top.certainty, 95.0);
    assert!(top.subproject.is_none());

    assert!(ids(&results).contains(&"nodejs".to_string()));
    assert!(!ids(&results).contains(&"react".to_string()));
    assert!(!ids(&results).contains(&"vue".to_string()));

    let template = scanner.resolve_template(&top.framework, repo.path());
    assert!(template.contains("runtime: nodejs"));
    assert!(template.contains("port: 3000"));
}

#[test]
fn test_express_project_has_no_spa_results() {
    let repo = TempDir::new().unwrap();
    write(
        repo.path(),
        "package.json",
        r#"{"dependencies": {"express": "4.18.0"}}"#,
    );

    let results = scan_directory(repo.path());
    assert_eq!(ids(&results), vec!["express", "nodejs"]);
    assert_eq!(results[0].certainty, 65.0);
    assert_eq!(results[1].certainty, 40.0);
}

#[test]
fn test_nextjs_static_export_template() {
    let repo = TempDir::new().unwrap();
    write(
        repo.path(),
        "package.json",
        r#"{"dependencies": {"next": "13.0.0"}}"#,
    );
    write(
        repo.path(),
        "next.config.mjs",
        "export default { output: 'export' }\n",
    );

    let scanner = FrameworkScanner::new(Arc::new(FrameworkRegistry::new()));
    let results = scanner.scan_directory(repo.path());
    assert_eq!(results[0].framework, FrameworkId::NextJs);

    let template = scanner.resolve_template(&FrameworkId::NextJs, repo.path());
    assert!(template.contains("runtime: static"));
    assert!(template.contains("output: out"));
}

#[test]
fn test_empty_requirements_is_plain_python() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "requirements.txt", "");

    let scanner = FrameworkScanner::new(Arc::new(FrameworkRegistry::new()));
    let results = scanner.scan_directory(repo.path());

    assert_eq!(ids(&results), vec!["python"]);
    assert_eq!(results[0].certainty, 40.0);
    assert_eq!(results[0].detected_items, vec!["requirements.txt"]);

    let template = scanner.resolve_template(&FrameworkId::Python, repo.path());
    assert!(template.contains("name: python-app"));
}

#[test]
fn test_unrecognized_tree_yields_nothing() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "notes.txt", "nothing to see here\n");
    write(repo.path(), "docs/README.md", "# Docs\n");

    assert!(scan_directory(repo.path()).is_empty());
}

#[test]
fn test_missing_root_yields_nothing() {
    let repo = TempDir::new().unwrap();
    assert!(scan_directory(repo.path().join("does-not-exist")).is_empty());
}

#[parameterized(
    go_module = { &[("go.mod", "module example.com/svc\n")], "go" },
    django = { &[("manage.py", "import django\n"), ("requirements.txt", "django==4.2\n")], "django" },
    laravel = { &[("artisan", "#!/usr/bin/env php\n"), ("composer.json", r#"{"require": {"laravel/framework": "^10.0"}}"#)], "laravel" },
    jekyll = { &[("_config.yml", "title: Blog\n"), ("_posts/2024-01-01-hello.md", "hi\n"), ("Gemfile", "gem \"jekyll\"\n")], "jekyll" },
)]
fn test_top_framework(files: &[(&str, &str)], expected: &str) {
    let repo = TempDir::new().unwrap();
    for (path, content) in files {
        write(repo.path(), path, content);
    }

    let results = scan_directory(repo.path());
    assert_eq!(results[0].framework.as_str(), expected);
}

#[test]
fn test_monorepo_subprojects() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "Dockerfile", "FROM scratch\n");
    write(repo.path(), "services/api/go.mod", "module example.com/api\n");
    write(repo.path(), "web/package.json", r#"{"dependencies": {"next": "14.0.0"}}"#);
    write(repo.path(), "web/next.config.js", "module.exports = {}\n");
    write(
        repo.path(),
        "web/node_modules/left-pad/package.json",
        r#"{"name": "left-pad"}"#,
    );

    let results = scan_directory(repo.path());

    let nextjs = results
        .iter()
        .find(|r| r.framework == FrameworkId::NextJs)
        .expect("nextjs result");
    assert_eq!(nextjs.subproject.as_deref(), Some("web"));
    assert!(nextjs
        .detected_items
        .iter()
        .all(|item| item.starts_with("web: ")));

    let go = results
        .iter()
        .find(|r| r.framework == FrameworkId::Go)
        .expect("go result");
    assert_eq!(go.subproject.as_deref(), Some("services/api"));
    assert_eq!(go.detected_items, vec!["services/api: go.mod"]);

    let docker = results
        .iter()
        .find(|r| r.framework == FrameworkId::Docker)
        .expect("docker result");
    assert!(docker.subproject.is_none());

    assert!(results.iter().all(|r| !r
        .subproject
        .as_deref()
        .unwrap_or_default()
        .contains("node_modules")));

    assert!(results
        .windows(2)
        .all(|pair| pair[0].certainty >= pair[1].certainty));
}

#[test]
fn test_depth_bound_on_real_tree() {
    let repo = TempDir::new().unwrap();
    let mut relative = String::new();
    for level in 1..=15 {
        if !relative.is_empty() {
            relative.push('/');
        }
        relative.push_str(&format!("level{:02}", level));
        write(repo.path(), &format!("{}/go.mod", relative), "module deep\n");
    }

    let results = scan_directory(repo.path());
    let go: Vec<_> = results
        .iter()
        .filter(|r| r.framework == FrameworkId::Go)
        .collect();

    assert_eq!(go.len(), 10);
    let deepest = go
        .iter()
        .filter_map(|r| r.subproject.as_deref())
        .map(|s| s.split('/').count())
        .max();
    assert_eq!(deepest, Some(10));
}

#[test]
fn test_custom_depth_and_exclusions() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "a/go.mod", "module a\n");
    write(repo.path(), "a/b/go.mod", "module b\n");
    write(repo.path(), "vendor/go.mod", "module vendored\n");

    let config = ScanConfig {
        max_depth: 1,
        ..ScanConfig::default()
    }
    .exclude(["vendor"]);
    let scanner = FrameworkScanner::new(Arc::new(FrameworkRegistry::new())).with_config(config);

    let subprojects: Vec<_> = scanner
        .scan_directory(repo.path())
        .into_iter()
        .filter_map(|r| r.subproject)
        .collect();
    assert_eq!(subprojects, vec!["a"]);
}

#[test]
fn test_scan_is_idempotent() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "package.json", r#"{"dependencies": {"express": "4.18.0"}}"#);
    write(repo.path(), "worker/requirements.txt", "celery\n");
    write(repo.path(), "Dockerfile", "FROM node:20\n");

    let first = scan_directory(repo.path());
    let second = scan_directory(repo.path());
    assert_eq!(first, second);
}

#[test]
fn test_registered_custom_framework() {
    let repo = TempDir::new().unwrap();
    write(repo.path(), "remix.config.js", "module.exports = {}\n");

    let registry = FrameworkRegistry::new().with(FrameworkDefinition::new(
        FrameworkId::parse("remix"),
        Metadata::new("Remix", Category::Nodejs, "Remix full-stack framework"),
        Pattern::new().files(&["remix.config.js"]),
        Template::fixed("name: remix-app\nruntime: nodejs\nport: 3000\n"),
    ));
    let scanner = FrameworkScanner::new(Arc::new(registry));

    let results = scanner.scan_directory(repo.path());
    assert_eq!(ids(&results), vec!["remix"]);
    assert_eq!(results[0].certainty, 40.0);
    assert_eq!(results[0].metadata.name, "Remix");

    let template = scanner.resolve_template(&FrameworkId::parse("remix"), repo.path());
    assert!(template.starts_with("name: remix-app"));
}

#[test]
fn test_unknown_template_falls_back_to_default() {
    let repo = TempDir::new().unwrap();
    let scanner = FrameworkScanner::new(Arc::new(FrameworkRegistry::new()));

    let template = scanner.resolve_template(&FrameworkId::parse("cobol"), repo.path());
    assert_eq!(template, framescout::frameworks::DEFAULT_TEMPLATE);
}
