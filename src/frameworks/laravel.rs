//! Laravel PHP framework

use super::*;
use crate::detection::manifest::ManifestKind;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
name: laravel-app
runtime: php
build:
  command: composer install --no-dev --optimize-autoloader && php artisan config:cache
start:
  command: php artisan serve --host=0.0.0.0 --port=8000
port: 8000
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Laravel,
        Metadata::new("Laravel", Category::Unknown, "Laravel PHP framework"),
        Pattern::new()
            .files(&["artisan"])
            .requires("laravel/framework")
            .manifest(ManifestKind::ComposerJson)
            .priority(5),
        Template::fixed(TEMPLATE),
    )
}
