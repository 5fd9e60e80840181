//! Django web framework

use super::*;
use crate::detection::manifest::ManifestKind;
use crate::detection::types::Category;

const TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
# Replace `project` with the package that holds wsgi.py.
name: django-app
runtime: python
build:
  command: pip install -r requirements.txt && python manage.py collectstatic --noinput
start:
  command: gunicorn project.wsgi:application --bind 0.0.0.0:8000
port: 8000
";

pub fn definition() -> FrameworkDefinition {
    FrameworkDefinition::new(
        FrameworkId::Django,
        Metadata::new("Django", Category::Python, "Django web framework"),
        Pattern::new()
            .files(&["manage.py"])
            .requires("django")
            .manifest(ManifestKind::Python)
            .priority(5),
        Template::fixed(TEMPLATE),
    )
}
