//! Framework registry for detection and template lookup

use super::*;
use crate::detection::types::Metadata;
use tracing::{debug, warn};

/// Returned for any framework id without a registration
pub const DEFAULT_TEMPLATE: &str = "\
# Deployment manifest generated by framescout. Review before deploying.
# No framework was recognized; fill in the commands for your project.
name: app
runtime: custom
build:
  command: \"\"
start:
  command: \"\"
port: 8080
";

/// Registry of all available frameworks.
///
/// Iteration order is registration order. Built-ins register specific
/// frameworks before the generic runtime they sit on, so equal scores
/// keep the more specific match first after the stable sort.
#[derive(Debug, Clone)]
pub struct FrameworkRegistry {
    frameworks: Vec<FrameworkDefinition>,
}

impl FrameworkRegistry {
    /// Create a new registry with all built-in frameworks
    pub fn new() -> Self {
        let frameworks = vec![
            // Static site generators and SPA toolchains
            hugo::definition(),
            jekyll::definition(),
            gatsby::definition(),
            astro::definition(),
            angular::definition(),
            react::definition(),
            vue::definition(),
            vite::definition(),
            // Node.js
            nextjs::definition(),
            nuxt::definition(),
            sveltekit::definition(),
            nestjs::definition(),
            express::definition(),
            fastify::definition(),
            nodejs::definition(),
            // Go
            gin::definition(),
            echo::definition(),
            fiber::definition(),
            golang::definition(),
            // Python
            django::definition(),
            flask::definition(),
            fastapi::definition(),
            python::definition(),
            // Java
            spring_boot::definition(),
            java::definition(),
            // PHP
            wordpress::definition(),
            laravel::definition(),
            php::definition(),
            // Generic fallbacks
            docker::definition(),
            static_site::definition(),
        ];

        Self { frameworks }
    }

    /// Registry with no frameworks at all
    pub fn empty() -> Self {
        Self {
            frameworks: Vec::new(),
        }
    }

    /// Add a framework, replacing any registration with the same id in place.
    ///
    /// Returns the replaced definition, if any.
    pub fn register(&mut self, definition: FrameworkDefinition) -> Option<FrameworkDefinition> {
        match self.frameworks.iter_mut().find(|f| f.id == definition.id) {
            Some(existing) => {
                debug!(framework = %definition.id, "Replacing framework registration");
                Some(std::mem::replace(existing, definition))
            }
            None => {
                debug!(framework = %definition.id, "Registering framework");
                self.frameworks.push(definition);
                None
            }
        }
    }

    /// Builder form of [`register`](Self::register)
    pub fn with(mut self, definition: FrameworkDefinition) -> Self {
        self.register(definition);
        self
    }

    pub fn get(&self, id: &FrameworkId) -> Option<&FrameworkDefinition> {
        self.frameworks.iter().find(|f| &f.id == id)
    }

    /// Get framework by id string or alias, ignoring case
    pub fn get_by_name(&self, name: &str) -> Option<&FrameworkDefinition> {
        self.get(&FrameworkId::parse(name))
    }

    pub fn frameworks(&self) -> &[FrameworkDefinition] {
        &self.frameworks
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    pub fn metadata(&self, id: &FrameworkId) -> Option<Arc<Metadata>> {
        self.get(id).map(|f| Arc::clone(&f.metadata))
    }

    /// Template text for a framework, choosing a variant from the directory.
    ///
    /// Never fails: ids without a registration yield [`DEFAULT_TEMPLATE`].
    pub fn resolve_template(&self, id: &FrameworkId, evidence: &Evidence<'_>) -> Cow<'static, str> {
        match self.get(id) {
            Some(definition) => definition.template.render(evidence),
            None => {
                match self.suggest(id.as_str()) {
                    Some(closest) => warn!(
                        framework = %id,
                        suggestion = %closest,
                        "Unknown framework, using default template"
                    ),
                    None => warn!(framework = %id, "Unknown framework, using default template"),
                }
                Cow::Borrowed(DEFAULT_TEMPLATE)
            }
        }
    }

    /// Closest registered id by edit distance, if reasonably close
    pub fn suggest(&self, name: &str) -> Option<&FrameworkId> {
        let name = name.to_ascii_lowercase();
        self.frameworks
            .iter()
            .map(|f| (strsim::levenshtein(&name, f.id.as_str()), &f.id))
            .filter(|(distance, _)| *distance <= 3)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, id)| id)
    }
}

impl Default for FrameworkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
