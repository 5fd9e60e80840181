//! Framework registrations
//!
//! Each framework is a [`FrameworkDefinition`]: a declarative [`Pattern`],
//! descriptive [`Metadata`], an optional [`CustomDetector`] for heuristics the
//! pattern cannot express, and a [`Template`] producing the deployment
//! manifest. Adding a framework means writing one definition and registering
//! it; nothing else changes.

use crate::detection::evidence::Evidence;
use crate::detection::types::{CustomDetection, Metadata, Pattern};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

mod id_enum_macro;

pub mod framework_id;
pub mod registry;

mod common;

pub mod angular;
pub mod astro;
pub mod django;
pub mod docker;
pub mod echo;
pub mod express;
pub mod fastapi;
pub mod fastify;
pub mod fiber;
pub mod flask;
pub mod gatsby;
pub mod gin;
pub mod golang;
pub mod hugo;
pub mod java;
pub mod jekyll;
pub mod laravel;
pub mod nestjs;
pub mod nextjs;
pub mod nodejs;
pub mod nuxt;
pub mod php;
pub mod python;
pub mod react;
pub mod spring_boot;
pub mod static_site;
pub mod sveltekit;
pub mod vite;
pub mod vue;
pub mod wordpress;

pub use framework_id::FrameworkId;
pub use registry::{FrameworkRegistry, DEFAULT_TEMPLATE};

/// Framework-specific heuristic run after the pattern categories.
///
/// A detection only ever raises the pattern score (`max`), never lowers it.
pub trait CustomDetector: Send + Sync {
    fn detect(&self, evidence: &Evidence<'_>) -> CustomDetection;
}

impl<F> CustomDetector for F
where
    F: Fn(&Evidence<'_>) -> CustomDetection + Send + Sync,
{
    fn detect(&self, evidence: &Evidence<'_>) -> CustomDetection {
        self(evidence)
    }
}

/// Manifest template attached to a framework
#[derive(Clone)]
pub enum Template {
    /// Same text regardless of the directory
    Fixed(Cow<'static, str>),
    /// Picks a build-mode variant by inspecting the directory
    Select(fn(&Evidence<'_>) -> &'static str),
}

impl Template {
    pub fn fixed(text: impl Into<Cow<'static, str>>) -> Self {
        Template::Fixed(text.into())
    }

    pub fn render(&self, evidence: &Evidence<'_>) -> Cow<'static, str> {
        match self {
            Template::Fixed(text) => text.clone(),
            Template::Select(select) => Cow::Borrowed(select(evidence)),
        }
    }
}

impl fmt::Debug for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Template::Fixed(text) => f.debug_tuple("Fixed").field(&text.len()).finish(),
            Template::Select(_) => f.write_str("Select(..)"),
        }
    }
}

/// One registered framework
#[derive(Clone)]
pub struct FrameworkDefinition {
    pub id: FrameworkId,
    pub metadata: Arc<Metadata>,
    pub pattern: Pattern,
    pub detector: Option<Arc<dyn CustomDetector>>,
    pub template: Template,
}

impl FrameworkDefinition {
    pub fn new(id: FrameworkId, metadata: Metadata, pattern: Pattern, template: Template) -> Self {
        Self {
            id,
            metadata: Arc::new(metadata),
            pattern,
            detector: None,
            template,
        }
    }

    pub fn with_detector(mut self, detector: impl CustomDetector + 'static) -> Self {
        self.detector = Some(Arc::new(detector));
        self
    }

    pub fn has_detector(&self) -> bool {
        self.detector.is_some()
    }
}

impl fmt::Debug for FrameworkDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameworkDefinition")
            .field("id", &self.id)
            .field("metadata", &self.metadata)
            .field("pattern", &self.pattern)
            .field("has_detector", &self.has_detector())
            .field("template", &self.template)
            .finish()
    }
}
