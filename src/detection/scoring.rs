//! Weighted evidence scoring for one (directory, framework) pair

use crate::detection::evidence::Evidence;
use crate::detection::types::{DetectionResult, Pattern};
use crate::frameworks::FrameworkDefinition;
use tracing::debug;

pub const FILE_WEIGHT: f64 = 40.0;
pub const DIR_WEIGHT: f64 = 30.0;
pub const CONTENT_WEIGHT: f64 = 30.0;
pub const DEPENDENCY_WEIGHT: f64 = 30.0;

pub const MIN_CERTAINTY: f64 = 0.0;
pub const MAX_CERTAINTY: f64 = 100.0;

fn fraction(matched: usize, total: usize, weight: f64) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64 * weight
    }
}

fn score_files(evidence: &Evidence<'_>, pattern: &Pattern, items: &mut Vec<String>) -> f64 {
    let mut matched = 0;
    for file in &pattern.required_files {
        if evidence.file_exists(file) {
            matched += 1;
            items.push(file.clone());
        }
    }
    fraction(matched, pattern.required_files.len(), FILE_WEIGHT)
}

fn score_dirs(evidence: &Evidence<'_>, pattern: &Pattern, items: &mut Vec<String>) -> f64 {
    let mut matched = 0;
    for dir in &pattern.required_dirs {
        if evidence.directory_exists(dir) {
            matched += 1;
            items.push(format!("{}/", dir));
        }
    }
    fraction(matched, pattern.required_dirs.len(), DIR_WEIGHT)
}

fn score_content(evidence: &Evidence<'_>, pattern: &Pattern, items: &mut Vec<String>) -> f64 {
    let mut matched = 0;
    let mut total = 0;

    for content_pattern in &pattern.content_patterns {
        let content = evidence.read_file(&content_pattern.file);
        for substring in &content_pattern.substrings {
            total += 1;
            if content.contains(substring.as_str()) {
                matched += 1;
                items.push(format!("{} contains '{}'", content_pattern.file, substring));
            }
        }
    }

    fraction(matched, total, CONTENT_WEIGHT)
}

fn score_dependencies(evidence: &Evidence<'_>, pattern: &Pattern, items: &mut Vec<String>) -> f64 {
    if pattern.dependencies.is_empty() || !evidence.has_manifest(pattern.manifest) {
        return 0.0;
    }

    let deps = evidence.read_dependency_manifest(pattern.manifest);
    let mut passed = 0;

    for (name, required) in &pattern.dependencies {
        let present = deps.contains_key(&pattern.manifest.normalize(name));
        match (required, present) {
            (true, true) => {
                passed += 1;
                items.push(format!("dependency {}", name));
            }
            (false, false) => {
                passed += 1;
                items.push(format!("no dependency {}", name));
            }
            _ => {}
        }
    }

    fraction(passed, pattern.dependencies.len(), DEPENDENCY_WEIGHT)
}

/// Scores a framework against the directory behind `evidence`.
///
/// Category contributions are summed, raised to the custom detector's
/// certainty when it fires, offset by the priority bonus and clamped to
/// `[0, 100]`. The bonus only applies once some evidence matched, so a
/// directory with no evidence always scores zero.
pub fn score(evidence: &Evidence<'_>, definition: &FrameworkDefinition) -> DetectionResult {
    let pattern = &definition.pattern;
    let mut items = Vec::new();

    let mut certainty = score_files(evidence, pattern, &mut items)
        + score_dirs(evidence, pattern, &mut items)
        + score_content(evidence, pattern, &mut items)
        + score_dependencies(evidence, pattern, &mut items);

    if let Some(detector) = &definition.detector {
        let detection = detector.detect(evidence);
        if detection.detected {
            certainty = certainty.max(detection.certainty);
            items.extend(detection.detected_items);
        }
    }

    if certainty > 0.0 {
        certainty += f64::from(pattern.priority);
    }

    let certainty = if certainty.is_nan() {
        MIN_CERTAINTY
    } else {
        certainty.clamp(MIN_CERTAINTY, MAX_CERTAINTY)
    };

    debug!(
        framework = %definition.id,
        dir = %evidence.dir().display(),
        certainty,
        evidence = items.len(),
        "Scored framework"
    );

    DetectionResult {
        framework: definition.id.clone(),
        certainty,
        detected_items: items,
        metadata: definition.metadata.clone(),
        subproject: None,
    }
}
