//! Helpers shared by the built-in framework definitions

use crate::detection::evidence::Evidence;
use crate::detection::manifest::ManifestKind;
use crate::detection::types::CustomDetection;
use regex::Regex;

/// Detected with the given certainty if any candidate path exists
pub(crate) fn detect_any_file(
    evidence: &Evidence<'_>,
    candidates: &[&str],
    certainty: f64,
) -> CustomDetection {
    match evidence.first_existing(candidates) {
        Some(found) => CustomDetection::detected(certainty, vec![found.to_string()]),
        None => CustomDetection::not_detected(),
    }
}

/// First candidate file whose content contains any of the needles
pub(crate) fn file_mentioning<'p>(
    evidence: &Evidence<'_>,
    candidates: &[&'p str],
    needles: &[&str],
) -> Option<&'p str> {
    candidates.iter().copied().find(|file| {
        let content = evidence.read_file(file);
        needles.iter().any(|n| content.contains(n))
    })
}

/// True if any existing candidate file matches the regex
pub(crate) fn any_file_matches(
    evidence: &Evidence<'_>,
    candidates: &[&str],
    re: &Regex,
) -> bool {
    candidates
        .iter()
        .any(|file| re.is_match(&evidence.read_file(file)))
}

/// True if the manifest declares the dependency
pub(crate) fn has_dependency(evidence: &Evidence<'_>, kind: ManifestKind, name: &str) -> bool {
    evidence
        .read_dependency_manifest(kind)
        .contains_key(&kind.normalize(name))
}
