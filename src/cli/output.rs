//! Output formatting for multiple formats
//!
//! Scan results and the framework catalogue can be rendered as JSON, YAML
//! or human-readable text.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::detection::types::{Category, DetectionResult};
use crate::frameworks::FrameworkRegistry;

const RULE: &str = "\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}\u{2501}";

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Serialized form of a scan
#[derive(Debug, Serialize)]
pub struct ScanReport<'a> {
    pub root: String,
    pub detections: &'a [DetectionResult],
}

/// One row of the framework catalogue
#[derive(Debug, Serialize)]
pub struct FrameworkSummary {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub priority: i32,
    pub custom_detector: bool,
}

/// Output formatter for detection results
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Formats ranked scan results for `root`
    pub fn format_results(&self, root: &Path, results: &[DetectionResult]) -> Result<String> {
        let report = ScanReport {
            root: root.display().to_string(),
            detections: results,
        };

        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&report)
                .context("Failed to serialize detection results to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(&report)
                .context("Failed to serialize detection results to YAML"),
            OutputFormat::Human => Ok(self.format_results_human(&report)),
        }
    }

    /// Formats the list of registered frameworks
    pub fn format_frameworks(&self, registry: &FrameworkRegistry) -> Result<String> {
        let summaries: Vec<FrameworkSummary> = registry
            .frameworks()
            .iter()
            .map(|f| FrameworkSummary {
                id: f.id.to_string(),
                name: f.metadata.name.to_string(),
                category: f.metadata.category,
                description: f.metadata.description.to_string(),
                priority: f.pattern.priority,
                custom_detector: f.has_detector(),
            })
            .collect();

        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&summaries)
                .context("Failed to serialize framework list to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(&summaries)
                .context("Failed to serialize framework list to YAML"),
            OutputFormat::Human => Ok(self.format_frameworks_human(&summaries)),
        }
    }

    fn format_results_human(&self, report: &ScanReport<'_>) -> String {
        let mut output = String::new();

        if report.detections.is_empty() {
            output.push_str("\u{26A0} No frameworks detected\n");
            output.push_str(RULE);
            output.push_str("\n\n");
            output.push_str(&format!("Scanned: {}\n", report.root));
            return output;
        }

        output.push_str("\u{2713} Framework Detection Result\n");
        output.push_str(RULE);
        output.push_str("\n\n");
        output.push_str(&format!("Scanned: {}\n\n", report.root));

        for (rank, result) in report.detections.iter().enumerate() {
            output.push_str(&format!(
                "{}. {} ({}) [{}]\n",
                rank + 1,
                result.metadata.name,
                result.framework,
                result.category()
            ));
            if let Some(ref subproject) = result.subproject {
                output.push_str(&format!("   Location:   {}/\n", subproject));
            }
            output.push_str(&format!(
                "   Confidence: {} {:.0}% ({})\n",
                confidence_bar(result.certainty),
                result.certainty,
                result.confidence_level()
            ));

            for (i, item) in result.detected_items.iter().enumerate() {
                let connector = if i + 1 == result.detected_items.len() {
                    "\u{2514}"
                } else {
                    "\u{251C}"
                };
                output.push_str(&format!("   {}\u{2500} {}\n", connector, item));
            }
            output.push('\n');
        }

        output
    }

    fn format_frameworks_human(&self, summaries: &[FrameworkSummary]) -> String {
        let mut output = String::new();

        output.push_str(&format!("Supported Frameworks ({})\n", summaries.len()));
        output.push_str(RULE);
        output.push_str("\n\n");

        for summary in summaries {
            output.push_str(&format!(
                "{:<12} {:<9} {}\n",
                summary.id,
                summary.category.as_str(),
                summary.description
            ));
        }

        output
    }
}

fn confidence_bar(certainty: f64) -> String {
    let filled = ((certainty / 10.0).round() as usize).min(10);
    "\u{2588}".repeat(filled) + &"\u{2591}".repeat(10 - filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::types::Metadata;
    use crate::frameworks::FrameworkId;
    use std::sync::Arc;

    fn create_test_results() -> Vec<DetectionResult> {
        vec![
            DetectionResult {
                framework: FrameworkId::NextJs,
                certainty: 95.0,
                detected_items: vec![
                    "dependency next".to_string(),
                    "next.config.js".to_string(),
                ],
                metadata: Arc::new(Metadata::new(
                    "Next.js",
                    Category::Nodejs,
                    "Next.js React framework",
                )),
                subproject: None,
            },
            DetectionResult {
                framework: FrameworkId::Python,
                certainty: 40.0,
                detected_items: vec!["worker: requirements.txt".to_string()],
                metadata: Arc::new(Metadata::new("Python", Category::Python, "Python application")),
                subproject: Some("worker".to_string()),
            },
        ]
    }

    #[test]
    fn test_json_format() {
        let results = create_test_results();
        let formatter = OutputFormatter::new(OutputFormat::Json);
        let output = formatter
            .format_results(Path::new("/srv/app"), &results)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["root"], "/srv/app");
        assert_eq!(parsed["detections"][0]["framework"], "nextjs");
        assert_eq!(parsed["detections"][0]["certainty"], 95.0);
        assert!(parsed["detections"][0].get("subproject").is_none());
        assert_eq!(parsed["detections"][1]["subproject"], "worker");
    }

    #[test]
    fn test_yaml_format() {
        let results = create_test_results();
        let formatter = OutputFormatter::new(OutputFormat::Yaml);
        let output = formatter
            .format_results(Path::new("/srv/app"), &results)
            .unwrap();

        let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(parsed["detections"][1]["framework"].as_str(), Some("python"));
        assert_eq!(
            parsed["detections"][0]["metadata"]["category"].as_str(),
            Some("nodejs")
        );
    }

    #[test]
    fn test_human_format() {
        let results = create_test_results();
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter
            .format_results(Path::new("/srv/app"), &results)
            .unwrap();

        assert!(output.contains("Framework Detection Result"));
        assert!(output.contains("1. Next.js (nextjs) [nodejs]"));
        assert!(output.contains("95% (high)"));
        assert!(output.contains("Location:   worker/"));
        assert!(output.contains("\u{2514}\u{2500} next.config.js"));
    }

    #[test]
    fn test_human_format_empty() {
        let formatter = OutputFormatter::new(OutputFormat::Human);
        let output = formatter.format_results(Path::new("/tmp/empty"), &[]).unwrap();
        assert!(output.contains("No frameworks detected"));
    }

    #[test]
    fn test_frameworks_list() {
        let registry = FrameworkRegistry::new();

        let human = OutputFormatter::new(OutputFormat::Human)
            .format_frameworks(&registry)
            .unwrap();
        assert!(human.contains(&format!("Supported Frameworks ({})", registry.len())));
        assert!(human.contains("spring-boot"));

        let json = OutputFormatter::new(OutputFormat::Json)
            .format_frameworks(&registry)
            .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), registry.len());
    }

    #[test]
    fn test_confidence_bar() {
        assert_eq!(confidence_bar(0.0), "\u{2591}".repeat(10));
        assert_eq!(confidence_bar(100.0), "\u{2588}".repeat(10));
        assert_eq!(
            confidence_bar(40.0),
            "\u{2588}".repeat(4) + &"\u{2591}".repeat(6)
        );
    }
}
