//! Subcommand handlers. Each returns the process exit code.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, error, info};

use super::commands::{DetectArgs, FrameworksArgs, TemplateArgs};
use super::output::OutputFormatter;
use crate::config::ScoutConfig;
use crate::detection::scanner::FrameworkScanner;
use crate::frameworks::{FrameworkId, FrameworkRegistry};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

fn write_output(output: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write output to {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("Failed to write to stdout")?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n").context("Failed to write to stdout")?;
            }
        }
    }
    Ok(())
}

fn target_dir(path: Option<&PathBuf>) -> PathBuf {
    path.cloned().unwrap_or_else(|| PathBuf::from("."))
}

pub async fn handle_detect(args: &DetectArgs, config: &ScoutConfig) -> i32 {
    let mut config = config.clone();
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    if let Err(e) = config.validate() {
        error!("{}", e);
        return EXIT_FAILURE;
    }
    debug!(config = ?config.to_display_map(), "Effective configuration");

    let root = target_dir(args.path.as_ref());
    let scanner = FrameworkScanner::new(Arc::new(FrameworkRegistry::new()))
        .with_config(config.to_scan_config());

    let scan_root = root.clone();
    let results = match tokio::task::spawn_blocking(move || scanner.scan_directory(&scan_root)).await
    {
        Ok(results) => results,
        Err(e) => {
            error!("Scan task failed: {}", e);
            return EXIT_FAILURE;
        }
    };

    let mut results: Vec<_> = results
        .into_iter()
        .filter(|r| r.certainty >= config.min_certainty)
        .collect();
    if let Some(top) = args.top {
        results.truncate(top);
    }

    let formatter = OutputFormatter::new(args.format.into());
    match formatter
        .format_results(&root, &results)
        .and_then(|output| write_output(&output, args.output.as_deref()))
    {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

pub fn handle_template(args: &TemplateArgs) -> i32 {
    let id = FrameworkId::parse(&args.framework);
    let dir = target_dir(args.path.as_ref());

    let scanner = FrameworkScanner::new(Arc::new(FrameworkRegistry::new()));
    let template = scanner.resolve_template(&id, &dir);

    match write_output(&template, args.output.as_deref()) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

pub fn handle_frameworks(args: &FrameworksArgs) -> i32 {
    let registry = FrameworkRegistry::new();
    let formatter = OutputFormatter::new(args.format.into());

    match formatter
        .format_frameworks(&registry)
        .and_then(|output| write_output(&output, None))
    {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}
