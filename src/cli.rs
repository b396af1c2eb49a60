//! Command handlers for the qasum CLI.
//!
//! The pipeline runs against a resolved [`Config`] and writes its summary to
//! a caller-supplied writer when no summary file is configured, so every step
//! can be exercised from tests without touching the process environment.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::aggregate::Tier;
use crate::badge::{aggregate_badges, module_badges, write_badges};
use crate::config::{Config, Style};
use crate::ingest;
use crate::model::ModuleMetrics;
use crate::report::{MarkdownFormatter, Summary, SummaryFormatter, TextFormatter};

/// Render the summary of `modules` in the requested style.
pub fn render_summary(modules: &[ModuleMetrics], style: Style) -> String {
    let formatter: &dyn SummaryFormatter = match style {
        Style::Markdown => &MarkdownFormatter,
        Style::Text => &TextFormatter,
    };
    Summary::new(modules).format(formatter)
}

/// Append the summary to `path`, creating the file if it does not exist.
pub fn append_summary(path: &Path, summary: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open summary file {}", path.display()))?;
    file.write_all(summary.as_bytes())
        .with_context(|| format!("Failed to append to summary file {}", path.display()))?;
    Ok(())
}

/// Write the aggregate badges and one badge set per module.
/// Returns every written path.
pub fn write_all_badges(badges_dir: &Path, modules: &[ModuleMetrics]) -> Result<Vec<PathBuf>> {
    let summary = Summary::new(modules);
    let mut written = write_badges(badges_dir, &aggregate_badges(&summary.totals))
        .with_context(|| format!("Failed to write badges to {}", badges_dir.display()))?;
    info!(
        dir = %badges_dir.display(),
        coverage = %Tier::from_percentage(summary.totals.coverage_percentage()),
        mutation = %Tier::from_percentage(summary.totals.mutation_percentage()),
        "updated aggregate badges"
    );

    for m in modules {
        let dir = badges_dir.join(&m.module);
        let paths = write_badges(&dir, &module_badges(m))
            .with_context(|| format!("Failed to write badges to {}", dir.display()))?;
        written.extend(paths);
    }
    info!(modules = modules.len(), "updated per-module badges");

    Ok(written)
}

/// Run the whole pipeline: extract, aggregate, render, then write.
///
/// The summary goes to the configured summary file, or to `stdout` when
/// there is none. Unreadable reports never fail the run; only output
/// failures do.
pub fn run(config: &Config, stdout: &mut dyn Write) -> Result<Vec<ModuleMetrics>> {
    let modules = ingest::collect_all(&config.root, &config.modules);
    let summary = render_summary(&modules, config.style);

    match &config.summary_file {
        Some(path) => {
            append_summary(path, &summary)?;
            info!(path = %path.display(), "appended metrics to summary file");
        }
        None => {
            stdout
                .write_all(summary.as_bytes())
                .context("Failed to write summary")?;
        }
    }

    if config.update_badges {
        write_all_badges(&config.badges_dir, &modules)?;
    }

    Ok(modules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_summary_styles() {
        let modules = vec![ModuleMetrics::empty("m")];
        assert!(render_summary(&modules, Style::Markdown).contains("| m | — | — | — | — |"));
        assert!(render_summary(&modules, Style::Text).starts_with("QA Metrics Summary\n"));
    }

    #[test]
    fn test_append_summary_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("step_summary.md");
        std::fs::write(&path, "# Build\n").unwrap();

        append_summary(&path, "first\n").unwrap();
        append_summary(&path, "second\n").unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Build\nfirst\nsecond\n"
        );
    }

    #[test]
    fn test_run_without_badges_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            modules: vec!["a".to_string()],
            ..Config::new(dir.path())
        };
        let mut out: Vec<u8> = Vec::new();
        run(&config, &mut out).unwrap();

        assert!(String::from_utf8(out).unwrap().contains("| a |"));
        assert!(!config.badges_dir.exists());
    }
}
