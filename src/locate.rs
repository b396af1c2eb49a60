//! Location of the per-module report artifacts produced by a Maven build.
//!
//! Layout, relative to `<root>/<module>`:
//!   target/site/jacoco/jacoco.xml          coverage
//!   target/surefire-reports/TEST-*.xml     test results, one file per suite
//!   target/pit-reports/mutations.xml       mutation report, or one level
//!   target/pit-reports/*/mutations.xml     deeper with timestamped reports
//!   target/spotbugsXml.xml                 static analysis, or the older
//!   target/spotbugs.xml                    file name
//!
//! Nothing here reads report contents; a missing artifact is simply `None`.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use globset::{Glob, GlobMatcher};

const JACOCO_REPORT: &str = "target/site/jacoco/jacoco.xml";
const SUREFIRE_DIR: &str = "target/surefire-reports";
const PIT_DIR: &str = "target/pit-reports";
const PIT_REPORT: &str = "mutations.xml";
const SPOTBUGS_REPORTS: [&str; 2] = ["target/spotbugsXml.xml", "target/spotbugs.xml"];

/// Suite report file names, e.g. `TEST-com.example.FooTest.xml`.
static SUITE_REPORT: LazyLock<GlobMatcher> =
    LazyLock::new(|| Glob::new("TEST-*.xml").unwrap().compile_matcher());

/// Report locations of one module.
#[derive(Debug, Clone)]
pub struct ModuleReports {
    dir: PathBuf,
}

impl ModuleReports {
    pub fn new(root: &Path, module: &str) -> Self {
        Self {
            dir: root.join(module),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The JaCoCo XML report, if present.
    pub fn coverage(&self) -> Option<PathBuf> {
        existing_file(self.dir.join(JACOCO_REPORT))
    }

    /// Every `TEST-*.xml` suite report, in directory enumeration order.
    ///
    /// Returns `None` when the surefire directory is missing or unreadable,
    /// and an empty list when it holds no suite reports.
    pub fn suite_reports(&self) -> Option<Vec<PathBuf>> {
        let dir = self.dir.join(SUREFIRE_DIR);
        let entries = std::fs::read_dir(&dir).ok()?;
        let reports = entries
            .flatten()
            .filter(|entry| SUITE_REPORT.is_match(entry.file_name()))
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect();
        Some(reports)
    }

    /// The PIT `mutations.xml`.
    ///
    /// A report directly under `pit-reports/` wins. Otherwise PIT wrote
    /// timestamped subdirectories (`yyyyMMddHHmm`) and the greatest name,
    /// the most recent run, is chosen.
    pub fn mutation_report(&self) -> Option<PathBuf> {
        let pit_dir = self.dir.join(PIT_DIR);
        if let Some(direct) = existing_file(pit_dir.join(PIT_REPORT)) {
            return Some(direct);
        }
        std::fs::read_dir(&pit_dir)
            .ok()?
            .flatten()
            .map(|entry| entry.path().join(PIT_REPORT))
            .filter(|candidate| candidate.is_file())
            .max()
    }

    /// SpotBugs reports that exist, in lookup order.
    pub fn static_analysis_reports(&self) -> Vec<PathBuf> {
        SPOTBUGS_REPORTS
            .iter()
            .filter_map(|name| existing_file(self.dir.join(name)))
            .collect()
    }
}

fn existing_file(path: PathBuf) -> Option<PathBuf> {
    path.is_file().then_some(path)
}
