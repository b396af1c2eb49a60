//! Metric extraction: locate a module's reports and reduce each one to a
//! record. Every loader answers `None` for "no data", whether the report is
//! missing, unreadable or malformed; a broken report in one module must not
//! hide the metrics of the others.

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::locate::ModuleReports;
use crate::model::{CoverageRecord, ModuleMetrics, MutationRecord, TestRunRecord};
use crate::parsers::jacoco::JacocoParser;
use crate::parsers::pitest::PitestParser;
use crate::parsers::spotbugs::SpotbugsParser;
use crate::parsers::surefire::SurefireParser;
use crate::parsers::ReportParser;

/// Line coverage from the module's JaCoCo report.
pub fn load_coverage(reports: &ModuleReports) -> Option<CoverageRecord> {
    let path = reports.coverage()?;
    swallow(&path, JacocoParser.parse_file(&path)).flatten()
}

/// Test counts summed over all of the module's suite reports.
///
/// Suites that fail to parse are skipped. A module whose suites add up to
/// zero tests has no test data.
pub fn load_tests(reports: &ModuleReports) -> Option<TestRunRecord> {
    let mut total = TestRunRecord::default();
    for path in reports.suite_reports()? {
        if let Some(suite) = swallow(&path, SurefireParser.parse_file(&path)) {
            total.add(&suite);
        }
    }
    (total.total > 0).then_some(total)
}

/// Mutation score from the module's PIT report.
pub fn load_mutation(reports: &ModuleReports) -> Option<MutationRecord> {
    let path = reports.mutation_report()?;
    swallow(&path, PitestParser.parse_file(&path))
}

/// Issue count from the first SpotBugs report that parses.
pub fn load_issues(reports: &ModuleReports) -> Option<u64> {
    reports
        .static_analysis_reports()
        .into_iter()
        .find_map(|path| swallow(&path, SpotbugsParser.parse_file(&path)))
}

/// Extract every metric of one module.
pub fn collect_module(root: &Path, module: &str) -> ModuleMetrics {
    let reports = ModuleReports::new(root, module);
    debug!(module, dir = %reports.dir().display(), "collecting reports");
    ModuleMetrics {
        module: module.to_string(),
        tests: load_tests(&reports),
        coverage: load_coverage(&reports),
        mutation: load_mutation(&reports),
        issues: load_issues(&reports),
    }
}

/// Extract the metrics of every module, keeping the configured order.
pub fn collect_all<S: AsRef<str>>(root: &Path, modules: &[S]) -> Vec<ModuleMetrics> {
    modules
        .iter()
        .map(|module| collect_module(root, module.as_ref()))
        .collect()
}

fn swallow<T>(path: &Path, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unreadable report");
            None
        }
    }
}
