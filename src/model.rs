//! Uniform in-memory representation of the QA metrics of one build module,
//! independent of the report format each value was extracted from. Every
//! metric is optional: `None` means "no report found", which is never the
//! same thing as a zero score.

/// Compute a percentage rounded to one decimal place, returning 0.0 when the
/// whole is zero.
///
/// Rounding is decided on the exact value of the ratio, with ties going to
/// the even digit, so 6.25 becomes 6.2.
#[must_use]
pub fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    let pct = part as f64 / whole as f64 * 100.0;
    format!("{pct:.1}").parse().unwrap_or(pct)
}

/// Line coverage of a module, taken from a JaCoCo `LINE` counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverageRecord {
    pub covered_lines: u64,
    pub missed_lines: u64,
}

impl CoverageRecord {
    #[must_use]
    pub fn total_lines(&self) -> u64 {
        self.covered_lines.saturating_add(self.missed_lines)
    }

    #[must_use]
    pub fn percentage(&self) -> f64 {
        percent(self.covered_lines, self.total_lines())
    }
}

/// Test counts summed over every suite report of a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestRunRecord {
    pub total: u64,
    pub failures: u64,
    pub errors: u64,
    pub skipped: u64,
}

impl TestRunRecord {
    /// Fold another suite's counts into this one. Counts saturate at
    /// `u64::MAX`.
    pub fn add(&mut self, other: &TestRunRecord) {
        self.total = self.total.saturating_add(other.total);
        self.failures = self.failures.saturating_add(other.failures);
        self.errors = self.errors.saturating_add(other.errors);
        self.skipped = self.skipped.saturating_add(other.skipped);
    }

    /// Tests that did not pass: failures plus errors.
    #[must_use]
    pub fn failing(&self) -> u64 {
        self.failures.saturating_add(self.errors)
    }
}

/// Mutation-testing outcome of a module.
///
/// A report with zero mutants is a present record with a 0.0% score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationRecord {
    pub total_mutants: u64,
    pub killed_mutants: u64,
}

impl MutationRecord {
    #[must_use]
    pub fn percentage(&self) -> f64 {
        percent(self.killed_mutants, self.total_mutants)
    }
}

/// Everything extracted for a single module.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleMetrics {
    pub module: String,
    pub tests: Option<TestRunRecord>,
    pub coverage: Option<CoverageRecord>,
    pub mutation: Option<MutationRecord>,
    /// Static-analysis issue count.
    pub issues: Option<u64>,
}

impl ModuleMetrics {
    /// A module for which no artifact was found.
    pub fn empty(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            tests: None,
            coverage: None,
            mutation: None,
            issues: None,
        }
    }
}
