//! Folding per-module metrics into totals, and classifying scores.

use crate::model::{percent, ModuleMetrics, TestRunRecord};

/// Color of the "excellent" tier and of a clean static-analysis run.
pub const GREEN: &str = "16A34A";
pub const AMBER: &str = "F59E0B";
pub const ORANGE: &str = "EA580C";
/// Color of the "poor" tier and of any nonzero issue count.
pub const RED: &str = "DC2626";
/// Color used when a metric has no data.
pub const NEUTRAL: &str = "9CA3AF";

/// Severity tier of a percentage. Lower edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Tier {
    #[must_use]
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= 90.0 {
            Tier::Excellent
        } else if pct >= 75.0 {
            Tier::Good
        } else if pct >= 60.0 {
            Tier::Fair
        } else {
            Tier::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Fair => "fair",
            Tier::Poor => "poor",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Tier::Excellent => GREEN,
            Tier::Good => AMBER,
            Tier::Fair => ORANGE,
            Tier::Poor => RED,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a static-analysis issue count. Any issue at all is
/// poor; there is no grading by magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    Clean,
    Issues(u64),
}

impl IssueState {
    #[must_use]
    pub fn from_count(count: u64) -> Self {
        if count == 0 {
            IssueState::Clean
        } else {
            IssueState::Issues(count)
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            IssueState::Clean => GREEN,
            IssueState::Issues(_) => Tier::Poor.color(),
        }
    }

    /// Short badge message: `clean` or `N issues`.
    pub fn message(&self) -> String {
        match self {
            IssueState::Clean => "clean".to_string(),
            IssueState::Issues(n) => format!("{n} issues"),
        }
    }
}

/// Totals across all modules.
///
/// Missing metrics contribute nothing. The two percentages are derived from
/// the summed counts, so a module with many lines weighs more than a small
/// one. Sums saturate at `u64::MAX`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateTotals {
    pub tests: TestRunRecord,
    pub covered_lines: u64,
    pub total_lines: u64,
    pub killed_mutants: u64,
    pub total_mutants: u64,
    pub issues: u64,
}

impl AggregateTotals {
    pub fn from_modules(modules: &[ModuleMetrics]) -> Self {
        let mut totals = Self::default();
        for m in modules {
            if let Some(tests) = &m.tests {
                totals.tests.add(tests);
            }
            if let Some(cov) = &m.coverage {
                totals.covered_lines = totals.covered_lines.saturating_add(cov.covered_lines);
                totals.total_lines = totals.total_lines.saturating_add(cov.total_lines());
            }
            if let Some(mutation) = &m.mutation {
                totals.killed_mutants = totals.killed_mutants.saturating_add(mutation.killed_mutants);
                totals.total_mutants = totals.total_mutants.saturating_add(mutation.total_mutants);
            }
            totals.issues = totals.issues.saturating_add(m.issues.unwrap_or(0));
        }
        totals
    }

    #[must_use]
    pub fn coverage_percentage(&self) -> f64 {
        percent(self.covered_lines, self.total_lines)
    }

    #[must_use]
    pub fn mutation_percentage(&self) -> f64 {
        percent(self.killed_mutants, self.total_mutants)
    }

    pub fn issue_state(&self) -> IssueState {
        IssueState::from_count(self.issues)
    }
}
