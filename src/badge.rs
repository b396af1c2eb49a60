//! Shields.io endpoint badges.
//!
//! Each badge is a small JSON file that `https://img.shields.io/endpoint`
//! renders:
//!
//!   {
//!     "schemaVersion": 1,
//!     "label": "coverage",
//!     "message": "90.0%",
//!     "color": "16A34A"
//!   }
//!
//! The aggregate set lives directly in the badges directory; each module gets
//! the same three files under `<badges dir>/<module>/`.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::aggregate::{AggregateTotals, IssueState, Tier, NEUTRAL};
use crate::error::Result;
use crate::model::ModuleMetrics;

const SCHEMA_VERSION: u8 = 1;

/// Message of a module badge whose metric has no report.
pub const NOT_AVAILABLE: &str = "n/a";

/// The metrics a badge can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Coverage,
    Mutation,
    Issues,
}

impl BadgeKind {
    pub const ALL: [BadgeKind; 3] = [BadgeKind::Coverage, BadgeKind::Mutation, BadgeKind::Issues];

    pub fn file_name(&self) -> &'static str {
        match self {
            BadgeKind::Coverage => "jacoco.json",
            BadgeKind::Mutation => "mutation.json",
            BadgeKind::Issues => "spotbugs.json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BadgeKind::Coverage => "coverage",
            BadgeKind::Mutation => "mutation",
            BadgeKind::Issues => "spotbugs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub schema_version: u8,
    pub label: String,
    pub message: String,
    pub color: String,
}

impl Badge {
    fn new(kind: BadgeKind, message: String, color: &str) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            label: kind.label().to_string(),
            message,
            color: color.to_string(),
        }
    }

    /// Badge for a percentage metric, colored by its tier.
    pub fn percentage(kind: BadgeKind, pct: f64) -> Self {
        Self::new(kind, format!("{pct:.1}%"), Tier::from_percentage(pct).color())
    }

    /// Badge for a static-analysis issue count.
    pub fn issues(count: u64) -> Self {
        let state = IssueState::from_count(count);
        Self::new(BadgeKind::Issues, state.message(), state.color())
    }

    /// Neutral badge for a metric without data.
    pub fn not_available(kind: BadgeKind) -> Self {
        Self::new(kind, NOT_AVAILABLE.to_string(), NEUTRAL)
    }

    /// Pretty-printed JSON, two-space indented, without a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The three aggregate badges, in file order.
pub fn aggregate_badges(totals: &AggregateTotals) -> Vec<(BadgeKind, Badge)> {
    vec![
        (
            BadgeKind::Coverage,
            Badge::percentage(BadgeKind::Coverage, totals.coverage_percentage()),
        ),
        (
            BadgeKind::Mutation,
            Badge::percentage(BadgeKind::Mutation, totals.mutation_percentage()),
        ),
        (BadgeKind::Issues, Badge::issues(totals.issues)),
    ]
}

/// The three badges of one module; absent metrics get a neutral `n/a`.
pub fn module_badges(metrics: &ModuleMetrics) -> Vec<(BadgeKind, Badge)> {
    BadgeKind::ALL
        .into_iter()
        .map(|kind| {
            let badge = match kind {
                BadgeKind::Coverage => metrics
                    .coverage
                    .map(|c| Badge::percentage(kind, c.percentage())),
                BadgeKind::Mutation => metrics
                    .mutation
                    .map(|m| Badge::percentage(kind, m.percentage())),
                BadgeKind::Issues => metrics.issues.map(Badge::issues),
            };
            (kind, badge.unwrap_or_else(|| Badge::not_available(kind)))
        })
        .collect()
}

/// Write badges into `dir`, creating it if needed and overwriting any
/// previous files. Returns the written paths.
pub fn write_badges(dir: &Path, badges: &[(BadgeKind, Badge)]) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(badges.len());
    for (kind, badge) in badges {
        let path = dir.join(kind.file_name());
        std::fs::write(&path, badge.to_json()?)?;
        written.push(path);
    }
    Ok(written)
}
