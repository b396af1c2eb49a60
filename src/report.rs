//! Output formatting for the QA metrics summary.

use std::fmt::Write;

use crate::aggregate::AggregateTotals;
use crate::model::ModuleMetrics;

/// Shown in place of a metric that has no report.
pub const PLACEHOLDER: &str = "—";

/// Number of glyphs in a progress bar.
pub const BAR_WIDTH: usize = 20;

const BAR_FILLED: char = '█';
const BAR_EMPTY: char = '░';

/// Per-module metrics and their totals, ready to be formatted.
pub struct Summary<'a> {
    /// Modules in configured order.
    pub modules: &'a [ModuleMetrics],
    pub totals: AggregateTotals,
}

impl<'a> Summary<'a> {
    pub fn new(modules: &'a [ModuleMetrics]) -> Self {
        Self {
            modules,
            totals: AggregateTotals::from_modules(modules),
        }
    }

    /// Format using a specific formatter.
    #[must_use]
    pub fn format(&self, formatter: &dyn SummaryFormatter) -> String {
        formatter.format(self)
    }
}

/// Trait for formatting summaries.
pub trait SummaryFormatter {
    /// Format the summary to a string.
    fn format(&self, summary: &Summary<'_>) -> String;
}

/// Text progress bar, `round(pct / 100 * width)` glyphs filled.
#[must_use]
pub fn progress_bar(pct: f64, width: usize) -> String {
    let filled = ((pct / 100.0) * width as f64).round().clamp(0.0, width as f64) as usize;
    let mut bar = String::with_capacity(width * BAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat(BAR_FILLED).take(filled));
    bar.extend(std::iter::repeat(BAR_EMPTY).take(width - filled));
    bar
}

/// The cells of one module row: tests, coverage, mutation, issues.
fn row_cells(m: &ModuleMetrics) -> [String; 4] {
    [
        m.tests
            .map_or_else(|| PLACEHOLDER.to_string(), |t| t.total.to_string()),
        percentage_cell(m.coverage.map(|c| c.percentage())),
        percentage_cell(m.mutation.map(|mu| mu.percentage())),
        m.issues
            .map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string()),
    ]
}

fn percentage_cell(pct: Option<f64>) -> String {
    match pct {
        Some(pct) => format!("{pct:.1}%"),
        None => PLACEHOLDER.to_string(),
    }
}

/// `N tests`, with failing and skipped counts when there are any.
fn tests_phrase(totals: &AggregateTotals) -> String {
    let tests = &totals.tests;
    let mut phrase = format!("{} tests", tests.total);
    if tests.failing() > 0 || tests.skipped > 0 {
        write!(phrase, " ({} failing, {} skipped)", tests.failing(), tests.skipped).unwrap();
    }
    phrase
}

fn totals_phrase(totals: &AggregateTotals) -> String {
    format!(
        "{}, {:.1}% line coverage, {:.1}% mutation score, {} SpotBugs issues",
        tests_phrase(totals),
        totals.coverage_percentage(),
        totals.mutation_percentage(),
        totals.issues,
    )
}

/// GitHub-flavored markdown, for the Actions step summary.
pub struct MarkdownFormatter;

impl SummaryFormatter for MarkdownFormatter {
    fn format(&self, summary: &Summary<'_>) -> String {
        let mut md = String::new();

        md.push_str("## QA Metrics Summary\n\n");
        md.push_str("| Module | Tests | Coverage | Mutation | SpotBugs |\n");
        md.push_str("|--------|-------|----------|----------|----------|\n");

        for m in summary.modules {
            let [tests, coverage, mutation, issues] = row_cells(m);
            let module = &m.module;
            writeln!(
                md,
                "| {module} | {tests} | {coverage} | {mutation} | {issues} |"
            )
            .unwrap();
        }

        let totals = &summary.totals;
        let coverage = totals.coverage_percentage();
        let mutation = totals.mutation_percentage();

        writeln!(md, "\n**Totals:** {}\n", totals_phrase(totals)).unwrap();
        writeln!(
            md,
            "Coverage: `{}` {coverage:.1}%",
            progress_bar(coverage, BAR_WIDTH)
        )
        .unwrap();
        writeln!(
            md,
            "Mutation: `{}` {mutation:.1}%",
            progress_bar(mutation, BAR_WIDTH)
        )
        .unwrap();

        md
    }
}

/// Plain text with aligned columns, for terminals.
pub struct TextFormatter;

impl SummaryFormatter for TextFormatter {
    fn format(&self, summary: &Summary<'_>) -> String {
        let mut out = String::new();

        let width = summary
            .modules
            .iter()
            .map(|m| m.module.chars().count())
            .max()
            .unwrap_or(0)
            .max("MODULE".len());

        out.push_str("QA Metrics Summary\n\n");
        writeln!(
            out,
            "{:<width$} {:>8} {:>9} {:>9} {:>9}",
            "MODULE", "TESTS", "COVERAGE", "MUTATION", "SPOTBUGS"
        )
        .unwrap();
        writeln!(out, "{}", "-".repeat(width + 39)).unwrap();

        for m in summary.modules {
            let [tests, coverage, mutation, issues] = row_cells(m);
            writeln!(
                out,
                "{:<width$} {tests:>8} {coverage:>9} {mutation:>9} {issues:>9}",
                m.module
            )
            .unwrap();
        }

        let totals = &summary.totals;
        let coverage = totals.coverage_percentage();
        let mutation = totals.mutation_percentage();

        writeln!(out, "\nTotals: {}\n", totals_phrase(totals)).unwrap();
        writeln!(out, "Coverage: {} {coverage:.1}%", progress_bar(coverage, BAR_WIDTH)).unwrap();
        writeln!(out, "Mutation: {} {mutation:.1}%", progress_bar(mutation, BAR_WIDTH)).unwrap();

        out
    }
}
