//! Run configuration, resolved from command-line flags and the environment.

use std::path::PathBuf;

use clap::ValueEnum;

/// Modules summarized when none are configured, in render order.
pub const DEFAULT_MODULES: &[&str] = &[
    "modules/01-spring-hello-rest",
    "modules/02-spring-scheduling-tasks",
    "modules/03-quote-service",
    "modules/03-spring-consuming-rest",
    "modules/04-spring-relational-data-access",
];

/// Values accepted as "on" by boolean environment flags, compared
/// case-insensitively. Anything else is off.
pub const TRUTHY_TOKENS: [&str; 3] = ["1", "true", "yes"];

/// Badges directory, relative to the project root.
pub const DEFAULT_BADGES_DIR: &str = "ci/badges";

/// Exact match against [`TRUTHY_TOKENS`], ignoring ASCII case. Surrounding
/// whitespace is not stripped, so `" yes "` is falsy.
#[must_use]
pub fn is_truthy(value: &str) -> bool {
    TRUTHY_TOKENS
        .iter()
        .any(|token| token.eq_ignore_ascii_case(value))
}

/// `clap` value parser for boolean flags; never rejects a value.
pub fn parse_flag(value: &str) -> Result<bool, String> {
    Ok(is_truthy(value))
}

/// Output style of the summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Style {
    #[default]
    Markdown,
    Text,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Project root the module identifiers are relative to.
    pub root: PathBuf,
    pub modules: Vec<String>,
    pub badges_dir: PathBuf,
    /// File the summary is appended to; stdout when `None`.
    pub summary_file: Option<PathBuf>,
    pub update_badges: bool,
    pub style: Style,
}

impl Config {
    /// Defaults for a project rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            badges_dir: root.join(DEFAULT_BADGES_DIR),
            root,
            modules: DEFAULT_MODULES.iter().map(|m| m.to_string()).collect(),
            summary_file: None,
            update_badges: false,
            style: Style::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_tokens() {
        for value in ["1", "true", "TRUE", "True", "yes", "YES"] {
            assert!(is_truthy(value), "{value:?} should be truthy");
        }
    }

    #[test]
    fn test_falsy_tokens() {
        for value in ["", "0", "false", "no", "on", "y", "t", "2", "truee", " yes ", "true\n"] {
            assert!(!is_truthy(value), "{value:?} should be falsy");
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new("/work/repo");
        assert_eq!(config.badges_dir, PathBuf::from("/work/repo/ci/badges"));
        assert_eq!(config.modules.len(), DEFAULT_MODULES.len());
        assert_eq!(config.modules[0], "modules/01-spring-hello-rest");
        assert!(!config.update_badges);
        assert_eq!(config.style, Style::Markdown);
    }
}
