use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qasum::cli;
use qasum::config::{self, Config, Style};

/// qasum: QA metrics summary and Shields.io badges for multi-module Maven builds.
#[derive(Parser)]
#[command(name = "qasum", version, about)]
struct Cli {
    /// Project root containing the modules.
    #[arg(long, env = "QASUM_ROOT", default_value = ".")]
    root: PathBuf,

    /// Module directory, relative to the root. Repeat or comma-separate to
    /// list several; defaults to the built-in module list.
    #[arg(long = "module", env = "QASUM_MODULES", value_delimiter = ',')]
    modules: Vec<String>,

    /// Badges directory (default: <root>/ci/badges).
    #[arg(long, env = "QASUM_BADGES_DIR")]
    badges_dir: Option<PathBuf>,

    /// Append the summary to this file instead of printing it.
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    summary_file: Option<PathBuf>,

    /// Write badge JSON files (accepts 1, true or yes).
    #[arg(
        long,
        env = "UPDATE_BADGES",
        action = ArgAction::Set,
        value_parser = config::parse_flag,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true"
    )]
    update_badges: bool,

    /// Summary output style.
    #[arg(long, env = "QASUM_FORMAT", value_enum, default_value_t = Style::Markdown)]
    format: Style,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.root);
        if !self.modules.is_empty() {
            config.modules = self.modules;
        }
        if let Some(dir) = self.badges_dir {
            config.badges_dir = dir;
        }
        config.summary_file = self.summary_file;
        config.update_badges = self.update_badges;
        config.style = self.format;
        config
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env("QASUM_LOG").unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_config();
    cli::run(&config, &mut std::io::stdout().lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("qasum").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_update_badges_flag_and_env() {
        std::env::remove_var("UPDATE_BADGES");
        assert!(!parse(&[]).update_badges);
        assert!(parse(&["--update-badges"]).update_badges);
        assert!(parse(&["--update-badges=YES"]).update_badges);
        assert!(parse(&["--update-badges", "1"]).update_badges);
        assert!(!parse(&["--update-badges=no"]).update_badges);
        assert!(!parse(&["--update-badges="]).update_badges);

        let cases = [
            ("", false),
            ("TRUE", true),
            ("yes", true),
            ("on", false),
            ("0", false),
        ];
        for (value, expected) in cases {
            std::env::set_var("UPDATE_BADGES", value);
            assert_eq!(parse(&[]).update_badges, expected, "UPDATE_BADGES={value:?}");
        }
        std::env::set_var("UPDATE_BADGES", "false");
        assert!(parse(&["--update-badges"]).update_badges);
        std::env::remove_var("UPDATE_BADGES");
    }

    #[test]
    fn test_into_config() {
        let config = parse(&[
            "--root",
            "/work/repo",
            "--module",
            "a,b",
            "--module",
            "c",
            "--format",
            "text",
            "--update-badges=true",
        ])
        .into_config();
        assert_eq!(config.root, PathBuf::from("/work/repo"));
        assert_eq!(config.modules, ["a", "b", "c"]);
        assert_eq!(config.style, Style::Text);
        assert!(config.update_badges);

        let config = parse(&["--root", "/r", "--badges-dir", "/out", "--update-badges=0"]).into_config();
        assert_eq!(config.badges_dir, PathBuf::from("/out"));
        assert!(!config.update_badges);
    }
}
