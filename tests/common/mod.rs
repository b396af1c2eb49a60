use std::path::{Path, PathBuf};

use qasum::config::Config;
use tempfile::TempDir;

/// Create a fresh project root, returning a config rooted there and the dir
/// handle. The caller must hold onto `TempDir` to keep the directory alive.
pub fn setup_project(modules: &[&str]) -> (Config, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        modules: modules.iter().map(|m| m.to_string()).collect(),
        ..Config::new(dir.path())
    };
    (config, dir)
}

/// Write a report file below `root`, creating parent directories.
pub fn write_report(root: &Path, rel: &str, content: &[u8]) -> PathBuf {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, content).unwrap();
    path
}

pub fn jacoco(covered: u64, missed: u64) -> Vec<u8> {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><report name="r"><counter type="INSTRUCTION" missed="0" covered="1"/><counter type="LINE" missed="{missed}" covered="{covered}"/></report>"#
    )
    .into_bytes()
}
