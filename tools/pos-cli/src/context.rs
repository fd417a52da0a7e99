//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pos_client::HttpBackend;

use crate::config::{CliConfig, Overrides};
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["pos.toml", ".pos.toml", "pos.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Effective configuration (file plus overrides).
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, overrides: Overrides, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (CliConfig::load(&path)?, Some(path))
        } else {
            // Try to find config in current directory or parent directories
            match find_config_file(&cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config: config.with_overrides(overrides),
            config_path,
            output,
            cwd,
        })
    }

    /// Build the HTTP backend from the effective config.
    pub fn backend(&self) -> Result<HttpBackend> {
        HttpBackend::new(&self.config.api.url, self.config.api.timeout())
            .with_context(|| format!("Invalid backend URL: {}", self.config.api.url))
    }
}

/// Find a config file in the directory tree starting at `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("store").join("till");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("pos.toml"), "").unwrap();

        let found = find_config_file(&nested).unwrap();
        assert_eq!(found, dir.path().join("pos.toml"));
    }

    #[test]
    fn test_nearest_config_wins() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("till");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("pos.toml"), "").unwrap();
        std::fs::write(nested.join(".pos.toml"), "").unwrap();

        assert_eq!(find_config_file(&nested).unwrap(), nested.join(".pos.toml"));
    }

    #[test]
    fn test_explicit_config_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[api]\nurl = \"http://file.local\"\ntimeout_secs = 3\n").unwrap();

        let ctx = Context::load(
            path.to_str(),
            Overrides {
                api_url: Some("http://flag.local".to_string()),
                timeout_secs: None,
            },
            Output::new(false, true),
        )
        .unwrap();

        assert_eq!(ctx.config.api.url, "http://flag.local");
        assert_eq!(ctx.config.api.timeout_secs, 3);
        assert_eq!(ctx.config_path, Some(path));
        assert!(ctx.backend().is_ok());
    }
}
