//! Optional wizard configuration (TOML).
//!
//! The file location comes from `RALPH_SESSIONS_CONFIG`. Without it the
//! built-in defaults apply, so a plain `ralph-sessions` run needs no setup.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "RALPH_SESSIONS_CONFIG";

pub const DEFAULT_SCRIPT_URL: &str =
    "https://raw.githubusercontent.com/your-repo/ralph-sessions/main/ralph-sessions.sh";

/// Wizard configuration. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SetupConfig {
    /// Prompt pre-fill when detection finds nothing; also written to
    /// `AGENTS.md` when the resolved command is empty.
    pub fallback_test_command: String,

    /// Where the placeholder `ralph-sessions.sh` tells users to download
    /// the full script from.
    pub script_url: String,
}

impl Default for SetupConfig {
    fn default() -> Self {
        Self {
            fallback_test_command: "npm test".to_string(),
            script_url: DEFAULT_SCRIPT_URL.to_string(),
        }
    }
}

impl SetupConfig {
    pub fn validate(&self) -> Result<()> {
        if self.fallback_test_command.trim().is_empty() {
            return Err(anyhow!("fallback_test_command must not be empty"));
        }
        if self.script_url.trim().is_empty() {
            return Err(anyhow!("script_url must not be empty"));
        }
        Ok(())
    }
}

/// Config path from `RALPH_SESSIONS_CONFIG`, if set and non-empty.
pub fn config_path_from_env() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SetupConfig::default()`.
pub fn load_config(path: &Path) -> Result<SetupConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file missing, using defaults");
        return Ok(SetupConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SetupConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Resolve the effective config: the env-named file, or defaults.
pub fn resolve_config() -> Result<SetupConfig> {
    match config_path_from_env() {
        Some(path) => load_config(&path),
        None => Ok(SetupConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SetupConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "fallback_test_command = \"just test\"\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.fallback_test_command, "just test");
        assert_eq!(cfg.script_url, DEFAULT_SCRIPT_URL);
    }

    #[test]
    fn empty_values_are_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "script_url = \"  \"\n").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("script_url must not be empty"));
    }

    #[test]
    fn malformed_toml_names_the_file() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "fallback_test_command = ").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }
}
