//! Menu configuration and loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level roster configuration.
///
/// These are input policies of the console menu only. The core accepts any
/// non-negative grade and any non-blank name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Lowest grade the menu accepts (inclusive).
    #[serde(default = "default_min_grade")]
    pub min_grade: f64,
    /// Highest grade the menu accepts (inclusive).
    #[serde(default = "default_max_grade")]
    pub max_grade: f64,
    /// Restrict names to letters and spaces.
    #[serde(default = "default_true")]
    pub letters_only_names: bool,
}

fn default_min_grade() -> f64 {
    0.0
}
fn default_max_grade() -> f64 {
    100.0
}
fn default_true() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            min_grade: default_min_grade(),
            max_grade: default_max_grade(),
            letters_only_names: true,
        }
    }
}

impl RosterConfig {
    /// Check that the grade bounds describe a usable range.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            self.min_grade.is_finite() && self.max_grade.is_finite(),
            "grade bounds must be finite numbers"
        );
        anyhow::ensure!(self.min_grade >= 0.0, "min_grade must not be negative");
        anyhow::ensure!(
            self.min_grade <= self.max_grade,
            "min_grade ({}) must not exceed max_grade ({})",
            self.min_grade,
            self.max_grade
        );
        Ok(())
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `path`, if given (it must exist)
/// 2. `roster.toml` in the current directory
/// 3. `~/.config/roster/config.toml`
///
/// Environment variable overrides: `ROSTER_MIN_GRADE`, `ROSTER_MAX_GRADE`.
pub fn load_config_from(path: Option<&Path>) -> Result<RosterConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("roster.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<RosterConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => RosterConfig::default(),
    };

    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply `ROSTER_*` overrides using `lookup` to read variables.
fn apply_env_overrides(
    mut config: RosterConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<RosterConfig> {
    if let Some(raw) = lookup("ROSTER_MIN_GRADE") {
        config.min_grade = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid ROSTER_MIN_GRADE: '{raw}'"))?;
    }
    if let Some(raw) = lookup("ROSTER_MAX_GRADE") {
        config.max_grade = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid ROSTER_MAX_GRADE: '{raw}'"))?;
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("roster"))
}
