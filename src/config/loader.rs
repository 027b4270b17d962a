//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.adjuster.toml` in the working directory
//! 4. `~/.config/adjuster/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::adjust::Policy;
use crate::constants::{self, DEFAULT_THRESHOLD};
use crate::env::Env;
use crate::models::{OutputFormat, OverflowMode};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub adjust: AdjustConfig,
    pub output: OutputConfig,
}

/// Threshold and arithmetic settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustConfig {
    pub threshold: i64,
    pub overflow: OverflowMode,
}

impl Default for AdjustConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            overflow: OverflowMode::default(),
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// One config file as written: only the keys it sets are `Some`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    adjust: AdjustLayer,
    output: OutputLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct AdjustLayer {
    threshold: Option<i64>,
    overflow: Option<OverflowMode>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputLayer {
    format: Option<OutputFormat>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.adjuster.toml` in `local_dir`, then
    /// applies environment variable overrides.
    pub fn load(local_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        let local = local_dir.map(|d| d.join(constants::CONFIG_FILENAME));
        Self::load_from(global.as_deref(), local.as_deref(), env)
    }

    /// Load from explicit global and local file paths. Missing files are skipped.
    pub fn load_from(
        global: Option<&Path>,
        local: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                let layer = Self::load_file(path)?;
                tracing::debug!(path = %path.display(), "loaded config layer");
                config.merge(layer);
            }
        }

        config.apply_env_vars(env);
        Ok(config)
    }

    /// Defaults plus environment overrides, no files.
    pub fn from_env(env: &Env) -> Self {
        let mut config = Config::default();
        config.apply_env_vars(env);
        config
    }

    /// Load a config layer from a specific file.
    fn load_file(path: &Path) -> Result<ConfigLayer, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join("config.toml"))
    }

    /// Merge a file layer into this config. Every key the layer sets wins,
    /// including keys set to their default value.
    fn merge(&mut self, layer: ConfigLayer) {
        if let Some(threshold) = layer.adjust.threshold {
            self.adjust.threshold = threshold;
        }
        if let Some(overflow) = layer.adjust.overflow {
            self.adjust.overflow = overflow;
        }
        if let Some(format) = layer.output.format {
            self.output.format = format;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(threshold) = env.parse::<i64>(constants::ENV_THRESHOLD) {
            self.adjust.threshold = threshold;
        }
        if let Some(overflow) = env.parse::<OverflowMode>(constants::ENV_OVERFLOW) {
            self.adjust.overflow = overflow;
        }
        if let Some(format) = env.parse::<OutputFormat>(constants::ENV_FORMAT) {
            self.output.format = format;
        }
    }

    /// The arithmetic policy this config describes.
    pub fn policy(&self) -> Policy {
        Policy {
            threshold: self.adjust.threshold,
            overflow: self.adjust.overflow,
        }
    }

    /// Render as TOML, in the same shape the loader accepts.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn no_env() -> Env {
        Env::mock(Vec::<(&str, &str)>::new())
    }

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.adjust.threshold, 5);
        assert_eq!(config.adjust.overflow, OverflowMode::Wrap);
        assert_eq!(config.output.format, OutputFormat::Plain);
        assert_eq!(config.policy(), Policy::default());
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[adjust]
threshold = 0
overflow = "checked"

[output]
format = "json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.adjust.threshold, 0);
        assert_eq!(config.adjust.overflow, OverflowMode::Checked);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[output]\nformat = \"explain\"\n").unwrap();
        assert_eq!(config.adjust, AdjustConfig::default());
        assert_eq!(config.output.format, OutputFormat::Explain);
    }

    #[test]
    fn merge_overrides_set_values() {
        let mut base = Config::default();
        let layer: ConfigLayer = toml::from_str(
            "[adjust]\nthreshold = 10\noverflow = \"saturate\"\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        base.merge(layer);
        assert_eq!(base.adjust.threshold, 10);
        assert_eq!(base.adjust.overflow, OverflowMode::Saturate);
        assert_eq!(base.output.format, OutputFormat::Json);
    }

    #[test]
    fn merge_keeps_base_for_unset_keys() {
        let mut base = Config::default();
        base.adjust.threshold = -3;
        base.output.format = OutputFormat::Explain;
        let expected = base.clone();

        base.merge(ConfigLayer::default());
        assert_eq!(base, expected);
    }

    #[test]
    fn local_file_can_restore_default_values() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        std::fs::write(&global, "[adjust]\nthreshold = 7\noverflow = \"checked\"\n").unwrap();
        std::fs::write(&local, "[adjust]\nthreshold = 5\noverflow = \"wrap\"\n").unwrap();

        let config =
            Config::load_from(Some(global.as_path()), Some(local.as_path()), &no_env()).unwrap();
        assert_eq!(config.adjust.threshold, 5);
        assert_eq!(config.adjust.overflow, OverflowMode::Wrap);
    }

    #[test]
    fn env_vars_override_config() {
        let env = Env::mock([
            (constants::ENV_THRESHOLD, "7"),
            (constants::ENV_OVERFLOW, "saturate"),
            (constants::ENV_FORMAT, "JSON"),
        ]);
        let config = Config::from_env(&env);
        assert_eq!(config.adjust.threshold, 7);
        assert_eq!(config.adjust.overflow, OverflowMode::Saturate);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn invalid_env_values_are_ignored() {
        let env = Env::mock([
            (constants::ENV_THRESHOLD, "five"),
            (constants::ENV_OVERFLOW, "explode"),
        ]);
        let config = Config::from_env(&env);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn local_file_overrides_global_file() {
        let dir = tempfile::tempdir().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        std::fs::write(&global, "[adjust]\nthreshold = 1\noverflow = \"checked\"\n").unwrap();
        std::fs::write(&local, "[adjust]\nthreshold = 2\n").unwrap();

        let config =
            Config::load_from(Some(global.as_path()), Some(local.as_path()), &no_env()).unwrap();
        assert_eq!(config.adjust.threshold, 2);
        assert_eq!(config.adjust.overflow, OverflowMode::Checked);
    }

    #[test]
    fn env_overrides_files() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("local.toml");
        std::fs::write(&local, "[adjust]\nthreshold = 2\n").unwrap();
        let env = Env::mock([(constants::ENV_THRESHOLD, "9")]);

        let config = Config::load_from(None, Some(local.as_path()), &env).unwrap();
        assert_eq!(config.adjust.threshold, 9);
    }

    #[test]
    fn missing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(
            Some(dir.path().join("a.toml").as_path()),
            Some(dir.path().join("b.toml").as_path()),
            &no_env(),
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_picks_up_local_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(constants::CONFIG_FILENAME),
            "[output]\nformat = \"json\"\n",
        )
        .unwrap();
        let config = Config::load(Some(dir.path()), &no_env()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let local = dir.path().join("bad.toml");
        std::fs::write(&local, "[adjust]\nthreshold = \"high\"\n").unwrap();

        let err = Config::load_from(None, Some(local.as_path()), &no_env()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseFile { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn to_toml_round_trips() {
        let mut config = Config::default();
        config.adjust.threshold = 42;
        config.output.format = OutputFormat::Explain;
        let text = config.to_toml().unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
