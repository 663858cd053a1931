use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::StringOpsError;
use crate::logging::LoggingConfig;
use crate::utils::{ControlSet, RandomStringGenerator};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StringOpsConfig {
    pub random: RandomConfig,
    pub truncate: TruncateConfig,
    pub escape: EscapeConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Characters to draw from; unset means the 62-char alphanumeric set
    pub alphabet: Option<String>,
    /// Fixed seed for reproducible output; unset seeds from the clock
    pub seed: Option<u64>,
    pub default_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TruncateConfig {
    pub default_size: usize,
    pub default_suffix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeConfig {
    pub control_chars: String,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            alphabet: None,
            seed: None,
            default_length: 16,
        }
    }
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            default_size: 80,
            default_suffix: "...".to_string(),
        }
    }
}

impl Default for EscapeConfig {
    fn default() -> Self {
        Self {
            control_chars: ",;|".to_string(),
        }
    }
}

impl StringOpsConfig {
    /// Load configuration from the default location, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_path = get_config_path();

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            info!("No configuration file found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config: StringOpsConfig = toml::from_str(&content).map_err(|e| {
            warn!("Failed to parse {}: {}", path.display(), e);
            StringOpsError::InvalidConfig { path: path.display().to_string() }
        })?;

        config.validate()?;

        info!("Configuration loaded from: {}", path.display());
        Ok(config)
    }

    /// Save configuration to `path`, or the default location
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        info!("Configuration saved to: {}", config_path.display());
        Ok(config_path)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.random.alphabet, Some(alphabet) if alphabet.is_empty()) {
            return Err(StringOpsError::config("random.alphabet must not be empty when set").into());
        }

        if self.escape.control_chars.is_empty() {
            return Err(StringOpsError::config("escape.control_chars must not be empty").into());
        }

        if self.truncate.default_size == 0 {
            return Err(StringOpsError::config("truncate.default_size must be > 0").into());
        }

        Ok(())
    }

    /// Control characters as a reusable set
    pub fn control_set(&self) -> ControlSet {
        ControlSet::from(self.escape.control_chars.as_str())
    }

    /// Configured alphabet; empty means the default alphabet
    pub fn alphabet(&self) -> Vec<char> {
        self.random
            .alphabet
            .as_deref()
            .map(|alphabet| alphabet.chars().collect())
            .unwrap_or_default()
    }

    /// Generator honouring the configured seed
    pub fn generator(&self) -> RandomStringGenerator {
        match self.random.seed {
            Some(seed) => RandomStringGenerator::with_seed(seed),
            None => RandomStringGenerator::from_time(),
        }
    }
}

/// Get the configuration file path
pub fn get_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "stringops", "stringops")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join("config.toml"))
}

/// Environment-based configuration overrides
pub struct ConfigOverrides;

impl ConfigOverrides {
    /// Apply environment variable overrides to configuration
    pub fn apply(config: &mut StringOpsConfig) {
        Self::apply_from(config, |name| std::env::var(name).ok());
    }

    /// Apply overrides from an arbitrary variable source
    pub fn apply_from<F>(config: &mut StringOpsConfig, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_level) = lookup("STROPS_LOG_LEVEL") {
            config.logging.level = log_level;
        }

        if let Some(seed_str) = lookup("STROPS_RANDOM_SEED") {
            match seed_str.parse::<u64>() {
                Ok(seed) => config.random.seed = Some(seed),
                Err(_) => warn!("Ignoring non-numeric STROPS_RANDOM_SEED: {}", seed_str),
            }
        }

        if let Some(alphabet) = lookup("STROPS_RANDOM_ALPHABET") {
            config.random.alphabet = Some(alphabet);
        }

        if let Some(suffix) = lookup("STROPS_TRUNCATE_SUFFIX") {
            config.truncate.default_suffix = suffix;
        }

        if let Some(control_chars) = lookup("STROPS_CONTROL_CHARS") {
            config.escape.control_chars = control_chars;
        }
    }
}
