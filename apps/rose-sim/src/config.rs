//! # Simulator Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --days 30 --format json --lenient-legendary                        │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     ROSE_SIM_DAYS=30                                                   │
//! │     ROSE_ENFORCE_LEGENDARY_EXPIRATION=false                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, else $ROSE_SIM_CONFIG, else                       │
//! │     ~/.config/gilded-rose/sim.toml (Linux)                             │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     2 days, text output, built-in stock, strict validation             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # sim.toml
//! days = 30
//! format = "json"          # text | json
//! inventory = "stock.toml" # optional, built-in stock otherwise
//!
//! [validation]
//! enforce_legendary_expiration = false
//! ```

use std::path::{Path, PathBuf};

use rose_core::ValidationPolicy;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cli::CliArgs;

/// Upper bound on simulated days.
pub const MAX_DAYS: u32 = 10_000;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "ROSE_SIM_CONFIG";

// =============================================================================
// Output Format
// =============================================================================

/// How daily snapshots are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// The classic `name, sellIn, quality` listing.
    #[default]
    Text,
    /// One JSON object per day.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidValue {
                key: "format".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Simulator Configuration
// =============================================================================

/// Complete simulator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Number of days to advance after the initial snapshot.
    #[serde(default = "default_days")]
    pub days: u32,

    /// Snapshot output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Stock file to load instead of the built-in stock.
    #[serde(default)]
    pub inventory: Option<PathBuf>,

    /// Ingestion validation switches.
    #[serde(default)]
    pub validation: ValidationPolicy,
}

fn default_days() -> u32 {
    2
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            days: default_days(),
            format: OutputFormat::default(),
            inventory: None,
            validation: ValidationPolicy::default(),
        }
    }
}

impl SimConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (sim.toml)
    /// 3. Environment variables
    ///
    /// An explicitly named file must exist; the platform default is optional.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let explicit = config_path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading simulator config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `ROSE_*` overrides read through `lookup`.
    pub fn apply_env_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(days) = lookup("ROSE_SIM_DAYS") {
            debug!(days = %days, "Overriding day count from environment");
            self.days = parse_value("ROSE_SIM_DAYS", &days)?;
        }

        if let Some(format) = lookup("ROSE_SIM_FORMAT") {
            self.format = format.parse()?;
        }

        if let Some(path) = lookup("ROSE_SIM_INVENTORY") {
            debug!(path = %path, "Overriding stock file from environment");
            self.inventory = Some(PathBuf::from(path));
        }

        if let Some(flag) = lookup("ROSE_ENFORCE_LEGENDARY_EXPIRATION") {
            self.validation.enforce_legendary_expiration =
                parse_value("ROSE_ENFORCE_LEGENDARY_EXPIRATION", &flag)?;
        }

        Ok(())
    }

    /// Applies command-line flags on top of everything else.
    pub fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(days) = args.days {
            self.days = days;
        }
        if let Some(format) = args.format {
            self.format = format;
        }
        if let Some(ref path) = args.inventory {
            self.inventory = Some(path.clone());
        }
        if args.lenient_legendary {
            self.validation = ValidationPolicy::lenient();
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days > MAX_DAYS {
            return Err(ConfigError::TooManyDays {
                days: self.days,
                max: MAX_DAYS,
            });
        }

        if let Some(ref path) = self.inventory {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.clone()));
            }
        }

        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "gilded-rose", "gilded-rose")
            .map(|dirs| dirs.config_dir().join("sim.toml"))
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

// =============================================================================
// Config Error
// =============================================================================

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: String, value: String },

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Cannot simulate {days} days, the limit is {max}")]
    TooManyDays { days: u32, max: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.days, 2);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.inventory.is_none());
        assert!(config.validation.enforce_legendary_expiration);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let config: SimConfig = toml::from_str(
            r#"
            days = 30
            format = "json"

            [validation]
            enforce_legendary_expiration = false
            "#,
        )
        .unwrap();

        assert_eq!(config.days, 30);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.validation, ValidationPolicy::lenient());

        let empty: SimConfig = toml::from_str("").unwrap();
        assert_eq!(empty, SimConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = SimConfig::default();
        config
            .apply_env_overrides(env(&[
                ("ROSE_SIM_DAYS", "7"),
                ("ROSE_SIM_FORMAT", "JSON"),
                ("ROSE_ENFORCE_LEGENDARY_EXPIRATION", "false"),
            ]))
            .unwrap();

        assert_eq!(config.days, 7);
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.validation.enforce_legendary_expiration);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let mut config = SimConfig::default();
        let err = config
            .apply_env_overrides(env(&[("ROSE_SIM_DAYS", "a week")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_cli_wins_over_env() {
        let mut config = SimConfig::default();
        config
            .apply_env_overrides(env(&[("ROSE_SIM_DAYS", "7")]))
            .unwrap();
        config.apply_cli(&CliArgs {
            days: Some(30),
            lenient_legendary: true,
            ..CliArgs::default()
        });

        assert_eq!(config.days, 30);
        assert_eq!(config.validation, ValidationPolicy::lenient());
    }

    #[test]
    fn test_validation() {
        let config = SimConfig {
            days: MAX_DAYS + 1,
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::TooManyDays { .. })));

        let config = SimConfig {
            inventory: Some(PathBuf::from("/definitely/not/here/stock.toml")),
            ..SimConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert_eq!("Json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
