//! Layered application configuration (defaults, TOML file, CLI overrides).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::settings::Setting;
use crate::values::SettingValue;

/// Error type for configuration and state file operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading/writing file
    Io(std::io::Error),
    /// TOML parsing error
    Parse(toml::de::Error),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Layered configuration could not be extracted
    Figment(Box<figment::Error>),
    /// Config file given explicitly but not found
    Missing(PathBuf),
    /// Setting name not recognized
    UnknownSetting(String),
    /// Value name not in the setting's domain
    UnknownValue { setting: Setting, value: String },
    /// Value belongs to a different domain than the setting
    WrongKind { setting: Setting, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "TOML parse error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::Figment(e) => write!(f, "Configuration error: {}", e),
            Self::Missing(path) => write!(f, "Config file not found: {}", path.display()),
            Self::UnknownSetting(name) => write!(f, "Unknown setting '{}'", name),
            Self::UnknownValue { setting, value } => {
                write!(f, "Unknown value '{}' for setting {}", value, setting)
            }
            Self::WrongKind { setting, value } => write!(
                f,
                "Value '{}' is not a {} value (setting {})",
                value,
                setting.value_kind().type_name(),
                setting
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Figment(Box::new(e))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Log output settings
    pub logging: LoggingConfig,
    /// Where cycled values are persisted
    pub state: StateConfig,
    /// Values removed from a setting's cycle, keyed by setting name
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub exclude: BTreeMap<String, Vec<String>>,
}

/// Log output settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Log level: trace, debug, info, warn, error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
}

/// State file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// TOML file holding persisted setting values
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Merge defaults, the optional TOML file and `overrides`, later layers winning.
    ///
    /// Fields left unset in `overrides` do not mask the file.
    pub fn load(path: Option<&Path>, overrides: &AppConfig) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        let config: Self = figment.merge(Serialized::defaults(overrides)).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every `[exclude]` entry names a known setting and values
    /// from that setting's domain.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, names) in &self.exclude {
            let setting: Setting = key
                .parse()
                .map_err(|_| ConfigError::UnknownSetting(key.clone()))?;
            for name in names {
                if setting.parse_value(name).is_none() {
                    return Err(ConfigError::UnknownValue {
                        setting,
                        value: name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Values of `T` excluded for `setting`, merged across every `[exclude]`
    /// key naming it (`fuzzy_mode` and `fuzzy-mode` alike).
    pub fn excluded<T: SettingValue>(&self, setting: Setting) -> Result<Vec<T>, ConfigError> {
        self.exclude
            .iter()
            .filter(|(key, _)| key.parse::<Setting>() == Ok(setting))
            .flat_map(|(_, names)| names)
            .map(|name| {
                T::from_name(name).ok_or_else(|| ConfigError::UnknownValue {
                    setting,
                    value: name.clone(),
                })
            })
            .collect()
    }
}
