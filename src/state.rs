//! Persisted setting values.
//!
//! Controls never save themselves; whoever owns them records the value they
//! settle on here and reads it back as the initial value next time.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ConfigError;
use crate::settings::Setting;
use crate::values::{AnyValue, SettingValue};

/// On-disk form: `[values]` table of setting name to value name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawSettingValues {
    values: BTreeMap<String, String>,
}

/// One stored value per setting.
///
/// Values are checked against the setting's whole domain, not its possible
/// values, so a restored value may be one that cycling cannot reach.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSettingValues", into = "RawSettingValues")]
pub struct SettingValues {
    values: BTreeMap<Setting, AnyValue>,
}

impl TryFrom<RawSettingValues> for SettingValues {
    type Error = ConfigError;

    fn try_from(raw: RawSettingValues) -> Result<Self, Self::Error> {
        let mut values = BTreeMap::new();
        for (key, name) in raw.values {
            let setting: Setting = key.parse().map_err(|_| ConfigError::UnknownSetting(key))?;
            let value = setting
                .parse_value(&name)
                .ok_or(ConfigError::UnknownValue {
                    setting,
                    value: name,
                })?;
            values.insert(setting, value);
        }
        Ok(Self { values })
    }
}

impl From<SettingValues> for RawSettingValues {
    fn from(state: SettingValues) -> Self {
        Self {
            values: state
                .values
                .into_iter()
                .map(|(setting, value)| (setting.name().to_string(), value.name().to_string()))
                .collect(),
        }
    }
}

impl SettingValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load values from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let state: Self = toml::from_str(&content)?;
        debug!(path = %path.display(), entries = state.len(), "loaded setting values");
        Ok(state)
    }

    /// Like [`Self::load`], but a missing file yields an empty set.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save values to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), entries = self.len(), "saved setting values");
        Ok(())
    }

    /// Stored value for `setting`, type-erased.
    pub fn get_any(&self, setting: Setting) -> Option<AnyValue> {
        self.values.get(&setting).copied()
    }

    /// Stored value for `setting` as `T`, if present and of that type.
    pub fn get<T: SettingValue>(&self, setting: Setting) -> Option<T> {
        self.get_any(setting).and_then(|v| T::try_from(v).ok())
    }

    /// Store `value` for `setting`. The value must come from the setting's domain.
    pub fn set(&mut self, setting: Setting, value: impl Into<AnyValue>) -> Result<(), ConfigError> {
        let value = value.into();
        if value.kind() != setting.value_kind() {
            return Err(ConfigError::WrongKind {
                setting,
                value: value.name().to_string(),
            });
        }
        self.values.insert(setting, value);
        Ok(())
    }

    pub fn remove(&mut self, setting: Setting) -> Option<AnyValue> {
        self.values.remove(&setting)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Setting, AnyValue)> + '_ {
        self.values.iter().map(|(s, v)| (*s, *v))
    }
}
