//! Command implementations shared by the binary and tests.
//!
//! Each command produces a serializable report; rendering it as text, JSON or
//! YAML is the caller's business.

use std::fmt::Write as _;

use serde::Serialize;

use crate::appearance::{Appearance, AppearanceRegistry, Icon};
use crate::config::{AppConfig, ConfigError};
use crate::settings::Setting;
use crate::state::SettingValues;
use crate::toggle::ToggleControl;
use crate::valid_set::{Direction, ValidSet};
use crate::values::{
    AccessRestriction, AnyValue, CondenserOutput, FullnessMode, FuzzyMode, LevelType,
    OperationMode, PowerUnits, RedstoneMode, RelativeDirection, SchedulingMode, SearchBoxMode,
    SettingValue, SortDir, SortOrder, StorageFilter, TerminalStyle, ValueKind, ViewItems, YesNo,
};

/// Appearance of a single value, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueReport {
    pub value: AnyValue,
    pub icon: Icon,
    pub label: String,
    pub hint: String,
    /// True when no appearance is registered and the placeholder was used
    pub placeholder: bool,
}

impl ValueReport {
    fn new(value: AnyValue, appearance: &Appearance, placeholder: bool) -> Self {
        Self {
            value,
            icon: appearance.icon(),
            label: appearance.label().to_string(),
            hint: appearance.hint().to_string(),
            placeholder,
        }
    }

    fn resolve(registry: &AppearanceRegistry, setting: Setting, value: AnyValue) -> Self {
        let placeholder = registry.lookup(setting, value).is_none();
        Self::new(value, registry.resolve(setting, value), placeholder)
    }
}

/// One setting in the catalog listing.
#[derive(Debug, Clone, Serialize)]
pub struct SettingReport {
    pub setting: Setting,
    #[serde(rename = "type")]
    pub value_type: &'static str,
    pub values: Vec<ListedValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListedValue {
    #[serde(flatten)]
    pub appearance: ValueReport,
    /// Removed from the cycle by the `[exclude]` config table
    pub excluded: bool,
}

/// Every setting with its possible values, in declaration order.
pub fn list(registry: &AppearanceRegistry, config: &AppConfig) -> Vec<SettingReport> {
    Setting::ALL
        .iter()
        .map(|&setting| {
            let excluded: Vec<AnyValue> = config
                .exclude
                .iter()
                .filter(|(key, _)| key.parse::<Setting>() == Ok(setting))
                .flat_map(|(_, names)| names.iter())
                .filter_map(|name| setting.parse_value(name))
                .collect();

            let values = setting
                .possible_values()
                .iter()
                .map(|&value| ListedValue {
                    appearance: ValueReport::resolve(registry, setting, value),
                    excluded: excluded.contains(&value),
                })
                .collect();

            SettingReport {
                setting,
                value_type: setting.value_kind().type_name(),
                values,
            }
        })
        .collect()
}

/// Result of `show`.
#[derive(Debug, Clone, Serialize)]
pub struct ShowReport {
    pub setting: Setting,
    #[serde(flatten)]
    pub appearance: ValueReport,
    /// Whether the setting accepts this value at all
    pub possible: bool,
}

/// Resolve the appearance of `name` for `setting`.
///
/// A name outside the setting's domain is an error; a known value with no
/// appearance is not.
pub fn show(
    registry: &AppearanceRegistry,
    setting: Setting,
    name: &str,
) -> Result<ShowReport, ConfigError> {
    let value = setting
        .parse_value(name)
        .ok_or_else(|| ConfigError::UnknownValue {
            setting,
            value: name.to_string(),
        })?;

    Ok(ShowReport {
        setting,
        appearance: ValueReport::resolve(registry, setting, value),
        possible: setting.accepts(value),
    })
}

/// Parameters of `cycle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleRequest {
    pub setting: Setting,
    /// Starting value; falls back to the stored value, then the first possible one
    pub from: Option<String>,
    pub direction: Direction,
    pub steps: usize,
    /// Extra values to remove from the cycle, on top of the config's
    pub exclude: Vec<String>,
}

/// Result of `cycle`.
#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub setting: Setting,
    pub from: AnyValue,
    /// Values visited, one per step
    pub path: Vec<AnyValue>,
    /// Values the control could reach
    pub valid: Vec<AnyValue>,
    pub result: ValueReport,
}

/// Build a control for `request.setting`, activate it `request.steps` times
/// and record the final value in `state`.
pub fn cycle(
    registry: &AppearanceRegistry,
    config: &AppConfig,
    request: &CycleRequest,
    state: &mut SettingValues,
) -> Result<CycleReport, ConfigError> {
    macro_rules! dispatch {
        ($($kind:ident),+ $(,)?) => {
            match request.setting.value_kind() {
                $(ValueKind::$kind => cycle_typed::<$kind>(registry, config, request, state),)+
            }
        };
    }

    dispatch!(
        CondenserOutput,
        AccessRestriction,
        PowerUnits,
        RedstoneMode,
        OperationMode,
        RelativeDirection,
        SortDir,
        SearchBoxMode,
        LevelType,
        TerminalStyle,
        SortOrder,
        ViewItems,
        FuzzyMode,
        FullnessMode,
        YesNo,
        StorageFilter,
        SchedulingMode,
    )
}

fn cycle_typed<T: SettingValue>(
    registry: &AppearanceRegistry,
    config: &AppConfig,
    request: &CycleRequest,
    state: &mut SettingValues,
) -> Result<CycleReport, ConfigError> {
    let setting = request.setting;
    let parse = |name: &str| {
        T::from_name(name).ok_or_else(|| ConfigError::UnknownValue {
            setting,
            value: name.to_string(),
        })
    };

    let initial = match &request.from {
        Some(name) => parse(name)?,
        None => state
            .get::<T>(setting)
            .or_else(|| ValidSet::<T>::unfiltered(setting).first())
            // Domains are never empty.
            .unwrap_or(T::ALL[0]),
    };

    let mut excluded = config.excluded::<T>(setting)?;
    for name in &request.exclude {
        excluded.push(parse(name)?);
    }

    let mut control =
        ToggleControl::with_filter(registry, setting, initial, |v| !excluded.contains(&v));
    let path: Vec<AnyValue> = (0..request.steps)
        .map(|_| control.cycle(request.direction).into())
        .collect();

    state.set(setting, control.current_value())?;

    Ok(CycleReport {
        setting,
        from: initial.into(),
        path,
        valid: control.valid_values().iter().map(Into::into).collect(),
        result: ValueReport::resolve(registry, setting, control.current_value().into()),
    })
}

/// Plain-text rendering of `list`.
pub fn render_list(reports: &[SettingReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let _ = writeln!(out, "{} ({})", report.setting, report.value_type);
        for listed in &report.values {
            let v = &listed.appearance;
            let _ = write!(out, "  {:<24} {:<32} {}", v.value, v.icon, v.hint);
            if listed.excluded {
                out.push_str(" [excluded]");
            }
            out.push('\n');
        }
    }
    out
}

/// Plain-text rendering of `show`.
pub fn render_show(report: &ShowReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}: {}", report.setting, report.appearance.value);
    render_appearance(&mut out, &report.appearance);
    if !report.possible {
        out.push_str("note: not offered by this setting\n");
    }
    out
}

/// Plain-text rendering of `cycle`.
pub fn render_cycle(report: &CycleReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}: {} -> {}",
        report.setting, report.from, report.result.value
    );
    render_appearance(&mut out, &report.result);
    out
}

fn render_appearance(out: &mut String, report: &ValueReport) {
    let _ = writeln!(out, "icon: {}", report.icon);
    let _ = writeln!(out, "label: {}", report.label);
    let _ = writeln!(out, "hint: {}", report.hint);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(setting: Setting, from: &str, direction: Direction, steps: usize) -> CycleRequest {
        CycleRequest {
            setting,
            from: Some(from.to_string()),
            direction,
            steps,
            exclude: Vec::new(),
        }
    }

    #[test]
    fn cycle_records_result_in_state() {
        let registry = AppearanceRegistry::builtin();
        let mut state = SettingValues::new();
        let report = cycle(
            &registry,
            &AppConfig::default(),
            &request(Setting::SortBy, "name", Direction::Forward, 1),
            &mut state,
        )
        .unwrap();

        assert_eq!(report.result.value, AnyValue::SortOrder(SortOrder::Amount));
        assert_eq!(state.get::<SortOrder>(Setting::SortBy), Some(SortOrder::Amount));
    }

    #[test]
    fn cycle_starts_from_stored_value() {
        let registry = AppearanceRegistry::builtin();
        let mut state = SettingValues::new();
        state.set(Setting::SortBy, SortOrder::Mod).unwrap();

        let mut req = request(Setting::SortBy, "name", Direction::Forward, 1);
        req.from = None;
        let report = cycle(&registry, &AppConfig::default(), &req, &mut state).unwrap();

        assert_eq!(report.from, AnyValue::SortOrder(SortOrder::Mod));
        assert_eq!(report.result.value, AnyValue::SortOrder(SortOrder::Name));
    }

    #[test]
    fn unknown_from_value_is_an_error() {
        let registry = AppearanceRegistry::builtin();
        let result = cycle(
            &registry,
            &AppConfig::default(),
            &request(Setting::SortBy, "sideways", Direction::Forward, 1),
            &mut SettingValues::new(),
        );
        assert!(matches!(result, Err(ConfigError::UnknownValue { .. })));
    }

    #[test]
    fn show_reports_placeholder_for_unregistered_value() {
        let registry = AppearanceRegistry::builtin();
        let report = show(&registry, Setting::PowerUnits, "eu").unwrap();
        assert!(report.appearance.placeholder);
        assert!(!report.possible);
        assert_eq!(report.appearance.icon, Icon::ToolbarButtonBackground);
    }
}
