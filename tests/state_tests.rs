use setting_toggle::config::ConfigError;
use setting_toggle::settings::Setting;
use setting_toggle::state::SettingValues;
use setting_toggle::values::{AnyValue, FuzzyMode, PowerUnits, SortOrder};

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    let mut state = SettingValues::new();
    state.set(Setting::SortBy, SortOrder::Amount).unwrap();
    state.set(Setting::FuzzyMode, FuzzyMode::Percent75).unwrap();
    state.save(&path).unwrap();

    let loaded = SettingValues::load(&path).unwrap();
    assert_eq!(loaded, state);
    assert_eq!(loaded.get::<SortOrder>(Setting::SortBy), Some(SortOrder::Amount));
}

#[test]
fn test_value_outside_possible_values_survives() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    std::fs::write(&path, "[values]\npower_units = \"eu\"\n").unwrap();

    let state = SettingValues::load(&path).unwrap();
    assert_eq!(state.get::<PowerUnits>(Setting::PowerUnits), Some(PowerUnits::Eu));
}

#[test]
fn test_wrong_kind_is_rejected() {
    let mut state = SettingValues::new();
    let result = state.set(Setting::SortBy, FuzzyMode::IgnoreAll);
    assert!(matches!(result, Err(ConfigError::WrongKind { .. })));
    assert!(state.is_empty());
}

#[test]
fn test_get_with_wrong_type_is_none() {
    let mut state = SettingValues::new();
    state.set(Setting::SortBy, SortOrder::Mod).unwrap();
    assert_eq!(state.get::<FuzzyMode>(Setting::SortBy), None);
    assert_eq!(
        state.get_any(Setting::SortBy),
        Some(AnyValue::SortOrder(SortOrder::Mod))
    );
}

#[test]
fn test_unknown_entries_fail_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");

    std::fs::write(&path, "[values]\nsort_by = \"colour\"\n").unwrap();
    assert!(SettingValues::load(&path).is_err());

    std::fs::write(&path, "[values]\nwarp_drive = \"on\"\n").unwrap();
    assert!(SettingValues::load(&path).is_err());
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let state = SettingValues::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert!(state.is_empty());
}

#[test]
fn test_remove() {
    let mut state = SettingValues::new();
    state.set(Setting::SortBy, SortOrder::Mod).unwrap();
    assert_eq!(
        state.remove(Setting::SortBy),
        Some(AnyValue::SortOrder(SortOrder::Mod))
    );
    assert_eq!(state.len(), 0);
}
