//! Snapshot tests for rendered command output.
//!
//! Uses insta inline snapshots; these pin the text and YAML shapes users see.

use setting_toggle::appearance::AppearanceRegistry;
use setting_toggle::commands::{self, CycleRequest};
use setting_toggle::config::AppConfig;
use setting_toggle::settings::Setting;
use setting_toggle::state::SettingValues;
use setting_toggle::valid_set::Direction;

#[test]
fn test_show_text_snapshot() {
    let registry = AppearanceRegistry::builtin();
    let report = commands::show(&registry, Setting::SortBy, "amount").unwrap();
    insta::assert_snapshot!(commands::render_show(&report).trim_end(), @r"
    sort_by: amount
    icon: sort_by_amount
    label: Sort By
    hint: Number of Items
    ");
}

#[test]
fn test_show_placeholder_text_snapshot() {
    let registry = AppearanceRegistry::builtin();
    let report = commands::show(&registry, Setting::PowerUnits, "eu").unwrap();
    insta::assert_snapshot!(commands::render_show(&report).trim_end(), @r"
    power_units: eu
    icon: toolbar_button_background
    label: Unknown Setting
    hint: No Such Message
    note: not offered by this setting
    ");
}

#[test]
fn test_cycle_text_snapshot() {
    let registry = AppearanceRegistry::builtin();
    let request = CycleRequest {
        setting: Setting::CondenserOutput,
        from: Some("trash".to_string()),
        direction: Direction::Forward,
        steps: 1,
        exclude: Vec::new(),
    };
    let report = commands::cycle(
        &registry,
        &AppConfig::default(),
        &request,
        &mut SettingValues::new(),
    )
    .unwrap();

    insta::assert_snapshot!(commands::render_cycle(&report).trim_end(), @r"
    condenser_output: trash -> matter_balls
    icon: condenser_output_matter_ball
    label: Condenser Output
    hint: Matter Balls - 256 per item
    ");
}

#[test]
fn test_show_yaml_snapshot() {
    let registry = AppearanceRegistry::builtin();
    let report = commands::show(&registry, Setting::FuzzyMode, "percent_75").unwrap();
    insta::assert_yaml_snapshot!(report, @r"
    setting: fuzzy_mode
    value: percent_75
    icon: fuzzy_percent75
    label: Fuzzy Comparison
    hint: Percent 75
    placeholder: false
    possible: true
    ");
}
