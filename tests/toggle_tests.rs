use setting_toggle::appearance::{AppearanceRegistry, Icon};
use setting_toggle::settings::Setting;
use setting_toggle::toggle::{Activation, ToggleControl};
use setting_toggle::valid_set::Direction;
use setting_toggle::values::{
    AccessRestriction, FuzzyMode, PowerUnits, RedstoneMode, SettingValue, SortOrder, YesNo,
};

/// Redstone control narrowed to the two ends of its domain.
fn ends_only(
    registry: &AppearanceRegistry,
    initial: RedstoneMode,
) -> ToggleControl<'_, RedstoneMode> {
    ToggleControl::with_filter(registry, Setting::RedstoneControlled, initial, |v| {
        matches!(v, RedstoneMode::Ignore | RedstoneMode::SignalPulse)
    })
}

#[test]
fn test_two_value_set_alternates() {
    let registry = AppearanceRegistry::builtin();
    let mut control = ends_only(&registry, RedstoneMode::Ignore);

    assert_eq!(control.cycle(Direction::Forward), RedstoneMode::SignalPulse);
    assert_eq!(control.cycle(Direction::Forward), RedstoneMode::Ignore);
    assert_eq!(control.cycle(Direction::Backward), RedstoneMode::SignalPulse);
}

#[test]
fn test_value_outside_set_goes_to_first_or_last() {
    let registry = AppearanceRegistry::builtin();
    let control = ends_only(&registry, RedstoneMode::HighSignal);

    assert!(!control.is_reachable(RedstoneMode::HighSignal));
    assert_eq!(control.current_value(), RedstoneMode::HighSignal);
    assert_eq!(control.next_value(Direction::Forward), RedstoneMode::Ignore);
    assert_eq!(control.next_value(Direction::Backward), RedstoneMode::SignalPulse);
}

#[test]
fn test_possible_values_and_predicate_both_narrow() {
    // NoAccess is not offered by the setting; the predicate drops Write
    let registry = AppearanceRegistry::builtin();
    let mut control = ToggleControl::with_filter(
        &registry,
        Setting::Access,
        AccessRestriction::Read,
        |a| a != AccessRestriction::Write,
    );
    assert_eq!(
        control.valid_values().as_slice(),
        &[AccessRestriction::Read, AccessRestriction::ReadWrite]
    );
    assert_eq!(control.cycle(Direction::Forward), AccessRestriction::ReadWrite);
    assert_eq!(control.cycle(Direction::Forward), AccessRestriction::Read);

    control.set(AccessRestriction::NoAccess);
    assert_eq!(control.next_value(Direction::Forward), AccessRestriction::Read);
    assert_eq!(control.next_value(Direction::Backward), AccessRestriction::ReadWrite);
}

#[test]
fn test_next_value_does_not_mutate() {
    let registry = AppearanceRegistry::builtin();
    let control = ToggleControl::new(&registry, Setting::SortBy, SortOrder::Name);

    assert_eq!(control.next_value(Direction::Forward), SortOrder::Amount);
    assert_eq!(control.next_value(Direction::Forward), SortOrder::Amount);
    assert_eq!(control.current_value(), SortOrder::Name);
}

#[test]
fn test_forward_cycle_visits_every_value_once() {
    let registry = AppearanceRegistry::builtin();
    let mut control = ToggleControl::new(&registry, Setting::FuzzyMode, FuzzyMode::IgnoreAll);

    let mut seen = vec![control.current_value()];
    for _ in 1..FuzzyMode::ALL.len() {
        seen.push(control.cycle(Direction::Forward));
    }
    assert_eq!(seen, FuzzyMode::ALL);

    // One more step wraps back to the start
    assert_eq!(control.cycle(Direction::Forward), FuzzyMode::IgnoreAll);
}

#[test]
fn test_backward_wraps_from_first_to_last() {
    let registry = AppearanceRegistry::builtin();
    let mut control = ToggleControl::new(&registry, Setting::FuzzyMode, FuzzyMode::IgnoreAll);
    assert_eq!(control.cycle(Direction::Backward), FuzzyMode::Percent25);
}

#[test]
fn test_forward_then_backward_returns_to_start() {
    let registry = AppearanceRegistry::builtin();
    for &start in FuzzyMode::ALL {
        let mut control = ToggleControl::new(&registry, Setting::FuzzyMode, start);
        control.cycle(Direction::Forward);
        assert_eq!(control.cycle(Direction::Backward), start, "from {start}");
    }
}

#[test]
fn test_set_skips_validation() {
    let registry = AppearanceRegistry::builtin();
    let mut control = ToggleControl::new(&registry, Setting::PowerUnits, PowerUnits::Ae);

    control.set(PowerUnits::Eu);
    assert_eq!(control.current_value(), PowerUnits::Eu);
    assert!(!control.is_reachable(PowerUnits::Eu));

    // No appearance is registered for EU
    assert_eq!(control.icon(), Icon::ToolbarButtonBackground);
    assert_eq!(control.tooltip(), vec!["No Such Message"]);

    assert_eq!(control.next_value(Direction::Forward), PowerUnits::Ae);
    assert_eq!(control.next_value(Direction::Backward), PowerUnits::Rf);
}

#[test]
fn test_initial_value_is_not_forced_into_set() {
    let registry = AppearanceRegistry::builtin();
    let control = ToggleControl::new(&registry, Setting::PowerUnits, PowerUnits::Eu);

    assert_eq!(control.current_value(), PowerUnits::Eu);
    assert_eq!(control.valid_values().as_slice(), &[PowerUnits::Ae, PowerUnits::Rf]);
}

#[test]
fn test_empty_valid_set_keeps_current_value() {
    let registry = AppearanceRegistry::builtin();
    let mut control =
        ToggleControl::with_filter(&registry, Setting::SortBy, SortOrder::Mod, |_| false);

    assert!(control.valid_values().is_empty());
    assert_eq!(control.cycle(Direction::Forward), SortOrder::Mod);
    assert_eq!(control.cycle(Direction::Backward), SortOrder::Mod);
}

#[test]
fn test_predicate_cannot_widen_possible_values() {
    let registry = AppearanceRegistry::builtin();
    let control = ToggleControl::with_filter(&registry, Setting::PowerUnits, PowerUnits::Ae, |_| {
        true
    });
    assert!(!control.is_reachable(PowerUnits::Eu));
    assert_eq!(control.valid_values().len(), 2);
}

#[test]
fn test_activation_direction() {
    let registry = AppearanceRegistry::builtin();
    let mut control = ToggleControl::new(&registry, Setting::SortBy, SortOrder::Name);

    assert_eq!(control.activate(Activation::Alternate), SortOrder::Mod);
    assert_eq!(control.activate(Activation::Primary), SortOrder::Name);
}

#[test]
fn test_appearance_follows_current_value() {
    let registry = AppearanceRegistry::builtin();
    let mut control = ToggleControl::new(&registry, Setting::SortBy, SortOrder::Name);
    assert_eq!(control.icon(), Icon::SortByName);

    control.cycle(Direction::Forward);
    assert_eq!(control.icon(), Icon::SortByAmount);
    assert_eq!(control.tooltip(), vec!["Sort By", "Number of Items"]);
}

#[test]
fn test_controls_share_one_registry() {
    let registry = AppearanceRegistry::global();
    let sort = ToggleControl::new(registry, Setting::SortBy, SortOrder::Mod);
    let fuzzy = ToggleControl::new(registry, Setting::FuzzyMode, FuzzyMode::Percent50);

    assert_eq!(sort.appearance().hint(), "Mod");
    assert_eq!(fuzzy.appearance().hint(), "Percent 50");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "sort_by does not take YesNo values")]
fn test_mismatched_value_type_panics_in_debug() {
    let registry = AppearanceRegistry::builtin();
    let _ = ToggleControl::new(&registry, Setting::SortBy, YesNo::Yes);
}
