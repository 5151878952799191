//! A toggle control that cycles one setting through its valid values.

use tracing::{debug, trace};

use crate::appearance::{Appearance, AppearanceRegistry, Icon};
use crate::settings::Setting;
use crate::valid_set::{Direction, ValidSet};
use crate::values::SettingValue;

/// How the user activated a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Ordinary click or key press: cycle forward.
    Primary,
    /// Alternate click (e.g. right mouse button): cycle backward.
    Alternate,
}

impl Activation {
    pub fn direction(self) -> Direction {
        match self {
            Self::Primary => Direction::Forward,
            Self::Alternate => Direction::Backward,
        }
    }
}

/// Holds the current value of one setting and cycles it through a fixed
/// valid set.
///
/// The current value may lie outside the valid set (it is never forced in);
/// such a value stays put until the control is cycled or [`set`] again.
///
/// [`set`]: ToggleControl::set
#[derive(Debug, Clone)]
pub struct ToggleControl<'r, T: SettingValue> {
    setting: Setting,
    current: T,
    valid: ValidSet<T>,
    registry: &'r AppearanceRegistry,
}

impl<'r, T: SettingValue> ToggleControl<'r, T> {
    /// A control reaching every value `setting` accepts.
    pub fn new(registry: &'r AppearanceRegistry, setting: Setting, initial: T) -> Self {
        Self::with_filter(registry, setting, initial, |_| true)
    }

    /// A control whose reachable values are further narrowed by `predicate`.
    ///
    /// The predicate is evaluated once, here. `T` must be the value type of
    /// `setting`; debug builds panic otherwise.
    pub fn with_filter(
        registry: &'r AppearanceRegistry,
        setting: Setting,
        initial: T,
        predicate: impl Fn(T) -> bool,
    ) -> Self {
        debug_assert_eq!(
            T::KIND,
            setting.value_kind(),
            "{setting} does not take {} values",
            T::KIND.type_name()
        );
        let valid = ValidSet::build(setting, predicate);
        debug!(
            %setting,
            initial = initial.name(),
            valid = valid.len(),
            "toggle control created"
        );
        if !valid.contains(initial) {
            debug!(
                %setting,
                initial = initial.name(),
                "initial value is not reachable by cycling"
            );
        }
        Self {
            setting,
            current: initial,
            valid,
            registry,
        }
    }

    pub fn setting(&self) -> Setting {
        self.setting
    }

    pub fn current_value(&self) -> T {
        self.current
    }

    pub fn valid_values(&self) -> &ValidSet<T> {
        &self.valid
    }

    /// Whether cycling can ever land on `value`.
    pub fn is_reachable(&self, value: T) -> bool {
        self.valid.contains(value)
    }

    /// Replace the current value without any validation.
    pub fn set(&mut self, value: T) {
        self.current = value;
    }

    /// The value one activation in `direction` would move to.
    ///
    /// Wraps at both ends. A current value outside the valid set moves to the
    /// first valid value going forward and to the last going backward. With no
    /// valid values at all, the current value is returned unchanged.
    pub fn next_value(&self, direction: Direction) -> T {
        self.valid
            .step(self.current, direction)
            .unwrap_or(self.current)
    }

    /// Move to [`Self::next_value`] and return the new current value.
    pub fn cycle(&mut self, direction: Direction) -> T {
        let next = self.next_value(direction);
        trace!(
            setting = %self.setting,
            from = self.current.name(),
            to = next.name(),
            ?direction,
            "cycle"
        );
        self.current = next;
        next
    }

    /// Cycle in the direction implied by `activation`.
    pub fn activate(&mut self, activation: Activation) -> T {
        self.cycle(activation.direction())
    }

    /// Appearance of the current value, or the placeholder if none is registered.
    pub fn appearance(&self) -> &'r Appearance {
        self.registry.resolve(self.setting, self.current)
    }

    pub fn icon(&self) -> Icon {
        self.appearance().icon()
    }

    /// Label and hint, or only the placeholder hint when nothing is registered.
    pub fn tooltip(&self) -> Vec<&'r str> {
        self.registry.tooltip(self.setting, self.current)
    }
}
