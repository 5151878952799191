//! Display metadata for (setting, value) pairs.
//!
//! The registry is a plain table: build it once (usually through
//! [`AppearanceRegistry::builtin`] or [`AppearanceRegistry::global`]) and hand
//! shared references to every control. A lookup miss is not an error; callers
//! get [`Appearance::PLACEHOLDER`] instead.

mod builtin;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use serde::{Serialize, Serializer};
use tracing::trace;

use crate::settings::Setting;
use crate::values::AnyValue;

/// Defines [`Icon`] with a stable snake_case name per variant.
macro_rules! icons {
    ( $( $(#[$vmeta:meta])* $variant:ident => $name:literal, )+ ) => {
        /// Icons a toggle can show.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Icon {
            $( $(#[$vmeta])* $variant ),+
        }

        impl Icon {
            /// Every icon, in declaration order.
            pub const ALL: &'static [Icon] = &[$(Self::$variant),+];

            /// Stable snake_case name (used in text and serialized output).
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }
    };
}

icons! {
    /// Generic button background, used when nothing is registered.
    ToolbarButtonBackground => "toolbar_button_background",

    CondenserOutputTrash => "condenser_output_trash",
    CondenserOutputMatterBall => "condenser_output_matter_ball",
    CondenserOutputSingularity => "condenser_output_singularity",

    AccessRead => "access_read",
    AccessWrite => "access_write",
    AccessReadWrite => "access_read_write",

    PowerUnitAe => "power_unit_ae",
    PowerUnitRf => "power_unit_rf",

    RedstoneIgnore => "redstone_ignore",
    RedstoneLow => "redstone_low",
    RedstoneHigh => "redstone_high",
    RedstonePulse => "redstone_pulse",

    ArrowLeft => "arrow_left",
    ArrowRight => "arrow_right",
    ArrowUp => "arrow_up",
    ArrowDown => "arrow_down",

    SearchAuto => "search_auto",
    SearchManual => "search_manual",
    SearchAutoJei => "search_auto_jei",
    SearchManualJei => "search_manual_jei",
    SearchAutoKeep => "search_auto_keep",
    SearchManualKeep => "search_manual_keep",
    SearchAutoJeiKeep => "search_auto_jei_keep",
    SearchManualJeiKeep => "search_manual_jei_keep",

    LevelEnergy => "level_energy",
    LevelItem => "level_item",

    TerminalStyleTall => "terminal_style_tall",
    TerminalStyleSmall => "terminal_style_small",
    TerminalStyleFull => "terminal_style_full",

    SortByName => "sort_by_name",
    SortByAmount => "sort_by_amount",
    SortByMod => "sort_by_mod",

    ViewModeStored => "view_mode_stored",
    ViewModeAll => "view_mode_all",
    ViewModeCrafting => "view_mode_crafting",

    FuzzyPercent25 => "fuzzy_percent25",
    FuzzyPercent50 => "fuzzy_percent50",
    FuzzyPercent75 => "fuzzy_percent75",
    FuzzyPercent99 => "fuzzy_percent99",
    FuzzyIgnore => "fuzzy_ignore",

    FullnessEmpty => "fullness_empty",
    FullnessHalf => "fullness_half",
    FullnessFull => "fullness_full",

    BlockingModeYes => "blocking_mode_yes",
    BlockingModeNo => "blocking_mode_no",

    PermissionCraft => "permission_craft",
    PermissionExtract => "permission_extract",

    StorageFilterExtractableOnly => "storage_filter_extractable_only",
    StorageFilterExtractableNone => "storage_filter_extractable_none",

    PlacementBlock => "placement_block",
    PlacementItem => "placement_item",

    SchedulingDefault => "scheduling_default",
    SchedulingRoundRobin => "scheduling_round_robin",
    SchedulingRandom => "scheduling_random",

    OverlayOff => "overlay_off",
    OverlayOn => "overlay_on",
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for Icon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// What a toggle looks like for one value: icon, label and hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Appearance {
    icon: Icon,
    label: Cow<'static, str>,
    hint: Cow<'static, str>,
}

impl Appearance {
    /// Shown for any (setting, value) pair with no registered entry.
    pub const PLACEHOLDER: Appearance = Appearance {
        icon: Icon::ToolbarButtonBackground,
        label: Cow::Borrowed("Unknown Setting"),
        hint: Cow::Borrowed("No Such Message"),
    };

    pub fn new(
        icon: Icon,
        label: impl Into<Cow<'static, str>>,
        hint: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            icon,
            label: label.into(),
            hint: hint.into(),
        }
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Tooltip lines of a registered entry: label, then hint.
    pub fn tooltip(&self) -> Vec<&str> {
        vec![self.label(), self.hint()]
    }
}

/// Lookup key combining a setting with one of its values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppearanceKey {
    pub setting: Setting,
    pub value: AnyValue,
}

impl AppearanceKey {
    pub fn new(setting: Setting, value: impl Into<AnyValue>) -> Self {
        Self {
            setting,
            value: value.into(),
        }
    }
}

static PLACEHOLDER: Appearance = Appearance::PLACEHOLDER;

static GLOBAL: LazyLock<AppearanceRegistry> = LazyLock::new(AppearanceRegistry::builtin);

/// Maps (setting, value) pairs to their [`Appearance`].
#[derive(Debug, Clone, Default)]
pub struct AppearanceRegistry {
    entries: HashMap<AppearanceKey, Appearance>,
}

impl AppearanceRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry holding every built-in appearance.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        builtin::register_all(&mut registry);
        registry
    }

    /// Process-wide built-in registry, populated on first access.
    pub fn global() -> &'static AppearanceRegistry {
        &GLOBAL
    }

    /// Register an appearance for `(setting, value)`.
    ///
    /// Registering the same pair again replaces the earlier entry; the
    /// replaced entry is returned.
    pub fn register(
        &mut self,
        icon: Icon,
        setting: Setting,
        value: impl Into<AnyValue>,
        label: impl Into<Cow<'static, str>>,
        hint: impl Into<Cow<'static, str>>,
    ) -> Option<Appearance> {
        let key = AppearanceKey::new(setting, value);
        trace!(setting = %key.setting, value = %key.value, %icon, "register appearance");
        self.entries.insert(key, Appearance::new(icon, label, hint))
    }

    /// The registered appearance, if any.
    pub fn lookup(&self, setting: Setting, value: impl Into<AnyValue>) -> Option<&Appearance> {
        self.entries.get(&AppearanceKey::new(setting, value))
    }

    /// The registered appearance, or [`Appearance::PLACEHOLDER`] on a miss.
    pub fn resolve(&self, setting: Setting, value: impl Into<AnyValue>) -> &Appearance {
        self.lookup(setting, value).unwrap_or(&PLACEHOLDER)
    }

    /// Tooltip lines for `(setting, value)`.
    ///
    /// A registered entry gives label and hint; a miss gives only the
    /// placeholder hint. Decided by the lookup, not by the entry's contents.
    pub fn tooltip(&self, setting: Setting, value: impl Into<AnyValue>) -> Vec<&str> {
        match self.lookup(setting, value) {
            Some(appearance) => appearance.tooltip(),
            None => vec![PLACEHOLDER.hint()],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&AppearanceKey, &Appearance)> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{SortDir, YesNo};

    #[test]
    fn register_overwrites_and_returns_previous() {
        let mut registry = AppearanceRegistry::new();
        let first = registry.register(
            Icon::ArrowUp,
            Setting::SortDirection,
            SortDir::Ascending,
            "a",
            "b",
        );
        assert!(first.is_none());

        let second = registry.register(
            Icon::ArrowDown,
            Setting::SortDirection,
            SortDir::Ascending,
            "c",
            "d",
        );
        assert_eq!(second.map(|a| a.icon()), Some(Icon::ArrowUp));
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry
                .lookup(Setting::SortDirection, SortDir::Ascending)
                .map(Appearance::icon),
            Some(Icon::ArrowDown)
        );
    }

    #[test]
    fn same_value_under_different_settings_is_distinct() {
        let mut registry = AppearanceRegistry::new();
        registry.register(Icon::BlockingModeYes, Setting::Block, YesNo::Yes, "x", "y");
        assert!(registry.lookup(Setting::CraftOnly, YesNo::Yes).is_none());
    }

    #[test]
    fn icon_display_is_snake_case() {
        assert_eq!(
            Icon::ToolbarButtonBackground.to_string(),
            "toolbar_button_background"
        );
        assert_eq!(Icon::PowerUnitAe.to_string(), "power_unit_ae");
        assert_eq!(Icon::FuzzyPercent75.to_string(), "fuzzy_percent75");
        assert_eq!(format!("{:<10}|", Icon::ArrowUp), "arrow_up  |");
    }

    #[test]
    fn icon_names_are_unique() {
        let mut names: Vec<&str> = Icon::ALL.iter().map(|i| i.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Icon::ALL.len());
    }

    #[test]
    fn miss_tooltip_is_single_line() {
        let registry = AppearanceRegistry::new();
        assert_eq!(
            registry.tooltip(Setting::Block, YesNo::Yes),
            vec!["No Such Message"]
        );
    }
}
