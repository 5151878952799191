//! Closed value domains for every configurable setting.
//!
//! Each value type is a fieldless enum whose declaration order is its
//! cycling order. [`AnyValue`] erases the concrete type so values of
//! different domains can share one lookup table.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize, Serializer};

/// A member of a closed, ordered enumeration domain.
pub trait SettingValue:
    Copy + Eq + Hash + fmt::Debug + Into<AnyValue> + TryFrom<AnyValue> + 'static
{
    /// Which domain this type is.
    const KIND: ValueKind;

    /// The whole domain, in declaration order.
    const ALL: &'static [Self];

    /// Stable snake_case name (used in config files and on the command line).
    fn name(self) -> &'static str;

    /// Position in [`Self::ALL`].
    fn ordinal(self) -> usize;

    /// Look a value up by name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }
}

/// Defines the value enums together with their type-erased wrapper.
macro_rules! setting_values {
    (
        $(
            $(#[$meta:meta])*
            $kind:ident {
                $( $(#[$vmeta:meta])* $variant:ident => $name:literal ),+
                $(,)?
            }
        )+
    ) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            pub enum $kind {
                $( $(#[$vmeta])* #[serde(rename = $name)] $variant ),+
            }

            impl SettingValue for $kind {
                const KIND: ValueKind = ValueKind::$kind;
                const ALL: &'static [Self] = &[$(Self::$variant),+];

                fn name(self) -> &'static str {
                    match self {
                        $(Self::$variant => $name),+
                    }
                }

                fn ordinal(self) -> usize {
                    self as usize
                }
            }

            impl fmt::Display for $kind {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.pad(self.name())
                }
            }

            impl From<$kind> for AnyValue {
                fn from(value: $kind) -> Self {
                    Self::$kind(value)
                }
            }

            impl TryFrom<AnyValue> for $kind {
                type Error = AnyValue;

                fn try_from(value: AnyValue) -> Result<Self, AnyValue> {
                    match value {
                        AnyValue::$kind(v) => Ok(v),
                        other => Err(other),
                    }
                }
            }
        )+

        /// Identifies a value domain (the "declaring type" of a value).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ValueKind {
            $($kind),+
        }

        impl ValueKind {
            /// Every value of this domain, type-erased, in declaration order.
            pub fn domain(self) -> Vec<AnyValue> {
                match self {
                    $(Self::$kind => $kind::ALL.iter().copied().map(AnyValue::from).collect()),+
                }
            }

            /// Type name, for diagnostics.
            pub fn type_name(self) -> &'static str {
                match self {
                    $(Self::$kind => stringify!($kind)),+
                }
            }
        }

        /// A value from any domain.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum AnyValue {
            $($kind($kind)),+
        }

        impl AnyValue {
            pub fn kind(self) -> ValueKind {
                match self {
                    $(Self::$kind(_) => ValueKind::$kind),+
                }
            }

            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$kind(v) => v.name()),+
                }
            }

            pub fn ordinal(self) -> usize {
                match self {
                    $(Self::$kind(v) => v.ordinal()),+
                }
            }
        }
    };
}

setting_values! {
    /// What a condenser does with its input.
    CondenserOutput {
        Trash => "trash",
        MatterBalls => "matter_balls",
        Singularity => "singularity",
    }

    /// Read/write permissions of a storage bus or cell.
    AccessRestriction {
        NoAccess => "no_access",
        Read => "read",
        Write => "write",
        ReadWrite => "read_write",
    }

    /// Unit used to display power.
    PowerUnits {
        Ae => "ae",
        Eu => "eu",
        Rf => "rf",
    }

    RedstoneMode {
        Ignore => "ignore",
        LowSignal => "low_signal",
        HighSignal => "high_signal",
        SignalPulse => "signal_pulse",
    }

    OperationMode {
        Fill => "fill",
        Empty => "empty",
    }

    RelativeDirection {
        Left => "left",
        Right => "right",
        Up => "up",
        Down => "down",
    }

    SortDir {
        Ascending => "ascending",
        Descending => "descending",
    }

    /// Search box behavior in terminals.
    SearchBoxMode {
        Autosearch => "autosearch",
        ManualSearch => "manual_search",
        JeiAutosearch => "jei_autosearch",
        JeiManualSearch => "jei_manual_search",
        AutosearchKeep => "autosearch_keep",
        ManualSearchKeep => "manual_search_keep",
        JeiAutosearchKeep => "jei_autosearch_keep",
        JeiManualSearchKeep => "jei_manual_search_keep",
    }

    LevelType {
        ItemLevel => "item_level",
        EnergyLevel => "energy_level",
    }

    TerminalStyle {
        Tall => "tall",
        Full => "full",
        Small => "small",
    }

    SortOrder {
        Name => "name",
        Amount => "amount",
        Mod => "mod",
    }

    ViewItems {
        All => "all",
        Stored => "stored",
        Craftable => "craftable",
    }

    /// Damage tolerance when comparing items.
    FuzzyMode {
        IgnoreAll => "ignore_all",
        Percent99 => "percent_99",
        Percent75 => "percent_75",
        Percent50 => "percent_50",
        Percent25 => "percent_25",
    }

    FullnessMode {
        Empty => "empty",
        Half => "half",
        Full => "full",
    }

    YesNo {
        Yes => "yes",
        No => "no",
        Undecided => "undecided",
    }

    StorageFilter {
        None => "none",
        ExtractableOnly => "extractable_only",
    }

    SchedulingMode {
        Default => "default",
        RoundRobin => "roundrobin",
        Random => "random",
    }
}

impl CondenserOutput {
    /// Power required per item for this output.
    pub fn required_power(self) -> u32 {
        match self {
            Self::Trash => 0,
            Self::MatterBalls => 256,
            Self::Singularity => 256_000,
        }
    }
}

impl PowerUnits {
    /// Short symbol shown in the UI.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Ae => "AE",
            Self::Eu => "EU",
            Self::Rf => "RF",
        }
    }
}

impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl Serialize for AnyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl ValueKind {
    /// Parse a value name within this domain, ignoring ASCII case.
    pub fn parse(self, name: &str) -> Option<AnyValue> {
        self.domain()
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (i, v) in FuzzyMode::ALL.iter().enumerate() {
            assert_eq!(v.ordinal(), i);
        }
    }

    #[test]
    fn any_value_round_trips_through_try_from() {
        let any: AnyValue = SortOrder::Amount.into();
        assert_eq!(any.kind(), ValueKind::SortOrder);
        assert_eq!(SortOrder::try_from(any), Ok(SortOrder::Amount));
        assert!(SortDir::try_from(any).is_err());
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(YesNo::from_name("YES"), Some(YesNo::Yes));
        assert_eq!(YesNo::from_name("maybe"), None);
    }
}
