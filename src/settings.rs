//! Setting identifiers and the static table of values each one accepts.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::values::{
    AccessRestriction, AnyValue, CondenserOutput, FullnessMode, FuzzyMode, LevelType,
    OperationMode, PowerUnits, RedstoneMode, RelativeDirection, SchedulingMode, SearchBoxMode,
    SortDir, SortOrder, StorageFilter, TerminalStyle, ValueKind, ViewItems, YesNo,
};

/// A configurable aspect exposed through a toggle control.
///
/// Several settings may share one value type (e.g. every yes/no switch);
/// they differ in which values they accept and how those values look.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum Setting {
    #[value(alias = "condenser-output")]
    CondenserOutput,
    Access,
    #[value(alias = "power-units")]
    PowerUnits,
    #[value(alias = "redstone-controlled")]
    RedstoneControlled,
    #[value(alias = "redstone-emitter")]
    RedstoneEmitter,
    #[value(alias = "operation-mode")]
    OperationMode,
    #[value(alias = "io-direction")]
    IoDirection,
    #[value(alias = "sort-direction")]
    SortDirection,
    #[value(alias = "search-mode")]
    SearchMode,
    #[value(alias = "level-type")]
    LevelType,
    #[value(alias = "terminal-style")]
    TerminalStyle,
    #[value(alias = "sort-by")]
    SortBy,
    #[value(alias = "view-mode")]
    ViewMode,
    #[value(alias = "fuzzy-mode")]
    FuzzyMode,
    #[value(alias = "fullness-mode")]
    FullnessMode,
    Block,
    #[value(alias = "craft-only")]
    CraftOnly,
    #[value(alias = "craft-via-redstone")]
    CraftViaRedstone,
    #[value(alias = "storage-filter")]
    StorageFilter,
    #[value(alias = "place-block")]
    PlaceBlock,
    #[value(alias = "scheduling-mode")]
    SchedulingMode,
    #[value(alias = "overlay-mode")]
    OverlayMode,
}

const CONDENSER_OUTPUT: &[AnyValue] = &[
    AnyValue::CondenserOutput(CondenserOutput::Trash),
    AnyValue::CondenserOutput(CondenserOutput::MatterBalls),
    AnyValue::CondenserOutput(CondenserOutput::Singularity),
];

const ACCESS: &[AnyValue] = &[
    AnyValue::AccessRestriction(AccessRestriction::Read),
    AnyValue::AccessRestriction(AccessRestriction::Write),
    AnyValue::AccessRestriction(AccessRestriction::ReadWrite),
];

// EU has no appearance, so it is not offered.
const POWER_UNITS: &[AnyValue] = &[
    AnyValue::PowerUnits(PowerUnits::Ae),
    AnyValue::PowerUnits(PowerUnits::Rf),
];

const REDSTONE_CONTROLLED: &[AnyValue] = &[
    AnyValue::RedstoneMode(RedstoneMode::Ignore),
    AnyValue::RedstoneMode(RedstoneMode::LowSignal),
    AnyValue::RedstoneMode(RedstoneMode::HighSignal),
    AnyValue::RedstoneMode(RedstoneMode::SignalPulse),
];

const REDSTONE_EMITTER: &[AnyValue] = &[
    AnyValue::RedstoneMode(RedstoneMode::LowSignal),
    AnyValue::RedstoneMode(RedstoneMode::HighSignal),
];

const OPERATION_MODE: &[AnyValue] = &[
    AnyValue::OperationMode(OperationMode::Fill),
    AnyValue::OperationMode(OperationMode::Empty),
];

const IO_DIRECTION: &[AnyValue] = &[
    AnyValue::RelativeDirection(RelativeDirection::Left),
    AnyValue::RelativeDirection(RelativeDirection::Right),
];

const SORT_DIRECTION: &[AnyValue] = &[
    AnyValue::SortDir(SortDir::Ascending),
    AnyValue::SortDir(SortDir::Descending),
];

const SEARCH_MODE: &[AnyValue] = &[
    AnyValue::SearchBoxMode(SearchBoxMode::Autosearch),
    AnyValue::SearchBoxMode(SearchBoxMode::ManualSearch),
    AnyValue::SearchBoxMode(SearchBoxMode::JeiAutosearch),
    AnyValue::SearchBoxMode(SearchBoxMode::JeiManualSearch),
    AnyValue::SearchBoxMode(SearchBoxMode::AutosearchKeep),
    AnyValue::SearchBoxMode(SearchBoxMode::ManualSearchKeep),
    AnyValue::SearchBoxMode(SearchBoxMode::JeiAutosearchKeep),
    AnyValue::SearchBoxMode(SearchBoxMode::JeiManualSearchKeep),
];

const LEVEL_TYPE: &[AnyValue] = &[
    AnyValue::LevelType(LevelType::ItemLevel),
    AnyValue::LevelType(LevelType::EnergyLevel),
];

const TERMINAL_STYLE: &[AnyValue] = &[
    AnyValue::TerminalStyle(TerminalStyle::Tall),
    AnyValue::TerminalStyle(TerminalStyle::Full),
    AnyValue::TerminalStyle(TerminalStyle::Small),
];

const SORT_BY: &[AnyValue] = &[
    AnyValue::SortOrder(SortOrder::Name),
    AnyValue::SortOrder(SortOrder::Amount),
    AnyValue::SortOrder(SortOrder::Mod),
];

const VIEW_MODE: &[AnyValue] = &[
    AnyValue::ViewItems(ViewItems::All),
    AnyValue::ViewItems(ViewItems::Stored),
    AnyValue::ViewItems(ViewItems::Craftable),
];

const FUZZY_MODE: &[AnyValue] = &[
    AnyValue::FuzzyMode(FuzzyMode::IgnoreAll),
    AnyValue::FuzzyMode(FuzzyMode::Percent99),
    AnyValue::FuzzyMode(FuzzyMode::Percent75),
    AnyValue::FuzzyMode(FuzzyMode::Percent50),
    AnyValue::FuzzyMode(FuzzyMode::Percent25),
];

const FULLNESS_MODE: &[AnyValue] = &[
    AnyValue::FullnessMode(FullnessMode::Empty),
    AnyValue::FullnessMode(FullnessMode::Half),
    AnyValue::FullnessMode(FullnessMode::Full),
];

// Shared by every plain yes/no switch; `undecided` is never offered.
const YES_NO: &[AnyValue] = &[AnyValue::YesNo(YesNo::Yes), AnyValue::YesNo(YesNo::No)];

const STORAGE_FILTER: &[AnyValue] = &[
    AnyValue::StorageFilter(StorageFilter::None),
    AnyValue::StorageFilter(StorageFilter::ExtractableOnly),
];

const SCHEDULING_MODE: &[AnyValue] = &[
    AnyValue::SchedulingMode(SchedulingMode::Default),
    AnyValue::SchedulingMode(SchedulingMode::RoundRobin),
    AnyValue::SchedulingMode(SchedulingMode::Random),
];

impl Setting {
    /// Every setting, in declaration order.
    pub const ALL: &'static [Self] = &[
        Self::CondenserOutput,
        Self::Access,
        Self::PowerUnits,
        Self::RedstoneControlled,
        Self::RedstoneEmitter,
        Self::OperationMode,
        Self::IoDirection,
        Self::SortDirection,
        Self::SearchMode,
        Self::LevelType,
        Self::TerminalStyle,
        Self::SortBy,
        Self::ViewMode,
        Self::FuzzyMode,
        Self::FullnessMode,
        Self::Block,
        Self::CraftOnly,
        Self::CraftViaRedstone,
        Self::StorageFilter,
        Self::PlaceBlock,
        Self::SchedulingMode,
        Self::OverlayMode,
    ];

    /// Stable snake_case name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::CondenserOutput => "condenser_output",
            Self::Access => "access",
            Self::PowerUnits => "power_units",
            Self::RedstoneControlled => "redstone_controlled",
            Self::RedstoneEmitter => "redstone_emitter",
            Self::OperationMode => "operation_mode",
            Self::IoDirection => "io_direction",
            Self::SortDirection => "sort_direction",
            Self::SearchMode => "search_mode",
            Self::LevelType => "level_type",
            Self::TerminalStyle => "terminal_style",
            Self::SortBy => "sort_by",
            Self::ViewMode => "view_mode",
            Self::FuzzyMode => "fuzzy_mode",
            Self::FullnessMode => "fullness_mode",
            Self::Block => "block",
            Self::CraftOnly => "craft_only",
            Self::CraftViaRedstone => "craft_via_redstone",
            Self::StorageFilter => "storage_filter",
            Self::PlaceBlock => "place_block",
            Self::SchedulingMode => "scheduling_mode",
            Self::OverlayMode => "overlay_mode",
        }
    }

    /// The value domain this setting draws from.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Self::CondenserOutput => ValueKind::CondenserOutput,
            Self::Access => ValueKind::AccessRestriction,
            Self::PowerUnits => ValueKind::PowerUnits,
            Self::RedstoneControlled | Self::RedstoneEmitter => ValueKind::RedstoneMode,
            Self::OperationMode => ValueKind::OperationMode,
            Self::IoDirection => ValueKind::RelativeDirection,
            Self::SortDirection => ValueKind::SortDir,
            Self::SearchMode => ValueKind::SearchBoxMode,
            Self::LevelType => ValueKind::LevelType,
            Self::TerminalStyle => ValueKind::TerminalStyle,
            Self::SortBy => ValueKind::SortOrder,
            Self::ViewMode => ValueKind::ViewItems,
            Self::FuzzyMode => ValueKind::FuzzyMode,
            Self::FullnessMode => ValueKind::FullnessMode,
            Self::Block
            | Self::CraftOnly
            | Self::CraftViaRedstone
            | Self::PlaceBlock
            | Self::OverlayMode => ValueKind::YesNo,
            Self::StorageFilter => ValueKind::StorageFilter,
            Self::SchedulingMode => ValueKind::SchedulingMode,
        }
    }

    /// Values this setting accepts, in declaration order.
    ///
    /// This is independent of any control; a control further narrows it with
    /// its own predicate.
    pub fn possible_values(self) -> &'static [AnyValue] {
        match self {
            Self::CondenserOutput => CONDENSER_OUTPUT,
            Self::Access => ACCESS,
            Self::PowerUnits => POWER_UNITS,
            Self::RedstoneControlled => REDSTONE_CONTROLLED,
            Self::RedstoneEmitter => REDSTONE_EMITTER,
            Self::OperationMode => OPERATION_MODE,
            Self::IoDirection => IO_DIRECTION,
            Self::SortDirection => SORT_DIRECTION,
            Self::SearchMode => SEARCH_MODE,
            Self::LevelType => LEVEL_TYPE,
            Self::TerminalStyle => TERMINAL_STYLE,
            Self::SortBy => SORT_BY,
            Self::ViewMode => VIEW_MODE,
            Self::FuzzyMode => FUZZY_MODE,
            Self::FullnessMode => FULLNESS_MODE,
            Self::Block
            | Self::CraftOnly
            | Self::CraftViaRedstone
            | Self::PlaceBlock
            | Self::OverlayMode => YES_NO,
            Self::StorageFilter => STORAGE_FILTER,
            Self::SchedulingMode => SCHEDULING_MODE,
        }
    }

    /// Whether `value` is one of [`Self::possible_values`].
    pub fn accepts(self, value: impl Into<AnyValue>) -> bool {
        self.possible_values().contains(&value.into())
    }

    /// Parse a value name against this setting's whole domain.
    ///
    /// Values outside [`Self::possible_values`] still parse; restoring such a
    /// value is allowed, it just cannot be reached by cycling.
    pub fn parse_value(self, name: &str) -> Option<AnyValue> {
        self.value_kind().parse(name)
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Parses config and state file keys with the same names and aliases the
/// command line accepts, ignoring ASCII case.
impl FromStr for Setting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s.trim(), true)
    }
}
