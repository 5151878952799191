//! The built-in appearance table.

use std::borrow::Cow;

#[cfg(debug_assertions)]
use tracing::instrument;
use tracing::{debug, warn};

use super::{AppearanceRegistry, Icon};
use crate::settings::Setting;
use crate::values::{
    AccessRestriction, AnyValue, CondenserOutput, FullnessMode, FuzzyMode, LevelType,
    OperationMode, PowerUnits, RedstoneMode, RelativeDirection, SchedulingMode, SearchBoxMode,
    SortDir, SortOrder, StorageFilter, TerminalStyle, ViewItems, YesNo,
};

// Labels shared by several entries.
const CONDENSER_OUTPUT: &str = "Condenser Output";
const IO_MODE: &str = "Input/Output Mode";
const POWER_UNITS: &str = "Power Units";
const REDSTONE_MODE: &str = "Redstone Mode";
const TRANSFER_DIRECTION: &str = "Transfer Direction";
const TRANSFER_TO_CELL: &str = "Transfer data to Storage Cell";
const TRANSFER_TO_NETWORK: &str = "Transfer data to Network";
const SORT_ORDER: &str = "Sort Order";
const TOGGLE_SORT_DIRECTION: &str = "Click to toggle the order";
const SEARCH_MODE: &str = "Search Box Mode";
const LEVEL_TYPE: &str = "Level Type";
const TERMINAL_STYLE: &str = "Terminal Style";
const SORT_BY: &str = "Sort By";
const VIEW: &str = "View";
const FUZZY_MODE: &str = "Fuzzy Comparison";
const OPERATION_MODE: &str = "Operation Mode";
const BLOCKING_MODE: &str = "Blocking Mode";
const CRAFT: &str = "Crafting Behavior";
const EMITTER_MODE: &str = "Emitter Mode";
const REPORT_INACCESSIBLE: &str = "Report Inaccessible Items";
const BLOCK_PLACEMENT: &str = "Block Placement";
const SCHEDULING_MODE: &str = "Scheduling Mode";
const OVERLAY_MODE: &str = "Overlay Mode";

/// Registers every built-in appearance, warning about any pair registered twice.
#[cfg_attr(debug_assertions, instrument(skip_all))]
pub(super) fn register_all(registry: &mut AppearanceRegistry) {
    let mut reg = |icon: Icon,
                   setting: Setting,
                   value: AnyValue,
                   label: &'static str,
                   hint: Cow<'static, str>| {
        if registry
            .register(icon, setting, value, label, hint)
            .is_some()
        {
            warn!(%setting, %value, "built-in appearance registered twice");
        }
    };

    use Icon as I;
    use Setting as S;

    reg(
        I::CondenserOutputTrash,
        S::CondenserOutput,
        CondenserOutput::Trash.into(),
        CONDENSER_OUTPUT,
        "Trash".into(),
    );
    reg(
        I::CondenserOutputMatterBall,
        S::CondenserOutput,
        CondenserOutput::MatterBalls.into(),
        CONDENSER_OUTPUT,
        per_item_hint("Matter Balls", CondenserOutput::MatterBalls),
    );
    reg(
        I::CondenserOutputSingularity,
        S::CondenserOutput,
        CondenserOutput::Singularity.into(),
        CONDENSER_OUTPUT,
        per_item_hint("Singularity", CondenserOutput::Singularity),
    );

    reg(I::AccessRead, S::Access, AccessRestriction::Read.into(), IO_MODE, "Read Only".into());
    reg(I::AccessWrite, S::Access, AccessRestriction::Write.into(), IO_MODE, "Write Only".into());
    reg(
        I::AccessReadWrite,
        S::Access,
        AccessRestriction::ReadWrite.into(),
        IO_MODE,
        "Read / Write".into(),
    );

    // No EU entry; it has no icon.
    reg(
        I::PowerUnitAe,
        S::PowerUnits,
        PowerUnits::Ae.into(),
        POWER_UNITS,
        PowerUnits::Ae.symbol().into(),
    );
    reg(
        I::PowerUnitRf,
        S::PowerUnits,
        PowerUnits::Rf.into(),
        POWER_UNITS,
        PowerUnits::Rf.symbol().into(),
    );

    reg(
        I::RedstoneIgnore,
        S::RedstoneControlled,
        RedstoneMode::Ignore.into(),
        REDSTONE_MODE,
        "Always Active".into(),
    );
    reg(
        I::RedstoneLow,
        S::RedstoneControlled,
        RedstoneMode::LowSignal.into(),
        REDSTONE_MODE,
        "Active without signal".into(),
    );
    reg(
        I::RedstoneHigh,
        S::RedstoneControlled,
        RedstoneMode::HighSignal.into(),
        REDSTONE_MODE,
        "Active with signal".into(),
    );
    reg(
        I::RedstonePulse,
        S::RedstoneControlled,
        RedstoneMode::SignalPulse.into(),
        REDSTONE_MODE,
        "Active once per pulse".into(),
    );

    reg(
        I::RedstoneLow,
        S::RedstoneEmitter,
        RedstoneMode::LowSignal.into(),
        REDSTONE_MODE,
        "Emit when levels are below limit".into(),
    );
    reg(
        I::RedstoneHigh,
        S::RedstoneEmitter,
        RedstoneMode::HighSignal.into(),
        REDSTONE_MODE,
        "Emit when levels are above or equal to limit".into(),
    );

    reg(
        I::ArrowLeft,
        S::OperationMode,
        OperationMode::Fill.into(),
        TRANSFER_DIRECTION,
        TRANSFER_TO_CELL.into(),
    );
    reg(
        I::ArrowRight,
        S::OperationMode,
        OperationMode::Empty.into(),
        TRANSFER_DIRECTION,
        TRANSFER_TO_NETWORK.into(),
    );

    reg(
        I::ArrowLeft,
        S::IoDirection,
        RelativeDirection::Left.into(),
        TRANSFER_DIRECTION,
        TRANSFER_TO_CELL.into(),
    );
    reg(
        I::ArrowRight,
        S::IoDirection,
        RelativeDirection::Right.into(),
        TRANSFER_DIRECTION,
        TRANSFER_TO_NETWORK.into(),
    );

    reg(
        I::ArrowUp,
        S::SortDirection,
        SortDir::Ascending.into(),
        SORT_ORDER,
        TOGGLE_SORT_DIRECTION.into(),
    );
    reg(
        I::ArrowDown,
        S::SortDirection,
        SortDir::Descending.into(),
        SORT_ORDER,
        TOGGLE_SORT_DIRECTION.into(),
    );

    let search_modes = [
        (I::SearchAuto, SearchBoxMode::Autosearch, "Auto Search"),
        (I::SearchManual, SearchBoxMode::ManualSearch, "Standard Search"),
        (I::SearchAutoJei, SearchBoxMode::JeiAutosearch, "JEI Synchronized Search"),
        (
            I::SearchManualJei,
            SearchBoxMode::JeiManualSearch,
            "JEI Synchronized Standard Search",
        ),
        (I::SearchAutoKeep, SearchBoxMode::AutosearchKeep, "Auto Search - Keep"),
        (
            I::SearchManualKeep,
            SearchBoxMode::ManualSearchKeep,
            "Standard Search - Keep",
        ),
        (
            I::SearchAutoJeiKeep,
            SearchBoxMode::JeiAutosearchKeep,
            "JEI Synchronized Search - Keep",
        ),
        (
            I::SearchManualJeiKeep,
            SearchBoxMode::JeiManualSearchKeep,
            "JEI Synchronized Standard Search - Keep",
        ),
    ];
    for (icon, mode, hint) in search_modes {
        reg(icon, S::SearchMode, mode.into(), SEARCH_MODE, hint.into());
    }

    reg(I::LevelEnergy, S::LevelType, LevelType::EnergyLevel.into(), LEVEL_TYPE, "Energy".into());
    reg(I::LevelItem, S::LevelType, LevelType::ItemLevel.into(), LEVEL_TYPE, "Item".into());

    reg(
        I::TerminalStyleTall,
        S::TerminalStyle,
        TerminalStyle::Tall.into(),
        TERMINAL_STYLE,
        "Tall".into(),
    );
    reg(
        I::TerminalStyleSmall,
        S::TerminalStyle,
        TerminalStyle::Small.into(),
        TERMINAL_STYLE,
        "Small".into(),
    );
    reg(
        I::TerminalStyleFull,
        S::TerminalStyle,
        TerminalStyle::Full.into(),
        TERMINAL_STYLE,
        "Full".into(),
    );

    reg(I::SortByName, S::SortBy, SortOrder::Name.into(), SORT_BY, "Item Name".into());
    reg(I::SortByAmount, S::SortBy, SortOrder::Amount.into(), SORT_BY, "Number of Items".into());
    reg(I::SortByMod, S::SortBy, SortOrder::Mod.into(), SORT_BY, "Mod".into());

    reg(I::ViewModeStored, S::ViewMode, ViewItems::Stored.into(), VIEW, "Stored Items".into());
    reg(I::ViewModeAll, S::ViewMode, ViewItems::All.into(), VIEW, "Stored / Craftable".into());
    reg(I::ViewModeCrafting, S::ViewMode, ViewItems::Craftable.into(), VIEW, "Craftable".into());

    let fuzzy_modes = [
        (I::FuzzyPercent25, FuzzyMode::Percent25, "Percent 25"),
        (I::FuzzyPercent50, FuzzyMode::Percent50, "Percent 50"),
        (I::FuzzyPercent75, FuzzyMode::Percent75, "Percent 75"),
        (I::FuzzyPercent99, FuzzyMode::Percent99, "Percent 99"),
        (I::FuzzyIgnore, FuzzyMode::IgnoreAll, "Ignore All"),
    ];
    for (icon, mode, hint) in fuzzy_modes {
        reg(icon, S::FuzzyMode, mode.into(), FUZZY_MODE, hint.into());
    }

    reg(
        I::FullnessEmpty,
        S::FullnessMode,
        FullnessMode::Empty.into(),
        OPERATION_MODE,
        "Move when empty".into(),
    );
    reg(
        I::FullnessHalf,
        S::FullnessMode,
        FullnessMode::Half.into(),
        OPERATION_MODE,
        "Move when work is done".into(),
    );
    reg(
        I::FullnessFull,
        S::FullnessMode,
        FullnessMode::Full.into(),
        OPERATION_MODE,
        "Move when full".into(),
    );

    reg(
        I::BlockingModeYes,
        S::Block,
        YesNo::Yes.into(),
        BLOCKING_MODE,
        "Do not push crafting ingredients if there are already items in the target".into(),
    );
    reg(
        I::BlockingModeNo,
        S::Block,
        YesNo::No.into(),
        BLOCKING_MODE,
        "Push crafting ingredients regardless of the target's contents".into(),
    );

    reg(
        I::ViewModeCrafting,
        S::CraftOnly,
        YesNo::Yes.into(),
        CRAFT,
        "Only craft items, will not use stored items".into(),
    );
    reg(
        I::ViewModeAll,
        S::CraftOnly,
        YesNo::No.into(),
        CRAFT,
        "Use stored items, or craft items if none are stored".into(),
    );

    reg(
        I::PermissionCraft,
        S::CraftViaRedstone,
        YesNo::Yes.into(),
        EMITTER_MODE,
        "Emit redstone to craft item".into(),
    );
    reg(
        I::PermissionExtract,
        S::CraftViaRedstone,
        YesNo::No.into(),
        EMITTER_MODE,
        "Emit redstone while item is crafting".into(),
    );

    reg(
        I::StorageFilterExtractableOnly,
        S::StorageFilter,
        StorageFilter::ExtractableOnly.into(),
        REPORT_INACCESSIBLE,
        "No: Only extractable items will be visible".into(),
    );
    reg(
        I::StorageFilterExtractableNone,
        S::StorageFilter,
        StorageFilter::None.into(),
        REPORT_INACCESSIBLE,
        "Yes: Items that cannot be extracted will be visible".into(),
    );

    reg(
        I::PlacementBlock,
        S::PlaceBlock,
        YesNo::Yes.into(),
        BLOCK_PLACEMENT,
        "Blocks will be placed as blocks".into(),
    );
    reg(
        I::PlacementItem,
        S::PlaceBlock,
        YesNo::No.into(),
        BLOCK_PLACEMENT,
        "Blocks will be dropped as items".into(),
    );

    reg(
        I::SchedulingDefault,
        S::SchedulingMode,
        SchedulingMode::Default.into(),
        SCHEDULING_MODE,
        "Export the first item until the network is empty, then try the next ones".into(),
    );
    reg(
        I::SchedulingRoundRobin,
        S::SchedulingMode,
        SchedulingMode::RoundRobin.into(),
        SCHEDULING_MODE,
        "Export using round robin mode".into(),
    );
    reg(
        I::SchedulingRandom,
        S::SchedulingMode,
        SchedulingMode::Random.into(),
        SCHEDULING_MODE,
        "Export using random mode".into(),
    );

    reg(I::OverlayOff, S::OverlayMode, YesNo::No.into(), OVERLAY_MODE, "Hide the overlay".into());
    reg(I::OverlayOn, S::OverlayMode, YesNo::Yes.into(), OVERLAY_MODE, "Show the overlay".into());

    debug!(entries = registry.len(), "built-in appearances registered");
}

/// Hint for condenser outputs that cost power per item.
fn per_item_hint(name: &str, output: CondenserOutput) -> Cow<'static, str> {
    Cow::Owned(format!("{name} - {} per item", output.required_power()))
}
