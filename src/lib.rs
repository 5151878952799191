//! Enumerated setting toggles.
//!
//! A [`ToggleControl`] holds the current value of one setting and cycles it
//! through the values that setting offers, wrapping at both ends. What each
//! value looks like (icon, label and hint) comes from an
//! [`AppearanceRegistry`] passed in when the control is built.

pub mod appearance;
pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod settings;
pub mod state;
pub mod toggle;
pub mod valid_set;
pub mod values;

pub use appearance::{Appearance, AppearanceKey, AppearanceRegistry, Icon};
pub use settings::Setting;
pub use toggle::{Activation, ToggleControl};
pub use valid_set::{Direction, ValidSet};
pub use values::{AnyValue, SettingValue, ValueKind};
