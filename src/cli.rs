//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::commands::CycleRequest;
use crate::config::{AppConfig, LoggingConfig, StateConfig};
use crate::settings::Setting;
use crate::valid_set::Direction;

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
    /// YAML
    Yaml,
}

/// Inspect and cycle enumerated setting toggles.
#[derive(Parser, Debug)]
#[command(name = "setting-toggle")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Load configuration from TOML file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log file path (default: setting-toggle.log)
    #[arg(long, global = true, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every setting with its possible values and their appearances
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Show the appearance of one setting value
    Show {
        /// Setting name (e.g. sort_by)
        #[arg(value_enum, ignore_case = true)]
        setting: Setting,
        /// Value name (e.g. amount)
        value: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Cycle a setting and print where it lands
    Cycle(CycleArgs),

    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
pub struct CycleArgs {
    /// Setting name (e.g. fuzzy_mode)
    #[arg(value_enum, ignore_case = true)]
    pub setting: Setting,

    /// Start from this value instead of the stored one
    #[arg(long, value_name = "VALUE")]
    pub from: Option<String>,

    /// Cycle backward
    #[arg(long, conflicts_with = "alternate")]
    pub backward: bool,

    /// Treat the activation as an alternate click (cycles backward)
    #[arg(long)]
    pub alternate: bool,

    /// Number of activations
    #[arg(long, default_value_t = 1)]
    pub steps: usize,

    /// Remove a value from the cycle (repeatable)
    #[arg(long, value_name = "VALUE")]
    pub exclude: Vec<String>,

    /// State file holding stored values
    #[arg(long, value_name = "FILE")]
    pub state: Option<PathBuf>,

    /// Write the resulting value back to the state file
    #[arg(long)]
    pub save: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl CycleArgs {
    pub fn direction(&self) -> Direction {
        if self.backward || self.alternate {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }

    pub fn to_request(&self) -> CycleRequest {
        CycleRequest {
            setting: self.setting,
            from: self.from.clone(),
            direction: self.direction(),
            steps: self.steps,
            exclude: self.exclude.clone(),
        }
    }
}

impl Cli {
    /// Convert CLI flags to an `AppConfig` layer for figment merging.
    ///
    /// Only flags set on the command line are populated, so the TOML file
    /// keeps any value the user did not override.
    pub fn to_config_overrides(&self) -> AppConfig {
        let state_path = match &self.command {
            Command::Cycle(args) => args.state.clone(),
            _ => None,
        };

        AppConfig {
            logging: LoggingConfig {
                file: self.log_file.clone(),
                level: self.log_level.clone(),
            },
            state: StateConfig { path: state_path },
            exclude: Default::default(),
        }
    }
}
