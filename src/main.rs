//! CLI entry point for setting-toggle.

use std::io::Write;

use clap::{CommandFactory, Parser};
use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::Serialize;
use tracing::info;

use setting_toggle::appearance::AppearanceRegistry;
use setting_toggle::cli::{Cli, Command, OutputFormat};
use setting_toggle::commands;
use setting_toggle::config::AppConfig;
use setting_toggle::logging::init_logging;
use setting_toggle::state::SettingValues;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    if let Command::Completions { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            "setting-toggle",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref(), &cli.to_config_overrides())
        .wrap_err("Failed to load configuration")?;

    // Held until exit so buffered log lines are flushed
    let _guard = init_logging(
        config.logging.file.as_deref(),
        config.logging.level.as_deref(),
    );
    info!(command = ?cli.command, "starting");

    let registry = AppearanceRegistry::global();

    match &cli.command {
        Command::List { format } => {
            let reports = commands::list(registry, &config);
            emit(&reports, *format, |r| commands::render_list(r))?;
        }
        Command::Show {
            setting,
            value,
            format,
        } => {
            let report = commands::show(registry, *setting, value)?;
            emit(&report, *format, commands::render_show)?;
        }
        Command::Cycle(args) => {
            let state_path = config.state.path.clone();
            let mut state = match &state_path {
                Some(path) => SettingValues::load_or_default(path)
                    .wrap_err_with(|| format!("Failed to read state from {}", path.display()))?,
                None => SettingValues::new(),
            };

            let report = commands::cycle(registry, &config, &args.to_request(), &mut state)?;

            if args.save {
                let path = state_path
                    .ok_or_else(|| eyre!("--save needs --state or a [state] path in the config"))?;
                state
                    .save(&path)
                    .wrap_err_with(|| format!("Failed to write state to {}", path.display()))?;
                eprintln!("Saved {} to {}", report.setting, path.display());
            }

            emit(&report, args.format, commands::render_cycle)?;
        }
        // Handled before config load
        Command::Completions { .. } => {}
    }

    Ok(())
}

/// Print `report` in the requested format.
fn emit<T: Serialize>(
    report: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    let out = match format {
        OutputFormat::Text => text(report),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(report).wrap_err("Failed to serialize JSON")?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(report).wrap_err("Failed to serialize YAML")?,
    };

    std::io::stdout()
        .write_all(out.as_bytes())
        .wrap_err("Failed to write output")?;
    Ok(())
}
