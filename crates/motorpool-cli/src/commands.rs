//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_kinds, output_query, output_vehicle};
use motorpool_app::config::Config;
use motorpool_app::{demo, report};
use motorpool_domain::VehicleKind;
use motorpool_types::{OutputFormat, Result};
use tracing::{debug, warn};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        warn!("{}; using default configuration", e);
        Config::default()
    });
    let format = cli.format.unwrap_or(config.output_format);
    debug!(%format, "resolved output format");

    match cli.command {
        Commands::Demo => demo::run_demo(&mut std::io::stdout().lock()),

        Commands::Describe {
            kind,
            make,
            model,
            fuel,
        } => {
            debug!(%kind, %make, %model, ?fuel, "describe");
            let kind: VehicleKind = kind.parse()?;
            let vehicle = report::describe(kind, &make, &model, fuel.as_deref());
            output_vehicle(format, &vehicle)
        }

        Commands::Kinds => output_kinds(format, &report::hierarchy()),

        Commands::IsA {
            kind,
            target,
            make,
            model,
        } => {
            debug!(%kind, %target, "is-a");
            let kind: VehicleKind = kind.parse()?;
            let target: VehicleKind = target.parse()?;
            output_query(format, &report::is_a(kind, &make, &model, target))
        }

        Commands::Specializes { kind, parent } => {
            debug!(%kind, %parent, "specializes");
            let kind: VehicleKind = kind.parse()?;
            let parent: VehicleKind = parent.parse()?;
            output_query(format, &report::specializes(kind, parent))
        }

        Commands::Config {
            show,
            set_output,
            reset,
        } => cmd_config(config, show, set_output, reset),
    }
}

fn cmd_config(
    mut config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    reset: bool,
) -> Result<()> {
    if reset {
        config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults.");
        return Ok(());
    }

    let mut modified = false;

    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
        println!("Output format set to: {}", format);
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
