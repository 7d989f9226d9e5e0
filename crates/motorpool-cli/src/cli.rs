//! CLI definition using clap

use clap::{Parser, Subcommand};
use motorpool_types::OutputFormat;

#[derive(Parser)]
#[command(name = "motorpool")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Explore a small vehicle hierarchy: kinds, defaults and is-a checks")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a sample car and truck and print what they report
    Demo,

    /// Build a vehicle and describe it
    Describe {
        /// Vehicle kind (vehicle, car, truck, motorcycle)
        kind: String,

        /// Manufacturer (e.g., "Ford")
        make: String,

        /// Model name (e.g., "F350")
        model: String,

        /// Fuel override. Uses the kind's default if not specified.
        #[arg(long)]
        fuel: Option<String>,
    },

    /// List every kind with its defaults and specializations
    Kinds,

    /// Check whether a vehicle of one kind is a member of another kind
    IsA {
        /// Kind of the vehicle to build
        kind: String,

        /// Kind to test membership of
        target: String,

        /// Manufacturer of the sample vehicle
        #[arg(long, default_value = "Ford")]
        make: String,

        /// Model of the sample vehicle
        #[arg(long, default_value = "Thunderbird")]
        model: String,
    },

    /// Check whether one kind is a specialization of another
    Specializes {
        /// Candidate specialization
        kind: String,

        /// Candidate parent
        parent: String,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_describe() {
        let cli = Cli::try_parse_from([
            "motorpool", "describe", "truck", "Ford", "F350", "--fuel", "electric",
        ])
        .unwrap();
        match cli.command {
            Commands::Describe { kind, make, model, fuel } => {
                assert_eq!(kind, "truck");
                assert_eq!(make, "Ford");
                assert_eq!(model, "F350");
                assert_eq!(fuel.as_deref(), Some("electric"));
            }
            _ => panic!("expected describe"),
        }
    }

    #[test]
    fn test_parse_global_format() {
        let cli = Cli::try_parse_from(["motorpool", "kinds", "--format", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Kinds));
    }

    #[test]
    fn test_kind_names_left_to_command() {
        let cli = Cli::try_parse_from(["motorpool", "specializes", "boat", "vehicle"]).unwrap();
        match cli.command {
            Commands::Specializes { kind, parent } => {
                assert_eq!(kind, "boat");
                assert_eq!(parent, "vehicle");
            }
            _ => panic!("expected specializes"),
        }
    }
}
