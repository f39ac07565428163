use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use skin_analysis::SkinType;

pub const CONFIG_ENV: &str = "SKINCHECK_CONFIG";

#[derive(Parser, Debug)]
#[command(
    name = "skincheck",
    version,
    about = "Score skincare labels against your skin profile"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity"
    )]
    pub verbose: u8,
    #[arg(long, global = true, env = CONFIG_ENV, help = "Analysis config (TOML)")]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a label for the user described by a JSON context file.
    Analyze {
        #[arg(long)]
        context: PathBuf,
        #[arg(long, conflicts_with = "label", required_unless_present = "label")]
        ingredients: Option<String>,
        #[arg(long, help = "File holding raw OCR text of the label")]
        label: Option<PathBuf>,
        #[command(flatten)]
        location: Location,
    },
    /// Show what one ingredient does for one goal.
    Lookup {
        ingredient: String,
        goal: String,
        #[arg(long, help = "oily, dry, combination, sensitive or normal")]
        skin_type: Option<SkinType>,
    },
    /// List ingredients worth looking for to serve a goal.
    Suggest {
        goal: String,
        #[arg(long, value_delimiter = ',')]
        exclude: Vec<String>,
        #[arg(long, default_value_t = 3)]
        limit: usize,
    },
}

/// Where and when the label is being used. Fills in season and climate the
/// context file leaves unset.
#[derive(Args, Clone, Debug, Default)]
pub struct Location {
    #[arg(long, allow_hyphen_values = true, help = "Latitude in degrees, negative in the south")]
    pub latitude: Option<f64>,
    #[arg(
        long,
        requires = "latitude",
        value_parser = clap::value_parser!(u32).range(1..=12),
        help = "Calendar month, 1-12"
    )]
    pub month: Option<u32>,
    #[arg(
        long,
        allow_hyphen_values = true,
        requires_all = ["latitude", "weather_code"],
        help = "Current temperature in Celsius"
    )]
    pub temp: Option<f64>,
    #[arg(long, requires = "temp", help = "WMO weather code of the current reading")]
    pub weather_code: Option<u16>,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Analyze { .. } => "analyze",
            Commands::Lookup { .. } => "lookup",
            Commands::Suggest { .. } => "suggest",
        }
    }
}
