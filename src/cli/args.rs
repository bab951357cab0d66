use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nexrad-locator")]
#[command(about = "Find NEXRAD weather radar stations near a place or coordinate")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(
        long,
        global = true,
        help = "Configuration file [default: nexrad-locator.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find radar stations within a radius. Prompts for a location when none is given.
    Find {
        #[arg(long, conflicts_with_all = ["lat", "lon"], help = "Place name to geocode")]
        city: Option<String>,

        #[arg(
            long,
            requires = "lon",
            allow_hyphen_values = true,
            help = "Latitude in decimal degrees"
        )]
        lat: Option<String>,

        #[arg(
            long,
            requires = "lat",
            allow_hyphen_values = true,
            help = "Longitude in decimal degrees"
        )]
        lon: Option<String>,

        #[arg(
            short,
            long,
            allow_negative_numbers = true,
            help = "Search radius in km [default: 200]"
        )]
        radius: Option<f64>,

        #[arg(short, long, help = "Output format: list, json or readable")]
        format: Option<String>,

        #[arg(short, long, help = "Station table CSV file")]
        stations: Option<PathBuf>,
    },

    /// Summarize the station table
    Info {
        #[arg(short, long, help = "Station table CSV file")]
        stations: Option<PathBuf>,
    },
}
