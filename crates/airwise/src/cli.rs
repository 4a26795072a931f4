use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "airwise")]
#[command(version)]
#[command(about = "Air-quality readings, forecasts and outdoor-activity advice")]
pub struct Cli {
    /// Path to a JSON configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the current reading
    Status,

    /// Show the 24-hour forecast
    Forecast,

    /// Recommend the cleanest hours of the forecast
    BestHours {
        /// Number of hours to return
        #[arg(short, long, default_value_t = 3)]
        count: usize,
    },

    /// Show the last seven days of readings
    History,

    /// Show the category for an AQI value
    Classify {
        #[arg(allow_negative_numbers = true)]
        aqi: i64,
    },

    /// Ask the assistant a single question
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Chat with the assistant interactively
    Chat,

    /// Print version information
    Version,
}
