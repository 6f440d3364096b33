pub mod report;

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for echocat
#[derive(Parser, Debug)]
#[command(name = "echocat")]
#[command(about = "Bland-Altman agreement analysis for automated EF predictions")]
#[command(version)]
pub struct Cli {
    /// View key: comma-separated elementary views (plax_ef, ap2_ef, ap4_ef)
    /// or "all" for the full triple
    #[arg(value_name = "VIEW")]
    pub view: String,

    /// Path to the cardiologist overread table (JSON)
    #[arg(long, default_value = "cardio_dict.json")]
    pub overreads: PathBuf,

    /// Path to the algorithm prediction table (JSON)
    #[arg(long, default_value = "predicted_dict.json")]
    pub predictions: PathBuf,

    /// Output path for the rendered plot (PNG)
    #[arg(short, long, default_value = "bland_altman.png")]
    pub out: PathBuf,

    /// Output format for the summary
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format options
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format
    Text,
    /// JSON format
    Json,
}
