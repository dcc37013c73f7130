use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gembatch")]
#[command(about = "Batch prompt runner for the Gemini generateContent API")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct Cli {
    /// Text file with one prompt per line
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Where to write the collected responses
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the configured API endpoint
    #[arg(long)]
    pub url: Option<String>,

    /// Override the configured API key
    #[arg(long)]
    pub api_key: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config file
    Init,
    /// Show configuration
    Config,
    /// Show version information
    Version,
}
