//! Clipscope CLI - waveshaper harmonic analysis from the terminal.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "clipscope")]
#[command(author, version, about = "Waveshaper harmonic analysis", long_about = None)]
struct Cli {
    /// Configuration file (defaults to the user config file when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available shapers
    Shapers(commands::shapers::ShapersArgs),

    /// Analyze the harmonics and residual of one or more shapers
    Analyze(commands::analyze::AnalyzeArgs),

    /// Dump reference, shaped and residual samples
    Waveform(commands::waveform::WaveformArgs),

    /// Show or create configuration files
    Config(commands::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so tables and JSON on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Shapers(args) => commands::shapers::run(args),
        Commands::Analyze(args) => commands::analyze::run(args, config),
        Commands::Waveform(args) => commands::waveform::run(args, config),
        Commands::Config(args) => commands::config::run(args, config),
    }
}
