//! Shared CLI helpers used across multiple commands.

use clap::Args;
use clipscope_config::{AnalysisConfig, find_user_config};
use std::path::{Path, PathBuf};

/// Signal parameters that override the configuration file.
#[derive(Args, Debug, Default)]
pub struct SignalArgs {
    /// Input gain before shaping, 0.5 to 6
    #[arg(long)]
    pub drive: Option<f32>,

    /// Knee blend, 0 to 1
    #[arg(long)]
    pub knee: Option<f32>,

    /// Samples in the analysis window
    #[arg(long)]
    pub samples: Option<usize>,

    /// Sine periods in the window (also moves the fundamental bin)
    #[arg(long)]
    pub cycles: Option<u32>,
}

impl SignalArgs {
    /// Apply the overrides that were given.
    pub fn apply(&self, config: &mut AnalysisConfig) {
        if let Some(drive) = self.drive {
            config.drive = drive;
        }
        if let Some(knee) = self.knee {
            config.knee = knee;
        }
        if let Some(samples) = self.samples {
            config.sample_count = samples;
        }
        if let Some(cycles) = self.cycles {
            config.cycles = cycles;
            config.fundamental_bin = cycles as usize;
        }
    }
}

/// Locate the configuration file to use, if any.
///
/// Searches in this order:
/// 1. The `--config` path, if given
/// 2. The user config file, if it exists
pub fn config_file(path: Option<&Path>) -> Option<PathBuf> {
    path.map(Path::to_path_buf).or_else(find_user_config)
}

/// Load the configuration file, or built-in defaults when there is none.
///
/// The result is not validated; callers apply their overrides first.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AnalysisConfig> {
    match config_file(path) {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            Ok(AnalysisConfig::load(&path)?)
        }
        None => {
            tracing::debug!("no config file, using defaults");
            Ok(AnalysisConfig::default())
        }
    }
}

/// Format a dB value, showing the negligible sentinel as `-`.
pub fn format_db(db: f32, significant: bool) -> String {
    if significant {
        format!("{:8.2}", db)
    } else {
        format!("{:>8}", "-")
    }
}
