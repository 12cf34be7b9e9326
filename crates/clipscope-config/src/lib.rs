//! Configuration for clipscope analysis runs.
//!
//! One TOML file fixes the analysis window, the drive and knee, the number of
//! harmonics and which shapers to compare. Every field is optional; missing
//! fields take the defaults below.
//!
//! ```toml
//! sample_count = 1024
//! cycles = 6
//! fundamental_bin = 6
//! drive = 1.0
//! knee = 0.0
//! harmonics = 16
//! shapers = ["clean", "hard", "softTanh", "softCubic", "softAtan", "foldback"]
//! ```
//!
//! # Example
//!
//! ```rust
//! use clipscope_config::AnalysisConfig;
//!
//! let config = AnalysisConfig::from_toml("drive = 3.0\nshapers = [\"hard\"]").unwrap();
//! config.validate().unwrap();
//!
//! assert_eq!(config.signal_config().drive, 3.0);
//! assert_eq!(config.analyzer().fundamental_bin(), 6);
//! ```

mod config;
mod error;

/// Platform-specific configuration paths.
pub mod paths;

/// Range and consistency checks.
pub mod validation;

pub use config::AnalysisConfig;
pub use error::ConfigError;
pub use paths::{ensure_user_config_dir, find_user_config, user_config_dir, user_config_path};
pub use validation::{
    DRIVE_RANGE, HARMONICS_RANGE, KNEE_RANGE, SAMPLE_COUNT_RANGE, ValidationError,
};
