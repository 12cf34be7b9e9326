//! The analysis configuration file.

use std::collections::HashSet;
use std::path::Path;

use clipscope_analysis::{DEFAULT_FUNDAMENTAL_BIN, DEFAULT_NUM_HARMONICS, HarmonicAnalyzer};
use clipscope_core::{
    DEFAULT_DRIVE, DEFAULT_KNEE, DEFAULT_SAMPLE_COUNT, ShaperCatalog, ShaperKind, SignalConfig,
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::validation::{
    DRIVE_RANGE, HARMONICS_RANGE, KNEE_RANGE, SAMPLE_COUNT_RANGE, ValidationError, check_count,
    check_range,
};

/// Parameters of one analysis pass.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Samples in the analysis window.
    pub sample_count: usize,
    /// Sine periods across the window.
    pub cycles: u32,
    /// DFT bin of the fundamental; must equal `cycles`.
    pub fundamental_bin: usize,
    /// Gain before shaping.
    pub drive: f32,
    /// Knee blend.
    pub knee: f32,
    /// Highest harmonic analyzed.
    pub harmonics: usize,
    /// Shaper keys to analyze, in display order.
    pub shapers: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            cycles: DEFAULT_FUNDAMENTAL_BIN as u32,
            fundamental_bin: DEFAULT_FUNDAMENTAL_BIN,
            drive: DEFAULT_DRIVE,
            knee: DEFAULT_KNEE,
            harmonics: DEFAULT_NUM_HARMONICS,
            shapers: ShaperCatalog::new().keys().map(str::to_string).collect(),
        }
    }
}

impl AnalysisConfig {
    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a configuration file and reject it unless it validates.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the configuration to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check ranges, bin alignment and shaper selection.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sample_count == 0 {
            return Err(ValidationError::EmptyWindow);
        }
        check_count("sample_count", self.sample_count, SAMPLE_COUNT_RANGE)?;
        check_range("drive", self.drive, DRIVE_RANGE)?;
        check_range("knee", self.knee, KNEE_RANGE)?;
        if self.cycles as usize != self.fundamental_bin {
            return Err(ValidationError::MisalignedBin {
                cycles: self.cycles,
                fundamental_bin: self.fundamental_bin,
            });
        }
        if self.harmonics == 0 {
            return Err(ValidationError::NoHarmonics);
        }
        check_count("harmonics", self.harmonics, HARMONICS_RANGE)?;
        self.shaper_kinds()?;
        Ok(())
    }

    /// Resolve the selected shaper keys, in order.
    pub fn shaper_kinds(&self) -> Result<Vec<ShaperKind>, ValidationError> {
        if self.shapers.is_empty() {
            return Err(ValidationError::EmptySelection);
        }

        let catalog = ShaperCatalog::new();
        let mut seen = HashSet::with_capacity(self.shapers.len());
        self.shapers
            .iter()
            .map(|key| {
                let kind = catalog
                    .kind(key)
                    .map_err(|_| ValidationError::UnknownShaper(key.clone()))?;
                if !seen.insert(kind) {
                    return Err(ValidationError::DuplicateShaper(key.clone()));
                }
                Ok(kind)
            })
            .collect()
    }

    /// Generator parameters.
    pub fn signal_config(&self) -> SignalConfig {
        SignalConfig::default()
            .with_sample_count(self.sample_count)
            .with_cycles(self.cycles as f32)
            .with_drive(self.drive)
            .with_knee(self.knee)
    }

    /// Analyzer parameters.
    pub fn analyzer(&self) -> HarmonicAnalyzer {
        HarmonicAnalyzer::new(self.fundamental_bin, self.harmonics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = AnalysisConfig::default();
        config.validate().unwrap();
        assert_eq!(config.shapers.len(), ShaperKind::ALL.len());
        assert_eq!(config.signal_config(), SignalConfig::default());
        assert_eq!(config.analyzer(), HarmonicAnalyzer::default());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = AnalysisConfig::from_toml("knee = 0.25").unwrap();
        assert_eq!(config.knee, 0.25);
        assert_eq!(config.sample_count, 1024);
        assert_eq!(config.harmonics, 16);
    }

    #[test]
    fn unknown_field_rejected() {
        let err = AnalysisConfig::from_toml("gain = 2.0").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn drive_out_of_range() {
        let config = AnalysisConfig {
            drive: 0.1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfRange { param: "drive", .. })
        ));
    }

    #[test]
    fn nan_knee_rejected() {
        let config = AnalysisConfig {
            knee: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfRange { param: "knee", .. })
        ));
    }

    #[test]
    fn misaligned_bin_rejected() {
        let config = AnalysisConfig {
            cycles: 5,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MisalignedBin {
                cycles: 5,
                fundamental_bin: 6
            })
        );
    }

    #[test]
    fn empty_window_rejected() {
        let config = AnalysisConfig {
            sample_count: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyWindow));
    }

    #[test]
    fn zero_harmonics_rejected() {
        let config = AnalysisConfig {
            harmonics: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::NoHarmonics));
    }

    #[test]
    fn oversized_window_rejected() {
        let config = AnalysisConfig {
            sample_count: 10_000_000_000,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfRange { param: "sample_count", .. })
        ));
    }

    #[test]
    fn harmonic_count_capped() {
        let config = AnalysisConfig {
            harmonics: 1 << 40,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::OutOfRange { param: "harmonics", .. })
        ));

        let config = AnalysisConfig {
            harmonics: 1024,
            ..Default::default()
        };
        config.validate().unwrap();
        // the analyzer still stops at Nyquist
        let entries = config.analyzer().analyze(&[0.0; 1024]);
        assert_eq!(entries.len(), 86);
    }

    #[test]
    fn shaper_selection_checked() {
        let mut config = AnalysisConfig::default();

        config.shapers = vec!["hard".into(), "wavefold".into()];
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownShaper("wavefold".into()))
        );

        config.shapers = vec!["hard".into(), "HARD".into()];
        assert_eq!(
            config.validate(),
            Err(ValidationError::DuplicateShaper("HARD".into()))
        );

        config.shapers.clear();
        assert_eq!(config.validate(), Err(ValidationError::EmptySelection));
    }

    #[test]
    fn shaper_kinds_keep_order() {
        let config = AnalysisConfig {
            shapers: vec!["softAtan".into(), "clean".into()],
            ..Default::default()
        };
        assert_eq!(
            config.shaper_kinds().unwrap(),
            [ShaperKind::SoftAtan, ShaperKind::Clean]
        );
    }
}
