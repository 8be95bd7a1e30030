//! Experiment Config Record - per-year simulation configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Experiment Config describes one Duernast experiment year.
///
/// Each record carries the file-naming stems and behavioral flags the
/// pipeline needs to locate inputs and shape outputs for a season.
///
/// Records are validated at construction: a multi-year experiment must
/// name the supplementary weather file covering the preceding season,
/// and a single-year experiment must not. An inconsistent record cannot
/// be built or deserialized.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "RawExperimentConfig")]
pub struct ExperimentConfig {
    year: i32,
    experiment_name: String,
    file_prefix: String,
    output_prefix: String,
    crop_type: String,
    is_multi_year: bool,
    normalize_das: bool,
    experiment_dir: String,
    additional_weather_file: Option<String>,
}

impl ExperimentConfig {
    /// Create a builder for constructing an experiment configuration.
    ///
    /// # Arguments
    ///
    /// * `year` - Season key, also the registry index
    /// * `experiment_name` - Human-readable identifier, e.g. "DUERNAST2015"
    #[must_use]
    pub fn builder(year: i32, experiment_name: impl Into<String>) -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::new(year, experiment_name)
    }

    /// Get the experiment year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Get the experiment name.
    #[must_use]
    pub fn experiment_name(&self) -> &str {
        &self.experiment_name
    }

    /// Get the filename stem used to locate per-experiment input files.
    #[must_use]
    pub fn file_prefix(&self) -> &str {
        &self.file_prefix
    }

    /// Get the filename stem used when writing output files.
    #[must_use]
    pub fn output_prefix(&self) -> &str {
        &self.output_prefix
    }

    /// Get the crop label, e.g. "Spring Wheat".
    #[must_use]
    pub fn crop_type(&self) -> &str {
        &self.crop_type
    }

    /// Whether the experiment spans more than one growing season.
    #[must_use]
    pub const fn is_multi_year(&self) -> bool {
        self.is_multi_year
    }

    /// Whether days-after-sowing values must be normalized before display.
    #[must_use]
    pub const fn normalize_das(&self) -> bool {
        self.normalize_das
    }

    /// Get the directory name holding the experiment's files.
    #[must_use]
    pub fn experiment_dir(&self) -> &str {
        &self.experiment_dir
    }

    /// Get the supplementary weather file, set only for multi-year
    /// experiments.
    #[must_use]
    pub fn additional_weather_file(&self) -> Option<&str> {
        self.additional_weather_file.as_deref()
    }
}

/// Builder for [`ExperimentConfig`].
///
/// `build` runs the weather-file validation, so every record that leaves
/// the builder satisfies the multi-year rule.
#[derive(Debug)]
pub struct ExperimentConfigBuilder {
    year: i32,
    experiment_name: String,
    file_prefix: String,
    output_prefix: String,
    crop_type: String,
    is_multi_year: bool,
    normalize_das: bool,
    experiment_dir: String,
    additional_weather_file: Option<String>,
}

impl ExperimentConfigBuilder {
    /// Create a new builder with the identifying fields.
    #[must_use]
    pub fn new(year: i32, experiment_name: impl Into<String>) -> Self {
        Self {
            year,
            experiment_name: experiment_name.into(),
            file_prefix: String::new(),
            output_prefix: String::new(),
            crop_type: String::new(),
            is_multi_year: false,
            normalize_das: false,
            experiment_dir: String::new(),
            additional_weather_file: None,
        }
    }

    /// Set the input filename stem, e.g. "TUDU1501".
    #[must_use]
    pub fn file_prefix(mut self, file_prefix: impl Into<String>) -> Self {
        self.file_prefix = file_prefix.into();
        self
    }

    /// Set the output filename stem, e.g. "duernast_2015".
    #[must_use]
    pub fn output_prefix(mut self, output_prefix: impl Into<String>) -> Self {
        self.output_prefix = output_prefix.into();
        self
    }

    /// Set the crop label.
    #[must_use]
    pub fn crop_type(mut self, crop_type: impl Into<String>) -> Self {
        self.crop_type = crop_type.into();
        self
    }

    /// Mark the experiment as spanning more than one growing season.
    #[must_use]
    pub const fn multi_year(mut self, is_multi_year: bool) -> Self {
        self.is_multi_year = is_multi_year;
        self
    }

    /// Set whether days-after-sowing values are normalized for display.
    #[must_use]
    pub const fn normalize_das(mut self, normalize_das: bool) -> Self {
        self.normalize_das = normalize_das;
        self
    }

    /// Set the experiment directory name.
    #[must_use]
    pub fn experiment_dir(mut self, experiment_dir: impl Into<String>) -> Self {
        self.experiment_dir = experiment_dir.into();
        self
    }

    /// Set the supplementary weather file for a multi-year experiment.
    #[must_use]
    pub fn additional_weather_file(mut self, file: impl Into<String>) -> Self {
        self.additional_weather_file = Some(file.into());
        self
    }

    /// Build the [`ExperimentConfig`], validating the weather-file rule.
    ///
    /// An empty weather filename counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the experiment is multi-year
    /// without a supplementary weather file, or single-year with one.
    pub fn build(self) -> Result<ExperimentConfig> {
        let has_weather_file = self
            .additional_weather_file
            .as_deref()
            .is_some_and(|file| !file.is_empty());

        if self.is_multi_year && !has_weather_file {
            return Err(Error::Validation {
                experiment_name: self.experiment_name,
                year: self.year,
                reason: "multi-year experiment requires an additional weather file".to_string(),
            });
        }
        if !self.is_multi_year && has_weather_file {
            return Err(Error::Validation {
                experiment_name: self.experiment_name,
                year: self.year,
                reason: "single-year experiment must not have an additional weather file"
                    .to_string(),
            });
        }

        Ok(ExperimentConfig {
            year: self.year,
            experiment_name: self.experiment_name,
            file_prefix: self.file_prefix,
            output_prefix: self.output_prefix,
            crop_type: self.crop_type,
            is_multi_year: self.is_multi_year,
            normalize_das: self.normalize_das,
            experiment_dir: self.experiment_dir,
            additional_weather_file: self.additional_weather_file,
        })
    }
}

/// Wire form of [`ExperimentConfig`], prior to validation.
#[derive(Debug, Deserialize)]
struct RawExperimentConfig {
    year: i32,
    experiment_name: String,
    file_prefix: String,
    output_prefix: String,
    crop_type: String,
    is_multi_year: bool,
    normalize_das: bool,
    experiment_dir: String,
    #[serde(default)]
    additional_weather_file: Option<String>,
}

impl TryFrom<RawExperimentConfig> for ExperimentConfig {
    type Error = Error;

    fn try_from(raw: RawExperimentConfig) -> Result<Self> {
        let mut builder = Self::builder(raw.year, raw.experiment_name)
            .file_prefix(raw.file_prefix)
            .output_prefix(raw.output_prefix)
            .crop_type(raw.crop_type)
            .multi_year(raw.is_multi_year)
            .normalize_das(raw.normalize_das)
            .experiment_dir(raw.experiment_dir);
        if let Some(file) = raw.additional_weather_file {
            builder = builder.additional_weather_file(file);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_year_build() {
        let config = ExperimentConfig::builder(2015, "DUERNAST2015")
            .file_prefix("TUDU1501")
            .crop_type("Spring Wheat")
            .build()
            .unwrap();
        assert_eq!(config.year(), 2015);
        assert_eq!(config.experiment_name(), "DUERNAST2015");
        assert!(!config.is_multi_year());
        assert!(config.additional_weather_file().is_none());
    }

    #[test]
    fn test_multi_year_requires_weather_file() {
        let err = ExperimentConfig::builder(2017, "DUERNAST2017")
            .multi_year(true)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation { year: 2017, .. }));
    }

    #[test]
    fn test_single_year_rejects_weather_file() {
        let err = ExperimentConfig::builder(2015, "DUERNAST2015")
            .additional_weather_file("TUDU1401.WTH")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Validation { year: 2015, .. }));
    }

    #[test]
    fn test_empty_weather_file_counts_as_absent() {
        // Single-year with an empty filename is fine...
        assert!(ExperimentConfig::builder(2015, "DUERNAST2015")
            .additional_weather_file("")
            .build()
            .is_ok());
        // ...but does not satisfy the multi-year requirement.
        assert!(ExperimentConfig::builder(2017, "DUERNAST2017")
            .multi_year(true)
            .additional_weather_file("")
            .build()
            .is_err());
    }
}
