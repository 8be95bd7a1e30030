//! Experiment Registry - year-keyed lookup over experiment configs
//!
//! The built-in table is assembled on first use and handed out as a
//! shared immutable reference. Concurrent readers need no locking.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::{debug, trace};

use crate::error::{Error, Result};

use super::ExperimentConfig;

/// Year-keyed registry of experiment configurations.
///
/// Backed by a `BTreeMap` so year enumeration is sorted and stable
/// across repeated calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperimentRegistry {
    configs: BTreeMap<i32, ExperimentConfig>,
}

impl ExperimentRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the registry of predefined Duernast experiments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if an entry in the fixed table
    /// violates the weather-file rule. Only reachable through an
    /// inconsistent edit of the table itself.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        registry.insert(
            ExperimentConfig::builder(2015, "DUERNAST2015")
                .file_prefix("TUDU1501")
                .output_prefix("duernast_2015")
                .crop_type("Spring Wheat")
                .multi_year(false)
                .normalize_das(false)
                .experiment_dir("DUERNAST2015")
                .build()?,
        );
        registry.insert(
            ExperimentConfig::builder(2017, "DUERNAST2017")
                .file_prefix("TUDU1701")
                .output_prefix("duernast_2017")
                .crop_type("Winter Wheat")
                .multi_year(true)
                .normalize_das(true)
                .experiment_dir("DUERNAST2017")
                .additional_weather_file("TUDU1601.WTH")
                .build()?,
        );
        Ok(registry)
    }

    /// Add a configuration, keyed by its year.
    ///
    /// Replaces any existing entry for the same year.
    pub fn insert(&mut self, config: ExperimentConfig) {
        debug!(
            year = config.year(),
            experiment = %config.experiment_name(),
            "registered experiment"
        );
        self.configs.insert(config.year(), config);
    }

    /// Look up the configuration for a year by exact match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownYear`] listing the years currently
    /// present in the registry.
    pub fn get(&self, year: i32) -> Result<&ExperimentConfig> {
        self.configs.get(&year).ok_or_else(|| {
            trace!(year, "experiment lookup miss");
            Error::UnknownYear {
                year,
                available: self.years(),
            }
        })
    }

    /// All configured years, ascending.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.configs.keys().copied().collect()
    }

    /// Check whether a year is configured.
    #[must_use]
    pub fn contains_year(&self, year: i32) -> bool {
        self.configs.contains_key(&year)
    }

    /// Number of configured experiments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Check if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Iterate over configurations in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = &ExperimentConfig> {
        self.configs.values()
    }
}

/// Process-wide registry of the predefined Duernast experiments.
///
/// Initialized once on first access; immutable afterwards.
///
/// # Panics
///
/// Panics if the fixed table fails validation, which aborts
/// initialization and is only reachable through an inconsistent edit of
/// [`ExperimentRegistry::builtin`].
pub fn registry() -> &'static ExperimentRegistry {
    static REGISTRY: OnceLock<ExperimentRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        ExperimentRegistry::builtin()
            .expect("built-in experiment table must satisfy the weather-file rule")
    })
}

/// Get the configuration for a specific year.
///
/// # Errors
///
/// Returns [`Error::UnknownYear`] enumerating the configured years if
/// `year` has no entry.
pub fn get_config(year: i32) -> Result<&'static ExperimentConfig> {
    registry().get(year)
}

/// List all years with an experiment configuration, ascending.
#[must_use]
pub fn list_available_experiments() -> Vec<i32> {
    registry().years()
}
