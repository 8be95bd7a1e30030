//! Experiment Configuration Schema
//!
//! This module provides the per-year configuration records for the
//! Duernast field experiments and the registry the pipeline resolves
//! them from.
//!
//! ## Schema Overview
//!
//! ```text
//! ExperimentRegistry (year → ExperimentConfig)
//!     ├── 2015: DUERNAST2015, Spring Wheat, single-year
//!     └── 2017: DUERNAST2017, Winter Wheat, multi-year (+ TUDU1601.WTH)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use duernast_config::experiment::{get_config, list_available_experiments};
//!
//! // Resolve file naming for the 2015 season
//! let config = get_config(2015).unwrap();
//! assert_eq!(config.file_prefix(), "TUDU1501");
//! assert_eq!(config.crop_type(), "Spring Wheat");
//!
//! // Enumerate configured seasons
//! assert_eq!(list_available_experiments(), vec![2015, 2017]);
//! ```

mod config_record;
mod registry;

pub use config_record::{ExperimentConfig, ExperimentConfigBuilder};
pub use registry::{get_config, list_available_experiments, registry, ExperimentRegistry};
