//! # Duernast-Config: Experiment Configuration Registry
//!
//! Static per-year experiment metadata for the Duernast crop-growth
//! simulation pipeline, plus the lookup helpers the pipeline uses to
//! resolve input and output file naming for a given season.
//!
//! The registry is declarative: records are fixed at process start and
//! validated at construction. This crate performs no file I/O itself —
//! it only supplies the filename stems, directory names, and behavioral
//! flags that downstream stages need to locate weather files and shape
//! their output.
//!
//! ## Example
//!
//! ```rust
//! use duernast_config::experiment::{get_config, list_available_experiments};
//!
//! let config = get_config(2017)?;
//! assert_eq!(config.experiment_name(), "DUERNAST2017");
//! assert!(config.is_multi_year());
//! assert_eq!(config.additional_weather_file(), Some("TUDU1601.WTH"));
//!
//! assert_eq!(list_available_experiments(), vec![2015, 2017]);
//! # Ok::<(), duernast_config::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;

pub use error::{Error, Result};
