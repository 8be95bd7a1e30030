//! Error types for duernast-config

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Configuration registry error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Experiment record construction violated the weather-file rule
    #[error("invalid configuration for {experiment_name} ({year}): {reason}")]
    Validation {
        /// Experiment the record was being built for
        experiment_name: String,
        /// Year key of the record
        year: i32,
        /// Which direction of the rule was violated
        reason: String,
    },

    /// Requested year has no registry entry
    #[error("no experiment configured for year {year} (available: {available:?})")]
    UnknownYear {
        /// The year that was requested
        year: i32,
        /// Years present in the registry at lookup time, ascending
        available: Vec<i32>,
    },
}
