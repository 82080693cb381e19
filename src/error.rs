use crate::{Parameter, ParameterSet};
use thiserror::Error;

/// An error raised while validating parameters or configuring sweeps.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A parameter value lies outside the domain of the distance model.
    #[error("invalid {parameter} of {value}: {reason}")]
    Domain {
        parameter: Parameter,
        value: f64,
        reason: &'static str,
    },
    /// Valid parameters whose separation overflows.
    #[error("separation is not finite for {0:?}")]
    Unbounded(ParameterSet),
    /// A sweep range is empty or malformed.
    #[error("invalid sweep range: {0}")]
    Range(String),
    /// The limits configured for a parameter are unusable.
    #[error("invalid limits for {parameter}: {reason}")]
    Limits {
        parameter: Parameter,
        reason: String,
    },
}

/// Result type of fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;
