//! Error types for tire-kit

use thiserror::Error;

/// Errors raised while validating a generator configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} range bound is not finite: {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} range must not be negative: min is {min}")]
    Negative { field: &'static str, min: f64 },

    #[error("{field} range is inverted: min {min} > max {max}")]
    Inverted {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("Material set is empty")]
    NoMaterials,
}

/// Error returned when a string names no known material
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown material: {0}")]
pub struct MaterialParseError(pub String);
