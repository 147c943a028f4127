//! Crate error type

use thiserror::Error;

/// Errors surfaced by the numeric utilities, configuration and persistence hooks.
///
/// Simulation ticks themselves never fail; everything here originates at a
/// boundary (vector math, reward arithmetic, files).
#[derive(Debug, Error)]
pub enum Error {
    /// A reward or feature value came out as NaN
    #[error("numeric value is not a number: {what}")]
    NumericInvalid { what: String },

    /// Normalizing or measuring the angle of a zero-length vector
    #[error("division by zero: vector has zero magnitude")]
    DivisionByZero,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
