//! Parameter validation errors surfaced before any simulation runs

use thiserror::Error;

/// An input outside its declared domain.
///
/// Every variant names the offending field and the constraint it violated so
/// the caller can point back at the parameter-collection surface. Validation
/// is all-or-nothing: the engine never partially computes with invalid inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("`{field}` must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("`{field}` must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("`{field}` must be a finite number")]
    NotFinite { field: &'static str },
}

impl ParameterError {
    /// Field name the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            ParameterError::Negative { field, .. }
            | ParameterError::NonPositive { field, .. }
            | ParameterError::OutOfRange { field, .. }
            | ParameterError::NotFinite { field } => field,
        }
    }
}

/// Reject non-finite values before range checks so NaN never slips through
/// a comparison.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NotFinite { field })
    }
}

pub(crate) fn require_non_negative(
    field: &'static str,
    value: f64,
) -> Result<f64, ParameterError> {
    let value = require_finite(field, value)?;
    if value < 0.0 {
        Err(ParameterError::Negative { field, value })
    } else {
        Ok(value)
    }
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    let value = require_finite(field, value)?;
    if value <= 0.0 {
        Err(ParameterError::NonPositive { field, value })
    } else {
        Ok(value)
    }
}

pub(crate) fn require_in_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<f64, ParameterError> {
    let value = require_finite(field, value)?;
    if value < min || value > max {
        Err(ParameterError::OutOfRange {
            field,
            min,
            max,
            value,
        })
    } else {
        Ok(value)
    }
}
