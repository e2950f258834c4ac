use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Rejections raised while solving or constructing a trajectory.
///
/// Every check happens before coefficients are computed; evaluating an
/// already built trajectory never fails.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("duration must be positive, got {0}")]
    NonPositiveDuration(f64),

    #[error("duration {0} is outside the solvable range, its fifth power is not a normal float")]
    DurationOutOfRange(f64),

    #[error("via time {via_time} must lie strictly inside (0, {duration})")]
    ViaTimeOutOfRange { via_time: f64, duration: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("movement onset must be non-negative, got {0}")]
    NegativeOnset(f64),

    #[error("invalid sampling grid: {reason}")]
    InvalidGrid { reason: &'static str },

    #[error("expected {expected} axes, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, DomainError>;

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { name, value })
    }
}

pub(crate) fn ensure_duration(duration: f64) -> Result<f64> {
    ensure_finite("duration", duration)?;
    if duration <= 0. {
        return Err(DomainError::NonPositiveDuration(duration));
    }
    // coefficients scale with duration^-5
    if !duration.powi(5).is_normal() {
        return Err(DomainError::DurationOutOfRange(duration));
    }
    Ok(duration)
}

/// Non-fatal diagnostic: the via time sits so close to a segment boundary
/// that the `tau1^k (1 - tau1)^k` denominators lose precision.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PrecisionWarning {
    pub tau1: f64,
    /// `tau1 * (1 - tau1)`, compared against the warning threshold
    pub conditioning: f64,
}

impl fmt::Display for PrecisionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "normalized via time {} is close to a segment boundary (tau1 * (1 - tau1) = {:e}), coefficients may be imprecise",
            self.tau1, self.conditioning
        )
    }
}
