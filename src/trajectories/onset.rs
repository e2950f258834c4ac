use crate::error::{ensure_finite, DomainError, Result};

use super::Trajectory;

/// Holds the start position of `inner` until `onset`, then plays `inner`
/// shifted by `onset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Onset<T> {
    inner: T,
    onset: f64,
}

impl<T: Trajectory<f64, f64>> Onset<T> {
    pub fn new(inner: T, onset: f64) -> Result<Self> {
        if ensure_finite("onset", onset)? < 0. {
            return Err(DomainError::NegativeOnset(onset));
        }
        Ok(Self { inner, onset })
    }

    /// starts moving right away
    pub fn immediate(inner: T) -> Self {
        Self { inner, onset: 0. }
    }

    pub fn onset(&self) -> f64 {
        self.onset
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// a zero onset never holds, so the inner movement extrapolates freely
    fn is_holding(&self, t: f64) -> bool {
        self.onset > 0. && t < self.onset
    }
}

impl<T: Trajectory<f64, f64>> Trajectory<f64, f64> for Onset<T> {
    fn get_position(&self, t: f64) -> f64 {
        if self.is_holding(t) {
            return self.inner.get_position(0.);
        }
        self.inner.get_position(t - self.onset)
    }

    fn get_velocity(&self, t: f64) -> f64 {
        if self.is_holding(t) {
            return 0.;
        }
        self.inner.get_velocity(t - self.onset)
    }

    fn get_acceleration(&self, t: f64) -> f64 {
        if self.is_holding(t) {
            return 0.;
        }
        self.inner.get_acceleration(t - self.onset)
    }

    fn get_jerk(&self, t: f64) -> f64 {
        if self.is_holding(t) {
            return 0.;
        }
        self.inner.get_jerk(t - self.onset)
    }

    fn get_total_runtime(&self) -> f64 {
        self.onset + self.inner.get_total_runtime()
    }

    fn get_final_destination(&self) -> f64 {
        self.inner.get_final_destination()
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        let onset = self.onset;
        (onset > 0.)
            .then_some(onset)
            .into_iter()
            .chain(self.inner.get_time_sections().map(move |t| t + onset))
    }
}
