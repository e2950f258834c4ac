use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, Result};

/// `p(t) = a0 + a1 t + a2 t^2 + a3 t^3 + a4 t^4 + a5 t^5`
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Quintic {
    coeffs: [f64; 6],
}

impl Quintic {
    pub const fn new(coeffs: [f64; 6]) -> Self {
        Self { coeffs }
    }

    /// Rescales a polynomial written in normalized time `tau = t / duration`
    /// so it can be evaluated directly at absolute time `t`.
    pub fn from_normalized(normalized: [f64; 6], duration: f64) -> Self {
        let mut coeffs = normalized;
        let mut scale = 1.;
        for c in coeffs.iter_mut() {
            *c /= scale;
            scale *= duration;
        }
        Self { coeffs }
    }

    pub fn coeffs(&self) -> [f64; 6] {
        self.coeffs
    }

    /// Fails when a coefficient overflowed while solving.
    pub(crate) fn checked(self, name: &'static str) -> Result<Self> {
        for k in self.coeffs {
            ensure_finite(name, k)?;
        }
        Ok(self)
    }

    pub fn position(&self, t: f64) -> f64 {
        let [a0, a1, a2, a3, a4, a5] = self.coeffs;
        a0 + t * (a1 + t * (a2 + t * (a3 + t * (a4 + t * a5))))
    }

    pub fn velocity(&self, t: f64) -> f64 {
        let [_, a1, a2, a3, a4, a5] = self.coeffs;
        a1 + t * (2. * a2 + t * (3. * a3 + t * (4. * a4 + t * 5. * a5)))
    }

    pub fn acceleration(&self, t: f64) -> f64 {
        let [_, _, a2, a3, a4, a5] = self.coeffs;
        2. * a2 + t * (6. * a3 + t * (12. * a4 + t * 20. * a5))
    }

    pub fn jerk(&self, t: f64) -> f64 {
        let [_, _, _, a3, a4, a5] = self.coeffs;
        6. * a3 + t * (24. * a4 + t * 60. * a5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(expected: f64, actual: f64, delta: f64) {
        assert!(
            (expected - actual).abs() <= delta,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn overflowed_coefficients_are_rejected() {
        let ok = Quintic::new([1., 2., 3., 4., 5., 6.]);
        assert_eq!(ok.checked("coefficient"), Ok(ok));
        assert!(Quintic::new([0., 0., 0., f64::INFINITY, 0., 0.])
            .checked("coefficient")
            .is_err());
    }

    #[test]
    fn evaluates_value_and_derivatives() {
        // p(t) = 1 + 2t + 3t^2 + 4t^3 + 5t^4 + 6t^5
        let p = Quintic::new([1., 2., 3., 4., 5., 6.]);
        close(21., p.position(1.), 1e-12);
        close(2. + 6. + 12. + 20. + 30., p.velocity(1.), 1e-12);
        close(6. + 24. + 60. + 120., p.acceleration(1.), 1e-12);
        close(24. + 120. + 360., p.jerk(1.), 1e-12);

        close(1., p.position(0.), 0.);
        close(2., p.velocity(0.), 0.);
        close(6., p.acceleration(0.), 0.);
        close(24., p.jerk(0.), 0.);
    }

    #[test]
    fn normalized_coefficients_match_scaled_time() {
        let normalized = [0.5, -1., 2., 0.25, -3., 1.5];
        let duration = 2.5;
        let in_tau = Quintic::new(normalized);
        let in_t = Quintic::from_normalized(normalized, duration);
        for i in 0..=10 {
            let tau = i as f64 / 10.;
            let t = tau * duration;
            close(in_tau.position(tau), in_t.position(t), 1e-12);
            close(in_tau.velocity(tau) / duration, in_t.velocity(t), 1e-12);
            close(
                in_tau.acceleration(tau) / duration.powi(2),
                in_t.acceleration(t),
                1e-12,
            );
            close(in_tau.jerk(tau) / duration.powi(3), in_t.jerk(t), 1e-12);
        }
    }
}
