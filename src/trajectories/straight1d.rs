use crate::error::{ensure_duration, ensure_finite, Result};

use super::{polynomial::Quintic, Trajectory};

/// `f(tau) = 15 tau^4 - 6 tau^5 - 10 tau^3`
const BLEND: Quintic = Quintic::new([0., 0., 0., -10., 15., -6.]);

/// Canonical minimum jerk blend: `0` at `tau = 0`, `-1` at `tau = 1`,
/// zero velocity and acceleration at both ends.
pub fn min_jerk_blend(tau: f64) -> f64 {
    BLEND.position(tau)
}

/// Rest-to-rest position at normalized time `tau`.
///
/// `tau` outside `[0, 1]` extrapolates the polynomial and leaves the
/// `[initial, final]` range; clamp beforehand if that is not wanted.
pub fn straight_position(initial: f64, final_pos: f64, tau: f64) -> f64 {
    initial + (initial - final_pos) * min_jerk_blend(tau)
}

/// One axis of a straight, rest-to-rest movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Straight1d {
    initial: f64,
    final_pos: f64,
    duration: f64,
}

impl Straight1d {
    pub fn new(initial: f64, final_pos: f64, duration: f64) -> Result<Self> {
        Ok(Self {
            initial: ensure_finite("initial position", initial)?,
            final_pos: ensure_finite("final position", final_pos)?,
            duration: ensure_duration(duration)?,
        })
    }

    fn tau(&self, t: f64) -> f64 {
        t / self.duration
    }

    // chain rule factor for the n-th derivative in absolute time
    fn scale(&self, order: i32) -> f64 {
        (self.initial - self.final_pos) / self.duration.powi(order)
    }
}

impl Trajectory<f64, f64> for Straight1d {
    fn get_position(&self, t: f64) -> f64 {
        straight_position(self.initial, self.final_pos, self.tau(t))
    }

    fn get_velocity(&self, t: f64) -> f64 {
        self.scale(1) * BLEND.velocity(self.tau(t))
    }

    fn get_acceleration(&self, t: f64) -> f64 {
        self.scale(2) * BLEND.acceleration(self.tau(t))
    }

    fn get_jerk(&self, t: f64) -> f64 {
        self.scale(3) * BLEND.jerk(self.tau(t))
    }

    fn get_total_runtime(&self) -> f64 {
        self.duration
    }

    fn get_final_destination(&self) -> f64 {
        self.final_pos
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        std::iter::once(self.duration)
    }
}
