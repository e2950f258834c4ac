// Boundary-value minimum jerk segment (Fligge, McIntyre & van der Smagt, 2012)

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_duration, ensure_finite, Result};

use super::{polynomial::Quintic, Trajectory};

/// Kinematic state at one end of a segment.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundaryState {
    pub pos: f64,
    #[serde(default)]
    pub vel: f64,
    #[serde(default)]
    pub acc: f64,
}

impl BoundaryState {
    pub fn new(pos: f64, vel: f64, acc: f64) -> Self {
        Self { pos, vel, acc }
    }

    pub fn at_rest(pos: f64) -> Self {
        Self::new(pos, 0., 0.)
    }

    fn ensure_finite(&self, pos: &'static str, vel: &'static str, acc: &'static str) -> Result<()> {
        ensure_finite(pos, self.pos)?;
        ensure_finite(vel, self.vel)?;
        ensure_finite(acc, self.acc)?;
        Ok(())
    }
}

/// One axis of a single-segment trajectory matching `start` at `t = 0` and
/// `end` at `t = duration` in position, velocity and acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quintic1d {
    start: BoundaryState,
    end: BoundaryState,
    duration: f64,
    polynomial: Quintic,
}

impl Quintic1d {
    pub fn new(start: BoundaryState, end: BoundaryState, duration: f64) -> Result<Self> {
        let d = ensure_duration(duration)?;
        start.ensure_finite("initial position", "initial velocity", "initial acceleration")?;
        end.ensure_finite("final position", "final velocity", "final acceleration")?;

        let polynomial =
            Quintic::new(solve_coefficients(&start, &end, d)).checked("segment coefficient")?;
        debug!(?start, ?end, duration, coeffs = ?polynomial.coeffs(), "solved quintic segment");

        Ok(Self {
            start,
            end,
            duration,
            polynomial,
        })
    }

    pub fn start(&self) -> BoundaryState {
        self.start
    }

    pub fn end(&self) -> BoundaryState {
        self.end
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn polynomial(&self) -> &Quintic {
        &self.polynomial
    }

    /// position at `tau * duration`
    pub fn at_normalized(&self, tau: f64) -> f64 {
        self.polynomial.position(tau * self.duration)
    }
}

fn solve_coefficients(start: &BoundaryState, end: &BoundaryState, d: f64) -> [f64; 6] {
    let (p0, v0, acc0) = (start.pos, start.vel, start.acc);
    let (p1, v1, acc1) = (end.pos, end.vel, end.acc);
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;

    let a3 = (-10. / d3) * p0 + (-6. / d2) * v0 + (-3. / (2. * d)) * acc0
        + (10. / d3) * p1
        + (-4. / d2) * v1
        + (1. / (2. * d)) * acc1;
    let a4 = (15. / d4) * p0 + (8. / d3) * v0 + (3. / (2. * d2)) * acc0
        + (-15. / d4) * p1
        + (7. / d3) * v1
        + (-1. / d2) * acc1;
    let a5 = (-6. / d5) * p0 + (-3. / d4) * v0 + (-1. / (2. * d3)) * acc0
        + (6. / d5) * p1
        + (-3. / d4) * v1
        + (1. / (2. * d3)) * acc1;

    [p0, v0, 0.5 * acc0, a3, a4, a5]
}

impl Trajectory<f64, f64> for Quintic1d {
    fn get_position(&self, t: f64) -> f64 {
        self.polynomial.position(t)
    }

    fn get_velocity(&self, t: f64) -> f64 {
        self.polynomial.velocity(t)
    }

    fn get_acceleration(&self, t: f64) -> f64 {
        self.polynomial.acceleration(t)
    }

    fn get_jerk(&self, t: f64) -> f64 {
        self.polynomial.jerk(t)
    }

    fn get_total_runtime(&self) -> f64 {
        self.duration
    }

    fn get_final_destination(&self) -> f64 {
        self.end.pos
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        std::iter::once(self.duration)
    }
}
