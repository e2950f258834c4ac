//! Materializing a trajectory over a time grid.
//!
//! Samples carry analytic derivatives, so consumers that used to run finite
//! differences over sampled positions can read velocity, acceleration and
//! jerk directly.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ensure_finite, DomainError, Result},
    trajectories::Trajectory,
    DEFAULT_SAMPLE_STEP,
};

// absorbs rounding in `(end - start) / step`
const GRID_EPSILON: f64 = 1e-9;

/// upper bound on the number of samples a grid may produce
pub const MAX_GRID_LEN: usize = 10_000_000;

/// Evenly spaced sample times `start, start + step, ...`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    start: f64,
    end: f64,
    step: f64,
    inclusive: bool,
}

impl TimeGrid {
    /// Times in `[start, end)`.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self> {
        ensure_finite("grid start", start)?;
        ensure_finite("grid end", end)?;
        ensure_finite("grid step", step)?;
        if step <= 0. {
            return Err(DomainError::InvalidGrid {
                reason: "step must be positive",
            });
        }
        if end < start {
            return Err(DomainError::InvalidGrid {
                reason: "end comes before start",
            });
        }
        let span = (end - start) / step;
        if !span.is_finite() || span >= MAX_GRID_LEN as f64 {
            return Err(DomainError::InvalidGrid {
                reason: "too many samples",
            });
        }
        Ok(Self {
            start,
            end,
            step,
            inclusive: false,
        })
    }

    /// Times in `[start, end]`.
    pub fn inclusive(start: f64, end: f64, step: f64) -> Result<Self> {
        Ok(Self {
            inclusive: true,
            ..Self::new(start, end, step)?
        })
    }

    /// Covers a whole trajectory with the default step, final instant included.
    pub fn covering<T, P, V>(traj: &T) -> Result<Self>
    where
        T: Trajectory<P, V>,
    {
        Self::inclusive(0., traj.get_total_runtime(), DEFAULT_SAMPLE_STEP)
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn len(&self) -> usize {
        let span = (self.end - self.start) / self.step;
        if self.inclusive {
            (span + GRID_EPSILON).floor() as usize + 1
        } else {
            (span - GRID_EPSILON).ceil().max(0.) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn times(&self) -> impl Iterator<Item = f64> {
        let Self { start, step, .. } = *self;
        (0..self.len()).map(move |i| start + i as f64 * step)
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Sample<P, V> {
    pub t: f64,
    pub pos: P,
    pub vel: V,
    pub acc: V,
    pub jerk: V,
}

impl<P, V> Sample<P, V> {
    pub fn of<T: Trajectory<P, V>>(traj: &T, t: f64) -> Self {
        Self {
            t,
            pos: traj.get_position(t),
            vel: traj.get_velocity(t),
            acc: traj.get_acceleration(t),
            jerk: traj.get_jerk(t),
        }
    }
}

/// Evaluates `traj` at every time of `grid`, in order.
pub fn sample<T, P, V>(traj: &T, grid: &TimeGrid) -> Vec<Sample<P, V>>
where
    T: Trajectory<P, V>,
{
    grid.times().map(|t| Sample::of(traj, t)).collect()
}

/// Positions only, the shape the plotting side consumes.
pub fn sample_positions<T, P, V>(traj: &T, grid: &TimeGrid) -> Vec<P>
where
    T: Trajectory<P, V>,
{
    grid.times().map(|t| traj.get_position(t)).collect()
}
