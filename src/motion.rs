//! Serializable trajectory requests.
//!
//! A request names one kind of movement, its duration, an optional movement
//! onset and the grid to sample it on. Positions are given per axis, so the
//! same request shape covers planar and spatial movements:
//!
//! ```
//! use minjerk::motion::MotionRequest;
//! use minjerk::trajectories::Trajectory;
//!
//! let request: MotionRequest = serde_json::from_str(
//!     r#"{
//!         "type": "curved",
//!         "start": [0.0, 0.0],
//!         "via": [-0.1, 0.4],
//!         "via_time": 0.5,
//!         "end": [1.0, 1.0],
//!         "duration": 1.0
//!     }"#,
//! )
//! .unwrap();
//! let planned = request.plan::<2>().unwrap();
//! let [x, y] = planned.get_position(0.5);
//! assert!((x + 0.1).abs() < 1e-9 && (y - 0.4).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    error::{DomainError, PrecisionWarning, Result},
    sampling::TimeGrid,
    trajectories::{
        Axes, BoundaryState, Curved1d, Onset, Quintic1d, Straight1d, Trajectory, ViaPoint,
    },
    DEFAULT_SAMPLE_STEP,
};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MotionKind {
    /// rest to rest along a straight line
    Straight { start: Vec<f64>, end: Vec<f64> },
    /// rest to rest through one via point
    Curved {
        start: Vec<f64>,
        via: Vec<f64>,
        via_time: f64,
        end: Vec<f64>,
    },
    /// arbitrary position, velocity and acceleration at both ends
    BoundaryValue {
        start: Vec<BoundaryState>,
        end: Vec<BoundaryState>,
    },
}

/// Sampling settings; every field is optional in a request.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub start: f64,
    /// defaults to the total runtime, onset included
    pub end: Option<f64>,
    pub step: f64,
    pub inclusive: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start: 0.,
            end: None,
            step: DEFAULT_SAMPLE_STEP,
            inclusive: true,
        }
    }
}

impl GridConfig {
    pub fn resolve(&self, total_runtime: f64) -> Result<TimeGrid> {
        let end = self.end.unwrap_or(total_runtime);
        if self.inclusive {
            TimeGrid::inclusive(self.start, end, self.step)
        } else {
            TimeGrid::new(self.start, end, self.step)
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MotionRequest {
    #[serde(flatten)]
    pub kind: MotionKind,
    pub duration: f64,
    /// time spent holding the start position before moving
    #[serde(default)]
    pub onset: f64,
    #[serde(default)]
    pub grid: GridConfig,
}

impl MotionRequest {
    /// number of axes, taken from the start position
    pub fn dimensions(&self) -> usize {
        match &self.kind {
            MotionKind::Straight { start, .. } | MotionKind::Curved { start, .. } => start.len(),
            MotionKind::BoundaryValue { start, .. } => start.len(),
        }
    }

    /// Solves every axis; all validation happens here, so the planned motion
    /// can be evaluated without further checks.
    pub fn plan<const N: usize>(&self) -> Result<PlannedMotion<N>> {
        let axes: Vec<Onset<AxisMotion>> = self
            .plan_axes::<N>()?
            .into_iter()
            .map(|axis| Onset::new(axis, self.onset))
            .collect::<Result<_>>()?;
        let axes: [Onset<AxisMotion>; N] = axes.try_into().map_err(|axes: Vec<_>| {
            DomainError::DimensionMismatch {
                expected: N,
                found: axes.len(),
            }
        })?;

        let planned = PlannedMotion {
            axes: Axes::from_axes(axes),
        };
        if let Some(w) = planned.precision_warning() {
            warn!(%w, "planned motion may be imprecise");
        }
        debug!(
            dimensions = N,
            runtime = planned.get_total_runtime(),
            "planned motion"
        );
        Ok(planned)
    }

    fn plan_axes<const N: usize>(&self) -> Result<Vec<AxisMotion>> {
        let d = self.duration;
        match &self.kind {
            MotionKind::Straight { start, end } => {
                check_axes::<N>(start.len())?;
                check_axes::<N>(end.len())?;
                start
                    .iter()
                    .zip(end)
                    .map(|(&s, &e)| Straight1d::new(s, e, d).map(AxisMotion::Straight))
                    .collect()
            }
            MotionKind::Curved {
                start,
                via,
                via_time,
                end,
            } => {
                check_axes::<N>(start.len())?;
                check_axes::<N>(via.len())?;
                check_axes::<N>(end.len())?;
                start
                    .iter()
                    .zip(via)
                    .zip(end)
                    .map(|((&s, &v), &e)| {
                        Curved1d::new(s, ViaPoint::new(v, *via_time), e, d).map(AxisMotion::Curved)
                    })
                    .collect()
            }
            MotionKind::BoundaryValue { start, end } => {
                check_axes::<N>(start.len())?;
                check_axes::<N>(end.len())?;
                start
                    .iter()
                    .zip(end)
                    .map(|(&s, &e)| Quintic1d::new(s, e, d).map(AxisMotion::BoundaryValue))
                    .collect()
            }
        }
    }
}

fn check_axes<const N: usize>(found: usize) -> Result<()> {
    if found != N {
        return Err(DomainError::DimensionMismatch { expected: N, found });
    }
    Ok(())
}

/// One solved axis of a request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisMotion {
    Straight(Straight1d),
    Curved(Curved1d),
    BoundaryValue(Quintic1d),
}

macro_rules! on_axis {
    ($motion:expr, $axis:ident => $body:expr) => {
        match $motion {
            AxisMotion::Straight($axis) => $body,
            AxisMotion::Curved($axis) => $body,
            AxisMotion::BoundaryValue($axis) => $body,
        }
    };
}

impl Trajectory<f64, f64> for AxisMotion {
    fn get_position(&self, t: f64) -> f64 {
        on_axis!(self, a => a.get_position(t))
    }

    fn get_velocity(&self, t: f64) -> f64 {
        on_axis!(self, a => a.get_velocity(t))
    }

    fn get_acceleration(&self, t: f64) -> f64 {
        on_axis!(self, a => a.get_acceleration(t))
    }

    fn get_jerk(&self, t: f64) -> f64 {
        on_axis!(self, a => a.get_jerk(t))
    }

    fn get_total_runtime(&self) -> f64 {
        on_axis!(self, a => a.get_total_runtime())
    }

    fn get_final_destination(&self) -> f64 {
        on_axis!(self, a => a.get_final_destination())
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        on_axis!(self, a => a.get_time_sections().collect::<Vec<_>>()).into_iter()
    }
}

/// A solved request: `N` independent axes sharing duration and onset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedMotion<const N: usize> {
    axes: Axes<Onset<AxisMotion>, N>,
}

impl<const N: usize> PlannedMotion<N> {
    pub fn precision_warning(&self) -> Option<PrecisionWarning> {
        self.axes.iter().find_map(|axis| match axis.inner() {
            AxisMotion::Curved(c) => c.shape().warning,
            _ => None,
        })
    }

    pub fn onset(&self) -> f64 {
        self.axes.axis(0).map_or(0., Onset::onset)
    }
}

impl<const N: usize> Trajectory<[f64; N], [f64; N]> for PlannedMotion<N> {
    fn get_position(&self, t: f64) -> [f64; N] {
        self.axes.get_position(t)
    }

    fn get_velocity(&self, t: f64) -> [f64; N] {
        self.axes.get_velocity(t)
    }

    fn get_acceleration(&self, t: f64) -> [f64; N] {
        self.axes.get_acceleration(t)
    }

    fn get_jerk(&self, t: f64) -> [f64; N] {
        self.axes.get_jerk(t)
    }

    fn get_total_runtime(&self) -> f64 {
        self.axes.get_total_runtime()
    }

    fn get_final_destination(&self) -> [f64; N] {
        self.axes.get_final_destination()
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        self.axes.get_time_sections()
    }
}
