use crate::error::Result;

use super::{
    polynomial::Quintic,
    via::{ViaPoint, ViaShape},
    Trajectory,
};

/// One axis of a curved movement: two quintic pieces joined at the via time,
/// continuous in position, velocity and acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curved1d {
    via: ViaPoint,
    final_pos: f64,
    duration: f64,
    shape: ViaShape,
    pre_via: Quintic,
    post_via: Quintic,
}

impl Curved1d {
    pub fn new(initial_pos: f64, via: ViaPoint, final_pos: f64, duration: f64) -> Result<Self> {
        let shape = ViaShape::solve(initial_pos, via.pos, final_pos, duration, via.time)?;
        Ok(Self {
            via,
            final_pos,
            duration,
            shape,
            pre_via: shape
                .pre_via(initial_pos, duration)
                .checked("pre-via coefficient")?,
            post_via: shape
                .post_via(final_pos, duration)
                .checked("post-via coefficient")?,
        })
    }

    pub fn shape(&self) -> &ViaShape {
        &self.shape
    }

    pub fn via(&self) -> ViaPoint {
        self.via
    }

    pub fn pre_via(&self) -> &Quintic {
        &self.pre_via
    }

    pub fn post_via(&self) -> &Quintic {
        &self.post_via
    }

    /// `t1` itself belongs to the pre-via piece
    fn piece(&self, t: f64) -> &Quintic {
        if t <= self.via.time {
            &self.pre_via
        } else {
            &self.post_via
        }
    }
}

impl Trajectory<f64, f64> for Curved1d {
    fn get_position(&self, t: f64) -> f64 {
        self.piece(t).position(t)
    }

    fn get_velocity(&self, t: f64) -> f64 {
        self.piece(t).velocity(t)
    }

    fn get_acceleration(&self, t: f64) -> f64 {
        self.piece(t).acceleration(t)
    }

    fn get_jerk(&self, t: f64) -> f64 {
        self.piece(t).jerk(t)
    }

    fn get_total_runtime(&self) -> f64 {
        self.duration
    }

    fn get_final_destination(&self) -> f64 {
        self.final_pos
    }

    fn get_time_sections(&self) -> impl Iterator<Item = f64> {
        [self.via.time, self.duration].into_iter()
    }
}
