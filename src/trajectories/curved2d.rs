use crate::{
    error::{PrecisionWarning, Result},
    math::Point2,
};

use super::{axes::Axes, curved1d::Curved1d, via::ViaPoint};

/// Planar curved movement through one via point (Flash & Hogan, 1985).
pub type Curved2d = Axes<Curved1d, 2>;

impl Curved2d {
    pub fn new(
        initial_pos: Point2,
        via_pos: Point2,
        via_time: f64,
        target_pos: Point2,
        duration: f64,
    ) -> Result<Self> {
        let x = Curved1d::new(
            initial_pos.x,
            ViaPoint::new(via_pos.x, via_time),
            target_pos.x,
            duration,
        )?;
        let y = Curved1d::new(
            initial_pos.y,
            ViaPoint::new(via_pos.y, via_time),
            target_pos.y,
            duration,
        )?;
        Ok(Self::from_axes([x, y]))
    }

    pub fn via_time(&self) -> f64 {
        self.axis(0).map_or(0., |x| x.via().time)
    }

    /// the normalized via time is shared, so every axis carries the same warning
    pub fn precision_warning(&self) -> Option<PrecisionWarning> {
        self.iter().find_map(|axis| axis.shape().warning)
    }
}
