use crate::{error::Result, math::Point2};

use super::{axes::Axes, straight1d::Straight1d};

/// Planar rest-to-rest movement along the segment `initial_pos -> target_pos`.
pub type Straight2d = Axes<Straight1d, 2>;

impl Straight2d {
    pub fn new(initial_pos: Point2, target_pos: Point2, duration: f64) -> Result<Self> {
        Ok(Self::from_axes([
            Straight1d::new(initial_pos.x, target_pos.x, duration)?,
            Straight1d::new(initial_pos.y, target_pos.y, duration)?,
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{math::Line, trajectories::Trajectory};

    #[test]
    fn stays_on_the_segment() {
        let (start, end) = (Point2::zero(), Point2::new(1.1, 0.9));
        let traj = Straight2d::new(start, end, 1.).unwrap();
        let line = Line::new(start, end);
        for i in 0..=100 {
            let p = Point2::from(traj.get_position(i as f64 / 100.));
            assert!(line.distance_to(p) < 1e-12);
        }
    }
}
