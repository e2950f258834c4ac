use crate::{error::Result, math::Point3};

use super::{
    axes::Axes,
    quintic1d::{BoundaryState, Quintic1d},
};

/// Spatial boundary-value movement, one independent quintic per axis.
pub type Quintic3d = Axes<Quintic1d, 3>;

impl Quintic3d {
    pub fn new(start: [BoundaryState; 3], end: [BoundaryState; 3], duration: f64) -> Result<Self> {
        let [sx, sy, sz] = start;
        let [ex, ey, ez] = end;
        Ok(Self::from_axes([
            Quintic1d::new(sx, ex, duration)?,
            Quintic1d::new(sy, ey, duration)?,
            Quintic1d::new(sz, ez, duration)?,
        ]))
    }

    /// From rest at `initial_pos` to rest at `target_pos`.
    pub fn rest_to_rest(initial_pos: Point3, target_pos: Point3, duration: f64) -> Result<Self> {
        Self::new(
            initial_pos.to_array().map(BoundaryState::at_rest),
            target_pos.to_array().map(BoundaryState::at_rest),
            duration,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{math::Vec3, trajectories::Trajectory};

    #[test]
    fn catching_movement_reaches_its_final_state() {
        let rest = BoundaryState::at_rest(0.);
        let end = [
            BoundaryState::new(1., -0.5, 0.),
            BoundaryState::new(1., 2., 0.),
            BoundaryState::new(1., -0.25, 0.),
        ];
        let traj = Quintic3d::new([rest; 3], end, 1.2).unwrap();
        let p = Point3::from(traj.get_position(1.2));
        assert!(p.distance_to(Point3::new(1., 1., 1.)) < 1e-9);
        let v = Vec3::from(traj.get_velocity(1.2));
        assert!((v - Vec3::new(-0.5, 2., -0.25)).norm() < 1e-8);
        assert_eq!(Vec3::from(traj.get_velocity(0.)), Vec3::zero());
    }

    #[test]
    fn rest_to_rest_ends_still() {
        let traj = Quintic3d::rest_to_rest(Point3::new(0., 0., 0.), Point3::new(1., 2., 3.), 2.)
            .unwrap();
        assert!(Vec3::from(traj.get_velocity(2.)).norm() < 1e-12);
        assert!(Vec3::from(traj.get_acceleration(2.)).norm() < 1e-12);
    }
}
