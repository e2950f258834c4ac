mod axes;
mod curved1d;
pub mod curved2d;
mod onset;
mod polynomial;
mod quintic1d;
pub mod quintic3d;
mod straight1d;
pub mod straight2d;
mod via;

pub use axes::Axes;
pub use curved1d::Curved1d;
pub use curved2d::Curved2d;
pub use onset::Onset;
pub use polynomial::Quintic;
pub use quintic1d::{BoundaryState, Quintic1d};
pub use quintic3d::Quintic3d;
pub use straight1d::{min_jerk_blend, straight_position, Straight1d};
pub use straight2d::Straight2d;
pub use via::{ViaPoint, ViaShape, PRECISION_WARNING_THRESHOLD};

/// A motion profile that can be queried at any time, in any order.
///
/// Times before `0` or after [`Trajectory::get_total_runtime`] are not
/// clamped unless the implementation says otherwise.
pub trait Trajectory<P, V> {
    fn get_position(&self, t: f64) -> P;
    fn get_velocity(&self, t: f64) -> V;
    fn get_acceleration(&self, t: f64) -> V;
    fn get_jerk(&self, t: f64) -> V;
    fn get_total_runtime(&self) -> f64;
    fn get_final_destination(&self) -> P;
    /// end times of the pieces making up the trajectory, in order
    fn get_time_sections(&self) -> impl Iterator<Item = f64>;
}
