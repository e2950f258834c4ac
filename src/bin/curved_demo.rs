use std::{error::Error, io};

use minjerk::{
    math::{Line, Point2, Vec2},
    sampling::{sample, TimeGrid},
    trajectories::{Curved2d, Trajectory},
    DEFAULT_SAMPLE_STEP,
};
use tracing::{info, warn};

const DURATION: f64 = 1.0;

fn main() -> Result<(), Box<dyn Error>> {
    minjerk::init_tracing();

    let start = Point2::zero();
    let via = Point2::new(-0.1, 0.4);
    let target = Point2::new(1., 1.);
    let via_time = DURATION / 2.;

    let traj = Curved2d::new(start, via, via_time, target, DURATION)?;
    if let Some(w) = traj.precision_warning() {
        warn!(%w, "via point too close to the movement boundaries");
    }

    let reached = Point2::from(traj.get_position(via_time));
    info!(
        error = reached.distance_to(via),
        "via point reached at t = {via_time}"
    );

    let before = Vec2::from(traj.get_jerk(via_time));
    let after = Vec2::from(traj.get_jerk(via_time + 1e-9));
    info!(jump = (after - before).norm(), "jerk across the via point");

    let samples = sample(&traj, &TimeGrid::new(0., DURATION, DEFAULT_SAMPLE_STEP)?);
    let chord = Line::new(start, target);
    let deviation = samples
        .iter()
        .map(|s| chord.distance_to(Point2::from(s.pos)))
        .fold(0., f64::max);
    info!(deviation, "largest distance from the straight path");

    serde_json::to_writer(io::stdout().lock(), &samples)?;
    Ok(())
}
