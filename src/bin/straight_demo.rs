use std::{error::Error, io};

use minjerk::{
    math::{Point2, Vec2},
    sampling::{sample, TimeGrid},
    trajectories::{Straight2d, Trajectory},
    DEFAULT_SAMPLE_STEP,
};
use tracing::info;

const DURATION: f64 = 1.0;

fn main() -> Result<(), Box<dyn Error>> {
    minjerk::init_tracing();

    let start = Point2::zero();
    let target = Point2::new(1.1, 0.9);
    let traj = Straight2d::new(start, target, DURATION)?;

    let samples = sample(&traj, &TimeGrid::new(0., DURATION, DEFAULT_SAMPLE_STEP)?);
    if let Some(peak) = samples
        .iter()
        .max_by(|a, b| Vec2::from(a.vel).norm().total_cmp(&Vec2::from(b.vel).norm()))
    {
        // the bell shaped profile peaks at 1.875 times the mean speed, halfway through
        info!(
            t = peak.t,
            speed = Vec2::from(peak.vel).norm(),
            mean_speed = start.distance_to(target) / DURATION,
            "peak speed"
        );
    }

    serde_json::to_writer(io::stdout().lock(), &samples)?;
    Ok(())
}
