//! Spatial catching movement: the hand rests at the origin for a random
//! onset time, then moves to the catch point where it arrives with a
//! non-zero velocity.

use std::{error::Error, io};

use minjerk::{
    math::Vec3,
    motion::{GridConfig, MotionKind, MotionRequest},
    sampling::sample,
    trajectories::{BoundaryState, Trajectory},
};
use rand::Rng;
use tracing::info;

const STEP: f64 = 1. / 90.;

fn main() -> Result<(), Box<dyn Error>> {
    minjerk::init_tracing();

    let mut rng = rand::thread_rng();
    let duration = rng.gen_range(1.0..1.5);
    let onset = rng.gen_range(0.3..0.9);

    let request = MotionRequest {
        kind: MotionKind::BoundaryValue {
            start: vec![BoundaryState::at_rest(0.); 3],
            end: vec![
                BoundaryState::new(1., -0.5, 0.),
                BoundaryState::new(1., 2., 0.),
                BoundaryState::new(1., -0.25, 0.),
            ],
        },
        duration,
        onset,
        grid: GridConfig {
            step: STEP,
            ..GridConfig::default()
        },
    };
    let planned = request.plan::<3>()?;
    let samples = sample(&planned, &request.grid.resolve(planned.get_total_runtime())?);

    let catch_vel = Vec3::from(planned.get_velocity(planned.get_total_runtime()));
    info!(
        duration,
        onset,
        catch_speed = catch_vel.norm(),
        samples = samples.len(),
        "catching movement"
    );

    serde_json::to_writer(io::stdout().lock(), &samples)?;
    Ok(())
}
