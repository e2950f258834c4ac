//! Reads one JSON trajectory request on stdin and writes the planned motion,
//! sampled on the request's grid, as JSON on stdout.

use std::{
    io::{self, Read, Write},
    process::ExitCode,
};

use minjerk::{
    motion::MotionRequest,
    sampling::{sample, Sample},
    trajectories::Trajectory,
    DomainError, PrecisionWarning,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
enum PlanError {
    #[error("couldn't read the request or write the response: {0}")]
    Io(#[from] io::Error),
    #[error("malformed request: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("unsupported number of axes: {0} (expected 1, 2 or 3)")]
    UnsupportedDimensions(usize),
}

#[derive(Serialize)]
struct Response<P, V> {
    runtime: f64,
    onset: f64,
    time_sections: Vec<f64>,
    precision_warning: Option<PrecisionWarning>,
    samples: Vec<Sample<P, V>>,
}

fn respond<const N: usize>(request: &MotionRequest, out: impl Write) -> Result<(), PlanError>
where
    [f64; N]: Serialize,
{
    let planned = request.plan::<N>()?;
    let grid = request.grid.resolve(planned.get_total_runtime())?;
    let samples = sample(&planned, &grid);
    info!(
        dimensions = N,
        runtime = planned.get_total_runtime(),
        samples = samples.len(),
        "planned request"
    );

    let response = Response {
        runtime: planned.get_total_runtime(),
        onset: planned.onset(),
        time_sections: planned.get_time_sections().collect(),
        precision_warning: planned.precision_warning(),
        samples,
    };
    serde_json::to_writer_pretty(out, &response)?;
    Ok(())
}

fn run() -> Result<(), PlanError> {
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    let request: MotionRequest = serde_json::from_str(&input)?;

    let mut out = io::stdout().lock();
    match request.dimensions() {
        1 => respond::<1>(&request, &mut out)?,
        2 => respond::<2>(&request, &mut out)?,
        3 => respond::<3>(&request, &mut out)?,
        n => return Err(PlanError::UnsupportedDimensions(n)),
    }
    writeln!(out)?;
    Ok(())
}

fn main() -> ExitCode {
    minjerk::init_tracing();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
