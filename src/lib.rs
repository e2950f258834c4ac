#![deny(clippy::unwrap_used)]
//! Minimum jerk point-to-point motion profiles.
//!
//! - [`trajectories`]: per-axis solvers (boundary-value quintic, via-point
//!   curve, straight line) and their multi-axis composition
//! - [`sampling`]: evaluation over time grids
//! - [`motion`]: serializable trajectory requests
//!
//! Every trajectory is solved once at construction and is immutable
//! afterwards, so it can be shared between threads and queried at any time.

pub mod error;
pub mod math;
pub mod motion;
pub mod sampling;
pub mod trajectories;

use tracing_subscriber::EnvFilter;

pub use error::{DomainError, PrecisionWarning};

/// sampling period used when a request does not specify one, in seconds
pub const DEFAULT_SAMPLE_STEP: f64 = 0.01;

const DEFAULT_LOG_FILTER: &str = "info";

/// Installs the stderr log subscriber used by the binaries, honoring
/// `RUST_LOG` when it is set.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
