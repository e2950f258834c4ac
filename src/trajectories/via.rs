// Flash & Hogan (1985), Appendix C: two-piece minimum jerk through one via point

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_duration, ensure_finite, DomainError, PrecisionWarning, Result};

use super::polynomial::Quintic;

/// below this value of `tau1 * (1 - tau1)` a [`PrecisionWarning`] is attached
pub const PRECISION_WARNING_THRESHOLD: f64 = 1e-3;

/// Interior point a curved trajectory must pass through.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ViaPoint {
    pub pos: f64,
    pub time: f64,
}

impl ViaPoint {
    pub fn new(pos: f64, time: f64) -> Self {
        Self { pos, time }
    }
}

/// The two free shape parameters `(c, pi)` of one axis.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct ViaShape {
    pub c: f64,
    pub pi: f64,
    /// via time normalized by the total duration
    pub tau1: f64,
    pub warning: Option<PrecisionWarning>,
}

impl ViaShape {
    pub fn solve(
        x0: f64,
        x_via: f64,
        x_final: f64,
        duration: f64,
        via_time: f64,
    ) -> Result<Self> {
        let tf = ensure_duration(duration)?;
        ensure_finite("initial position", x0)?;
        ensure_finite("via position", x_via)?;
        ensure_finite("final position", x_final)?;
        ensure_finite("via time", via_time)?;
        if via_time <= 0. || via_time >= tf {
            return Err(DomainError::ViaTimeOutOfRange { via_time, duration });
        }

        let tau1 = via_time / tf;
        // t1 / tf can still round onto a boundary for extreme ratios
        if tau1 <= 0. || tau1 >= 1. {
            return Err(DomainError::ViaTimeOutOfRange { via_time, duration });
        }

        let conditioning = tau1 * (1. - tau1);
        // callers log it once per movement
        let warning = (conditioning < PRECISION_WARNING_THRESHOLD)
            .then_some(PrecisionWarning { tau1, conditioning });

        let tf5 = tf.powi(5);
        let one_minus5 = (1. - tau1).powi(5);
        let dx = x_final - x0;

        let c_num = dx * (300. * tau1.powi(5) - 1200. * tau1.powi(4) + 1600. * tau1.powi(3))
            + tau1.powi(2) * (-720. * x_final + 120. * x_via + 600. * x0)
            + (x0 - x_via) * (300. * tau1 - 200.);
        let c = c_num / (tf5 * tau1.powi(2) * one_minus5);

        let pi_num = dx * (120. * tau1.powi(5) - 300. * tau1.powi(4) + 200. * tau1.powi(3))
            - 20. * (x_via - x0);
        let pi = pi_num / (tf5 * tau1.powi(5) * one_minus5);
        ensure_finite("shape parameter c", c)?;
        ensure_finite("shape parameter pi", pi)?;

        debug!(x0, x_via, x_final, tf, tau1, c, pi, "solved via shape");
        Ok(Self {
            c,
            pi,
            tau1,
            warning,
        })
    }

    /// Pre-via form `x⁻`, valid for `t <= t1`, in absolute time.
    pub(crate) fn pre_via(&self, x0: f64, duration: f64) -> Quintic {
        let Self { c, pi, tau1, .. } = *self;
        let f = duration.powi(5) / 720.;
        let t2 = tau1 * tau1;
        let t3 = t2 * tau1;
        let t4 = t3 * tau1;
        Quintic::from_normalized(
            [
                x0,
                0.,
                0.,
                f * (pi * (-30. * t4 + 80. * t3 - 60. * t2) - 10. * c),
                f * (pi * (15. * t4 - 30. * t3 + 30. * tau1) + 15. * c),
                f * (-6. * pi - 6. * c),
            ],
            duration,
        )
    }

    /// Post-via form `x⁺`, valid for `t > t1`, in absolute time.
    pub(crate) fn post_via(&self, x_final: f64, duration: f64) -> Quintic {
        let Self { c, pi, tau1, .. } = *self;
        let f = duration.powi(5) / 720.;
        let t3 = tau1 * tau1 * tau1;
        let t4 = t3 * tau1;
        Quintic::from_normalized(
            [
                f * (pi * (-15. * t4 + 10. * t3) + c) + x_final,
                f * pi * 30. * t4,
                f * pi * -60. * t3,
                f * (pi * (-30. * t4 + 80. * t3) - 10. * c),
                f * (pi * (15. * t4 - 30. * t3) + 15. * c),
                f * -6. * c,
            ],
            duration,
        )
    }
}
