use super::config::EaseParams;
use super::constants::SKIP_LEAD_IN;

/// Maps normalized time in [0, 1] to a normalized position.
pub trait Easing {
    fn ease(&self, t: f64) -> f64;
}

/// Clamp to [0, 1], mapping NaN to 0.
#[inline]
pub fn unit(x: f64) -> f64 {
    if x.is_nan() {
        0.0
    } else {
        x.clamp(0.0, 1.0)
    }
}

/// Hermite smoothstep of `x` between `min` and `max`.
///
/// Degenerate windows (`min >= max`) behave as a hard step at `max`, so a
/// zero-length window never produces NaN.
#[inline]
pub fn smoothstep(x: f32, min: f32, max: f32) -> f32 {
    if x <= min {
        return 0.0;
    }
    if x >= max {
        return 1.0;
    }
    let t = (x - min) / (max - min);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Linear;

impl Easing for Linear {
    fn ease(&self, t: f64) -> f64 {
        unit(t)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EaseError {
    #[error("breakpoints must satisfy 0 < ramp_end ({ramp_end}) < cruise_end ({cruise_end}) < 1")]
    InvalidBreakpoints { ramp_end: f64, cruise_end: f64 },
    #[error("target stop {target} must lie in (ramp_distance {ramp_distance}, 1]")]
    InvalidTarget { target: f64, ramp_distance: f64 },
    #[error("arrival segment would reverse direction (exit slope {exit_slope})")]
    NonMonotonic { exit_slope: f64 },
}

/// Ramp → cruise → arrival curve that stops at `target`.
///
/// Value and first derivative are continuous at both breakpoints:
/// - `[0, ramp_end]`: quadratic ease-in whose exit slope equals the cruise slope
/// - `(ramp_end, cruise_end]`: constant velocity `(target - ramp_distance) / (cruise_end - ramp_end)`
/// - `(cruise_end, 1]`: quadratic leaving the cruise at its value and slope,
///   landing exactly on `target` at `t = 1`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiecewiseEase {
    ramp_end: f64,
    cruise_end: f64,
    target: f64,
    ramp_accel: f64,
    cruise_velocity: f64,
    cruise_exit: f64,
    arrival_linear: f64,
    arrival_quadratic: f64,
}

impl PiecewiseEase {
    pub fn new(target: f64, params: EaseParams) -> Result<Self, EaseError> {
        let EaseParams {
            ramp_end,
            cruise_end,
            ramp_distance,
        } = params;
        let ordered = ramp_end.is_finite()
            && cruise_end.is_finite()
            && 0.0 < ramp_end
            && ramp_end < cruise_end
            && cruise_end < 1.0;
        if !ordered {
            return Err(EaseError::InvalidBreakpoints {
                ramp_end,
                cruise_end,
            });
        }
        let target_ok = target.is_finite()
            && ramp_distance.is_finite()
            && ramp_distance >= 0.0
            && ramp_distance < target
            && target <= 1.0;
        if !target_ok {
            return Err(EaseError::InvalidTarget {
                target,
                ramp_distance,
            });
        }

        let cruise_velocity = (target - ramp_distance) / (cruise_end - ramp_end);
        // d/dt of a·(t/ramp_end)² at ramp_end is 2a/ramp_end
        let ramp_accel = cruise_velocity * ramp_end / 2.0;
        let cruise_exit = ramp_accel + cruise_velocity * (cruise_end - ramp_end);
        let arrival_len = 1.0 - cruise_end;
        let arrival_linear = cruise_velocity * arrival_len;
        let arrival_quadratic = target - cruise_exit - arrival_linear;

        let exit_slope = (arrival_linear + 2.0 * arrival_quadratic) / arrival_len;
        if exit_slope < -1e-12 {
            return Err(EaseError::NonMonotonic { exit_slope });
        }

        Ok(Self {
            ramp_end,
            cruise_end,
            target,
            ramp_accel,
            cruise_velocity,
            cruise_exit,
            arrival_linear,
            arrival_quadratic,
        })
    }

    #[inline]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[inline]
    pub fn cruise_velocity(&self) -> f64 {
        self.cruise_velocity
    }

    #[inline]
    pub fn breakpoints(&self) -> (f64, f64) {
        (self.ramp_end, self.cruise_end)
    }

    pub fn value(&self, t: f64) -> f64 {
        let t = unit(t);
        if t <= self.ramp_end {
            let r = t / self.ramp_end;
            self.ramp_accel * r * r
        } else if t <= self.cruise_end {
            self.ramp_accel + self.cruise_velocity * (t - self.ramp_end)
        } else {
            let r = (t - self.cruise_end) / (1.0 - self.cruise_end);
            self.cruise_exit + self.arrival_linear * r + self.arrival_quadratic * r * r
        }
    }

    /// Analytic first derivative with respect to `t`.
    pub fn velocity(&self, t: f64) -> f64 {
        let t = unit(t);
        if t <= self.ramp_end {
            2.0 * self.ramp_accel * t / (self.ramp_end * self.ramp_end)
        } else if t <= self.cruise_end {
            self.cruise_velocity
        } else {
            let len = 1.0 - self.cruise_end;
            let r = (t - self.cruise_end) / len;
            (self.arrival_linear + 2.0 * self.arrival_quadratic * r) / len
        }
    }
}

impl Easing for PiecewiseEase {
    fn ease(&self, t: f64) -> f64 {
        self.value(t)
    }
}

/// Full autoplay curve: the approach to the last sign, then an accelerating
/// finale to the end of the page.
///
/// The finale starts at the approach's exit value and velocity. Without an
/// approach the whole duration is a quadratic ease-in from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AutoplayEase {
    approach: Option<PiecewiseEase>,
    approach_share: f64,
    finale_start: f64,
    finale_linear: f64,
    finale_quadratic: f64,
}

impl AutoplayEase {
    pub fn new(approach: Option<PiecewiseEase>, approach_share: f64) -> Self {
        let share_ok = approach_share.is_finite() && approach_share > 0.0 && approach_share < 1.0;
        let approach = approach.filter(|_| share_ok);
        let Some(curve) = approach else {
            return Self {
                approach: None,
                approach_share: 0.0,
                finale_start: 0.0,
                finale_linear: 0.0,
                finale_quadratic: 1.0,
            };
        };
        let start = curve.target();
        let remaining = 1.0 - start;
        // Rescale the exit velocity from approach-time to finale-time units.
        let linear = (curve.velocity(1.0) * (1.0 - approach_share) / approach_share)
            .clamp(0.0, 2.0 * remaining);
        Self {
            approach: Some(curve),
            approach_share,
            finale_start: start,
            finale_linear: linear,
            finale_quadratic: remaining - linear,
        }
    }

    #[inline]
    pub fn approach(&self) -> Option<&PiecewiseEase> {
        self.approach.as_ref()
    }

    #[inline]
    pub fn approach_share(&self) -> f64 {
        self.approach_share
    }

    pub fn value(&self, t: f64) -> f64 {
        let t = unit(t);
        if let Some(curve) = &self.approach {
            if t < self.approach_share {
                return curve.value(t / self.approach_share);
            }
        }
        let r = (t - self.approach_share) / (1.0 - self.approach_share);
        self.finale_start + self.finale_linear * r + self.finale_quadratic * r * r
    }
}

impl Easing for AutoplayEase {
    fn ease(&self, t: f64) -> f64 {
        self.value(t)
    }
}

/// Short two-phase curve used by the skip button: a quadratic lead-in
/// followed by a long cubic landing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SkipEase;

impl Easing for SkipEase {
    fn ease(&self, t: f64) -> f64 {
        let t = unit(t);
        if t < SKIP_LEAD_IN {
            let r = t / SKIP_LEAD_IN;
            r * r * SKIP_LEAD_IN
        } else {
            let r = (t - SKIP_LEAD_IN) / (1.0 - SKIP_LEAD_IN);
            SKIP_LEAD_IN + (1.0 - SKIP_LEAD_IN) * (1.0 - (1.0 - r).powi(3))
        }
    }
}
