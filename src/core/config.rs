use super::constants::*;

/// Breakpoints for the approach curve of the autoplay ease.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EaseParams {
    pub ramp_end: f64,
    pub cruise_end: f64,
    pub ramp_distance: f64,
}

impl Default for EaseParams {
    fn default() -> Self {
        Self {
            ramp_end: EASE_RAMP_END,
            cruise_end: EASE_CRUISE_END,
            ramp_distance: EASE_RAMP_DISTANCE,
        }
    }
}

/// Every tunable number the sequence is built from.
///
/// There is no runtime configuration surface; `Default` reads the constants
/// and the web front-end builds everything from that one value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequenceConfig {
    pub sign_budget: f32,
    pub last_sign_bonus: f32,
    pub ease: EaseParams,
    pub approach_share: f64,
    pub autoplay_duration_ms: f64,
    pub skip_duration_ms: f64,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            sign_budget: SIGN_SCROLL_BUDGET,
            last_sign_bonus: LAST_SIGN_BONUS,
            ease: EaseParams::default(),
            approach_share: AUTOPLAY_APPROACH_SHARE,
            autoplay_duration_ms: AUTOPLAY_DURATION_MS,
            skip_duration_ms: SKIP_DURATION_MS,
        }
    }
}
