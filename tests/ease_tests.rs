// Host-side tests for the autoplay and skip easing curves.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sequence {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod ease {
        include!("../src/core/ease.rs");
    }
}

use sequence::config::EaseParams;
use sequence::ease::*;

// Start of the last sign for the default landing page layout.
const TARGET: f64 = 0.55 * 80.0 / 120.0;

fn approach() -> PiecewiseEase {
    PiecewiseEase::new(TARGET, EaseParams::default()).expect("feasible curve")
}

fn assert_monotone(f: impl Fn(f64) -> f64, samples: usize) {
    let mut prev = f(0.0);
    for i in 1..=samples {
        let t = i as f64 / samples as f64;
        let v = f(t);
        assert!(v >= prev - 1e-12, "curve decreases at t={t}: {prev} -> {v}");
        prev = v;
    }
}

#[test]
fn approach_starts_at_zero_and_stops_at_target() {
    let c = approach();
    assert_eq!(c.value(0.0), 0.0);
    assert!((c.value(1.0) - TARGET).abs() < 1e-12);
    // Out-of-range inputs clamp
    assert_eq!(c.value(-1.0), 0.0);
    assert!((c.value(2.0) - TARGET).abs() < 1e-12);
}

#[test]
fn approach_is_monotone() {
    let c = approach();
    assert_monotone(|t| c.value(t), 200);
}

#[test]
fn approach_is_continuous_with_continuous_slope_at_breakpoints() {
    let c = approach();
    let (ramp_end, cruise_end) = c.breakpoints();
    let h = 1e-7;
    for b in [ramp_end, cruise_end] {
        assert!((c.value(b + h) - c.value(b)).abs() < 1e-6, "value jumps at {b}");
        let left = (c.value(b) - c.value(b - h)) / h;
        let right = (c.value(b + h) - c.value(b)) / h;
        assert!((left - right).abs() < 1e-3, "slope jumps at {b}: {left} vs {right}");
        assert!((c.velocity(b) - c.cruise_velocity()).abs() < 1e-9);
    }
}

#[test]
fn cruise_is_constant_velocity() {
    let c = approach();
    let a = c.value(0.2) - c.value(0.1);
    let b = c.value(0.6) - c.value(0.5);
    assert!((a - b).abs() < 1e-12);
}

#[test]
fn infeasible_parameters_are_rejected() {
    let bad_order = EaseParams {
        ramp_end: 0.5,
        cruise_end: 0.3,
        ..EaseParams::default()
    };
    assert!(matches!(
        PiecewiseEase::new(TARGET, bad_order),
        Err(EaseError::InvalidBreakpoints { .. })
    ));
    assert!(matches!(
        PiecewiseEase::new(0.05, EaseParams::default()),
        Err(EaseError::InvalidTarget { .. })
    ));
    assert!(matches!(
        PiecewiseEase::new(f64::NAN, EaseParams::default()),
        Err(EaseError::InvalidTarget { .. })
    ));
    // Too far to cover without overshooting and coming back
    assert!(matches!(
        PiecewiseEase::new(0.9, EaseParams::default()),
        Err(EaseError::NonMonotonic { .. })
    ));
}

#[test]
fn autoplay_reaches_target_then_page_end() {
    let curve = AutoplayEase::new(Some(approach()), 0.8);
    assert_eq!(curve.value(0.0), 0.0);
    assert!((curve.value(0.8) - TARGET).abs() < 1e-9);
    assert!((curve.value(1.0) - 1.0).abs() < 1e-12);
    assert_monotone(|t| curve.value(t), 1000);
}

#[test]
fn autoplay_slope_is_continuous_into_the_finale() {
    let curve = AutoplayEase::new(Some(approach()), 0.8);
    let h = 1e-7;
    let left = (curve.value(0.8) - curve.value(0.8 - h)) / h;
    let right = (curve.value(0.8 + h) - curve.value(0.8)) / h;
    assert!((left - right).abs() < 1e-3, "{left} vs {right}");
}

#[test]
fn autoplay_without_approach_is_a_plain_ease_in() {
    let curve = AutoplayEase::new(None, 0.8);
    assert!(curve.approach().is_none());
    assert_eq!(curve.value(0.0), 0.0);
    assert!((curve.value(0.5) - 0.25).abs() < 1e-12);
    assert_eq!(curve.value(1.0), 1.0);
}

#[test]
fn autoplay_rejects_a_degenerate_share() {
    for share in [0.0, 1.0, 1.5, f64::NAN] {
        let curve = AutoplayEase::new(Some(approach()), share);
        assert!(curve.approach().is_none(), "share {share} accepted");
        assert!((curve.value(1.0) - 1.0).abs() < 1e-12);
    }
}

#[test]
fn skip_curve_has_a_lead_in_then_lands() {
    let skip = SkipEase;
    assert_eq!(skip.ease(0.0), 0.0);
    assert!((skip.ease(0.3) - 0.3).abs() < 1e-12);
    assert!((skip.ease(1.0) - 1.0).abs() < 1e-12);
    assert_monotone(|t| skip.ease(t), 200);
}

#[test]
fn helpers_never_produce_nan() {
    assert_eq!(unit(f64::NAN), 0.0);
    assert_eq!(Linear.ease(2.0), 1.0);
    assert_eq!(smoothstep(0.5, 0.5, 0.5), 0.0);
    assert_eq!(smoothstep(0.6, 0.5, 0.5), 1.0);
    assert!((smoothstep(0.5, 0.0, 1.0) - 0.5).abs() < 1e-6);
}
