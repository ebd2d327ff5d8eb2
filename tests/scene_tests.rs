// Host-side tests for scroll progress and the scene projector.
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
    pub mod bands {
        include!("../src/core/bands.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod sync {
        include!("../src/core/sync.rs");
    }
}

use sequence::bands::BandSchedule;
use sequence::constants::*;
use sequence::scene::*;
use sequence::sync::*;

fn params(lengths: &[usize]) -> SceneParams {
    let schedule = BandSchedule::new(lengths, SIGN_SCROLL_BUDGET, LAST_SIGN_BONUS)
        .expect("valid schedule");
    SceneParams::new(&schedule)
}

fn landing() -> SceneParams {
    params(&[10, 20, 10, 15, 25, 40])
}

#[test]
fn top_of_page_shows_the_first_sign_in_the_tunnel() {
    let s = project(0.0, &landing());
    assert_eq!(s.sign_opacity[0], 1.0);
    assert!(s.sign_opacity[1..].iter().all(|&o| o == 0.0));
    assert_eq!(s.camera_z, 0.0);
    assert_eq!(s.bar_opacity, 1.0);
    assert!(s.bar_interactive);
    assert_eq!(s.tunnel_opacity, 1.0);
    assert_eq!(s.star_opacity, 0.0);
    assert_eq!(s.star_scale, STARFIELD_MIN_SCALE);
    assert_eq!(s.tagline.opacity, 0.0);
    assert_eq!(s.tagline.offset_y_px, -TAGLINE_DROP_PX);
    assert_eq!(s.logo_opacity, 0.0);
    assert_eq!(s.logo_scale, LOGO_MIN_SCALE);
    assert!(!s.cta_visible);
}

#[test]
fn bottom_of_page_shows_the_logo_in_the_stars() {
    let s = project(1.0, &landing());
    assert!(s.sign_opacity.iter().all(|&o| o == 0.0));
    assert_eq!(s.camera_z, -(TUNNEL_DEPTH + CAMERA_TRAVEL_BEYOND));
    assert_eq!(s.bar_opacity, 0.0);
    assert!(!s.bar_interactive);
    assert_eq!(s.tunnel_opacity, 0.0);
    assert_eq!(s.star_opacity, 1.0);
    assert!((s.star_scale - (STARFIELD_MIN_SCALE + STARFIELD_SCALE_SPAN)).abs() < 1e-6);
    assert_eq!(s.tagline.opacity, 1.0);
    assert_eq!(s.tagline.offset_y_px.abs(), 0.0);
    assert_eq!(s.subline.opacity, 1.0);
    assert_eq!(s.logo_opacity, 1.0);
    assert!((s.logo_scale - 1.0).abs() < 1e-6);
    assert!(s.cta_visible);
}

#[test]
fn cta_waits_for_the_logo_to_finish() {
    let p = landing();
    assert!(!project(0.9, &p).cta_visible);
    assert!(project(0.96, &p).cta_visible);
}

#[test]
fn each_sign_is_fully_visible_mid_band() {
    let p = landing();
    for band in p.bands() {
        let s = project(band.start + band.len() * 0.5, &p);
        for (i, &o) in s.sign_opacity.iter().enumerate() {
            let expected = if i == band.index { 1.0 } else { 0.0 };
            assert_eq!(o, expected, "sign {i} mid band {}", band.index);
        }
    }
}

#[test]
fn at_most_two_signs_overlap() {
    let p = landing();
    for i in 0..=1000 {
        let s = project(i as f32 / 1000.0, &p);
        let visible = s.sign_opacity.iter().filter(|&&o| o > 0.0).count();
        assert!(visible <= 2, "{visible} signs visible at {i}");
    }
}

#[test]
fn signs_fade_out_at_the_end_of_their_band() {
    let p = landing();
    let band = p.bands()[2];
    let mut prev = 1.0;
    for i in 0..=20 {
        let x = band.fade_out_start() + band.fade * i as f32 / 20.0;
        let o = sign_opacity(&band, x);
        assert!(o <= prev + 1e-6);
        prev = o;
    }
    assert_eq!(sign_opacity(&band, band.end), 0.0);
}

#[test]
fn empty_band_stays_hidden() {
    let p = params(&[0, 10]);
    for i in 0..=100 {
        assert_eq!(project(i as f32 / 100.0, &p).sign_opacity[0], 0.0);
    }
}

#[test]
fn reveal_channels_move_one_way() {
    let p = landing();
    let mut prev = project(0.0, &p);
    for i in 1..=500 {
        let s = project(i as f32 / 500.0, &p);
        assert!(s.camera_z <= prev.camera_z);
        assert!(s.tunnel_opacity <= prev.tunnel_opacity);
        assert!(s.star_opacity >= prev.star_opacity);
        assert!(s.logo_opacity >= prev.logo_opacity);
        assert!(s.subline.opacity >= prev.subline.opacity);
        prev = s;
    }
}

#[test]
fn degenerate_input_stays_finite() {
    let empty = SceneParams::default();
    for p in [f32::NAN, -1.0, 0.0, 0.5, 1.0, 2.0] {
        for s in [project(p, &empty), project(p, &landing())] {
            let channels = [
                s.camera_z,
                s.bar_opacity,
                s.tunnel_opacity,
                s.star_opacity,
                s.star_scale,
                s.tagline.opacity,
                s.tagline.offset_y_px,
                s.subline.opacity,
                s.subline.offset_y_px,
                s.logo_opacity,
                s.logo_scale,
            ];
            assert!(channels.iter().all(|c| c.is_finite()), "NaN at {p}");
            assert!(s.sign_opacity.iter().all(|o| o.is_finite()));
        }
    }
    assert_eq!(project(0.3, &empty).bar_opacity, 1.0);
}

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics {
        scroll_y,
        spacer_top: 0.0,
        spacer_height: 3000.0,
        viewport_height: 1000.0,
    }
}

#[test]
fn progress_is_measured_against_the_spacer() {
    assert_eq!(metrics(0.0).max_scroll(), 2000.0);
    assert_eq!(metrics(1000.0).progress(), 0.5);
    assert_eq!(metrics(2000.0).progress(), 1.0);
    // Content below the spacer
    assert_eq!(metrics(2600.0).progress(), 1.0);
    // Overscroll bounce
    assert_eq!(metrics(-40.0).progress(), 0.0);
}

#[test]
fn nothing_to_scroll_means_zero_progress() {
    let short = ScrollMetrics {
        scroll_y: 10.0,
        spacer_top: 0.0,
        spacer_height: 500.0,
        viewport_height: 800.0,
    };
    assert_eq!(short.progress(), 0.0);
    let unmeasured = ScrollMetrics {
        viewport_height: f64::NAN,
        ..metrics(100.0)
    };
    assert_eq!(unmeasured.progress(), 0.0);
}

#[test]
fn only_touches_outside_the_bar_cancel() {
    assert!(ManualInput::Wheel.cancels_autoplay());
    assert!(ManualInput::Touch { inside_bar: false }.cancels_autoplay());
    assert!(!ManualInput::Touch { inside_bar: true }.cancels_autoplay());
}
