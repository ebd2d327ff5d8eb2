// Host-side tests for the sign band layout.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sequence {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod bands {
        include!("../src/core/bands.rs");
    }
}

use sequence::bands::*;
use sequence::constants::*;

const SIGNS: [usize; 6] = [10, 20, 10, 15, 25, 40];

fn schedule(lengths: &[usize]) -> BandSchedule {
    BandSchedule::new(lengths, SIGN_SCROLL_BUDGET, LAST_SIGN_BONUS).expect("valid schedule")
}

#[test]
fn bands_are_contiguous_and_end_after_the_bonus() {
    let s = schedule(&SIGNS);
    assert_eq!(s.len(), SIGNS.len());
    assert_eq!(s.bands()[0].start, 0.0);
    for pair in s.bands().windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
        assert!(pair[0].end > pair[0].start);
    }
    assert!((s.end() - 0.63).abs() < 1e-6);
}

#[test]
fn slots_are_proportional_to_text_length() {
    let s = schedule(&SIGNS);
    let b = s.bands();
    // 10 of 120 characters
    assert!((b[0].len() - 0.55 * 10.0 / 120.0).abs() < 1e-6);
    // Equal text length, equal slot
    assert!((b[0].len() - b[2].len()).abs() < 1e-6);
    // Last sign gets its share plus the bonus
    assert!((b[5].len() - (0.55 * 40.0 / 120.0 + 0.08)).abs() < 1e-5);
}

#[test]
fn only_the_first_band_is_marked_first() {
    let s = schedule(&SIGNS);
    assert!(s.bands()[0].is_first);
    assert!(s.bands()[1..].iter().all(|b| !b.is_first));
    for (i, b) in s.bands().iter().enumerate() {
        assert_eq!(b.index, i);
    }
}

#[test]
fn fade_is_a_quarter_of_each_slot() {
    let s = schedule(&SIGNS);
    for b in s.bands() {
        assert!((b.fade - b.len() * 0.25).abs() < 1e-6);
        assert!(b.fade_out_start() > b.start);
    }
}

#[test]
fn target_stop_is_start_of_last_band() {
    let s = schedule(&SIGNS);
    assert!((s.target_stop() - 0.55 * 80.0 / 120.0).abs() < 1e-5);
    assert_eq!(s.target_stop(), s.last().map(|b| b.start).unwrap_or_default());
}

#[test]
fn all_empty_signs_split_the_budget_evenly() {
    let s = schedule(&[0, 0, 0, 0]);
    let b = s.bands();
    for band in &b[..3] {
        assert!((band.len() - 0.55 / 4.0).abs() < 1e-6);
    }
    assert!((b[3].len() - (0.55 / 4.0 + 0.08)).abs() < 1e-6);
    assert!((s.end() - 0.63).abs() < 1e-6);
}

#[test]
fn an_empty_sign_among_others_gets_an_empty_band() {
    let s = schedule(&[0, 10]);
    assert!(s.bands()[0].is_empty());
    assert_eq!(s.bands()[1].start, 0.0);
    assert!(!s.bands()[1].is_empty());
}

#[test]
fn no_signs_yield_an_empty_schedule() {
    let s = schedule(&[]);
    assert!(s.is_empty());
    assert_eq!(s.end(), 0.0);
    assert_eq!(s.target_stop(), 0.0);
    assert!(s.last().is_none());
}

#[test]
fn invalid_budgets_are_rejected() {
    assert_eq!(
        BandSchedule::new(&SIGNS, -0.1, 0.08),
        Err(ScheduleError::InvalidBudget(-0.1))
    );
    assert!(matches!(
        BandSchedule::new(&SIGNS, 0.55, f32::NAN),
        Err(ScheduleError::InvalidBonus(_))
    ));
    assert!(matches!(
        BandSchedule::new(&SIGNS, 0.95, 0.08),
        Err(ScheduleError::BudgetExceedsRange { .. })
    ));
}
