// Host-side tests for the gradient offset.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod gradient {
    include!("../src/core/gradient.rs");
}

use constants::{GRADIENT_PERIOD, GRADIENT_STEP};
use gradient::*;

fn run_frames(offset: &mut GradientOffset, frames: usize) {
    for _ in 0..frames {
        offset.advance();
    }
}

#[test]
fn offset_starts_at_origin() {
    let offset = GradientOffset::new();
    assert_eq!(offset.value(), 0.0);
    assert_eq!(offset.css_position(), "0% 50%");
}

#[test]
fn offset_after_k_frames_is_k_steps() {
    for k in [1usize, 2, 10, 137, 1000] {
        let mut offset = GradientOffset::new();
        run_frames(&mut offset, k);
        let expected = (k as f64 * GRADIENT_STEP) % GRADIENT_PERIOD;
        assert!(
            (offset.value() - expected).abs() < 1e-9,
            "k={k}: got {} expected {expected}",
            offset.value()
        );
    }
}

#[test]
fn offset_wraps_on_period() {
    let mut offset = GradientOffset::new();
    // 12_000 frames cover exactly one period; ten more land just past the wrap
    run_frames(&mut offset, 12_010);
    assert!((offset.value() - 0.5).abs() < 1e-6, "got {}", offset.value());
}

#[test]
fn offset_never_reaches_period() {
    let mut offset = GradientOffset::new();
    for _ in 0..25_000 {
        let v = offset.advance();
        assert!((0.0..GRADIENT_PERIOD).contains(&v));
    }
}

#[test]
fn reset_returns_to_origin_and_restarts_counting() {
    let mut offset = GradientOffset::new();
    run_frames(&mut offset, 500);
    offset.reset();
    assert_eq!(offset.value(), 0.0);
    run_frames(&mut offset, 3);
    assert!((offset.value() - 3.0 * GRADIENT_STEP).abs() < 1e-12);
}

#[test]
fn css_position_keeps_vertical_center() {
    let mut offset = GradientOffset::new();
    run_frames(&mut offset, 20);
    let css = offset.css_position();
    assert!(css.ends_with("% 50%"), "{css}");
    let pct: f64 = css.split('%').next().unwrap().parse().unwrap();
    assert!((pct - 1.0).abs() < 1e-9);
}
