// Host-side tests for the audio crossfader.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod crossfade {
    include!("../src/core/crossfade.rs");
}

use constants::{VOLUME_RAMP_STEP, VOLUME_RAMP_TICK_MS};
use crossfade::*;

/// Tick until the ramp finishes; returns the tick count and the final result.
fn run_ramp(fader: &mut Crossfader, track: usize) -> (usize, RampTick) {
    for n in 1..=100 {
        let t = fader.tick(track);
        if !matches!(t, RampTick::Step(_)) {
            return (n, t);
        }
    }
    panic!("ramp on track {track} did not finish");
}

#[test]
fn tracks_start_silent_and_idle() {
    let fader = Crossfader::new(3);
    assert_eq!(fader.len(), 3);
    for i in 0..3 {
        assert_eq!(fader.volume(i), Some(0.0));
        assert!(!fader.is_ramping(i));
    }
}

#[test]
fn first_play_fades_in_and_pauses_silent_others() {
    let mut fader = Crossfader::new(3);
    let plan = fader.play(0).unwrap();
    assert_eq!(plan.fade_in, 0);
    assert!(plan.fade_out.is_empty());
    assert_eq!(plan.pause_now.as_slice(), &[1, 2]);
    assert_eq!(fader.ramp_direction(0), Some(RampDirection::Up));
}

#[test]
fn fade_in_converges_in_twenty_ticks() {
    let mut fader = Crossfader::new(1);
    fader.play(0);
    let (ticks, result) = run_ramp(&mut fader, 0);
    assert_eq!(ticks, 20);
    assert_eq!(result, RampTick::Finished { volume: 1.0, pause: false });
    assert_eq!(fader.volume(0), Some(1.0));
    assert!(!fader.is_ramping(0));
    // within one second at the configured tick
    assert!(ticks as i32 * VOLUME_RAMP_TICK_MS <= 1000);
}

#[test]
fn ramp_moves_in_fixed_steps() {
    let mut fader = Crossfader::new(1);
    fader.play(0);
    let mut prev = 0.0;
    for _ in 0..19 {
        match fader.tick(0) {
            RampTick::Step(v) => {
                assert!((v - prev - VOLUME_RAMP_STEP).abs() < 1e-9);
                prev = v;
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[test]
fn playing_a_second_track_crossfades() {
    let mut fader = Crossfader::new(2);
    fader.play(1);
    run_ramp(&mut fader, 1);

    let plan = fader.play(0).unwrap();
    assert_eq!(plan.fade_in, 0);
    assert_eq!(plan.fade_out.as_slice(), &[1]);
    assert!(plan.pause_now.is_empty());

    let (down_ticks, down) = run_ramp(&mut fader, 1);
    let (up_ticks, up) = run_ramp(&mut fader, 0);
    assert_eq!(down, RampTick::Finished { volume: 0.0, pause: true });
    assert_eq!(up, RampTick::Finished { volume: 1.0, pause: false });
    assert!(down_ticks <= 20 && up_ticks <= 20);
    assert_eq!(fader.volume(1), Some(0.0));
    assert_eq!(fader.volume(0), Some(1.0));
}

#[test]
fn pause_fades_out_without_requesting_another_pause() {
    let mut fader = Crossfader::new(1);
    fader.play(0);
    run_ramp(&mut fader, 0);
    assert!(fader.pause(0));
    assert_eq!(fader.ramp_direction(0), Some(RampDirection::Down));
    let (ticks, result) = run_ramp(&mut fader, 0);
    assert_eq!(ticks, 20);
    assert_eq!(result, RampTick::Finished { volume: 0.0, pause: false });
}

#[test]
fn pausing_a_silent_track_starts_no_ramp() {
    let mut fader = Crossfader::new(2);
    assert!(!fader.pause(1));
    assert!(!fader.is_ramping(1));
    assert_eq!(fader.tick(1), RampTick::Idle);
}

#[test]
fn new_ramp_replaces_the_previous_one() {
    let mut fader = Crossfader::new(1);
    fader.play(0);
    for _ in 0..5 {
        fader.tick(0);
    }
    let mid = fader.volume(0).unwrap();
    assert!((mid - 0.25).abs() < 1e-9);

    // pause mid-ramp: only the fade-out is active now
    assert!(fader.pause(0));
    let (ticks, result) = run_ramp(&mut fader, 0);
    assert_eq!(ticks, 5);
    assert_eq!(result, RampTick::Finished { volume: 0.0, pause: false });
    assert_eq!(fader.tick(0), RampTick::Idle);
}

#[test]
fn replay_during_fade_out_ramps_back_up_from_current_level() {
    let mut fader = Crossfader::new(2);
    fader.play(0);
    run_ramp(&mut fader, 0);
    fader.play(1);
    for _ in 0..4 {
        fader.tick(0);
    }
    let plan = fader.play(0).unwrap();
    assert_eq!(plan.fade_out.as_slice(), &[1]);
    assert_eq!(fader.ramp_direction(0), Some(RampDirection::Up));
    let (ticks, result) = run_ramp(&mut fader, 0);
    assert_eq!(ticks, 4);
    assert_eq!(result, RampTick::Finished { volume: 1.0, pause: false });
}

#[test]
fn last_play_wins() {
    let mut fader = Crossfader::new(3);
    fader.play(0);
    fader.play(1);
    fader.play(2);
    for i in 0..3 {
        run_ramp(&mut fader, i);
    }
    assert_eq!(fader.volume(2), Some(1.0));
    assert_eq!(fader.volume(0), Some(0.0));
    assert_eq!(fader.volume(1), Some(0.0));
}

#[test]
fn unknown_track_is_ignored() {
    let mut fader = Crossfader::new(1);
    assert!(fader.play(4).is_none());
    assert!(!fader.pause(4));
    assert_eq!(fader.tick(4), RampTick::Idle);
    assert_eq!(fader.volume(4), None);
}
