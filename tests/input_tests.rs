// Host-side tests for the pure input-normalization helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn movement_without_a_gesture_is_ignored() {
    let mut t = TouchTracker::default();
    assert!(!t.active());
    assert!(t.movement(120.0).is_none());
}

#[test]
fn upward_swipe_accumulates_forward_distance() {
    let mut t = TouchTracker::default();
    t.begin(300.0);
    assert!(t.active());
    // finger moving up the screen means scrolling forward
    assert_eq!(t.movement(290.0), Some(10.0));
    assert_eq!(t.movement(270.0), Some(30.0));
    assert_eq!(t.movement(270.0), Some(30.0));
}

#[test]
fn downward_swipe_accumulates_backward_distance() {
    let mut t = TouchTracker::default();
    t.begin(100.0);
    assert_eq!(t.movement(130.0), Some(-30.0));
    assert_eq!(t.movement(150.0), Some(-50.0));
}

#[test]
fn ending_the_gesture_clears_tracking_and_total() {
    let mut t = TouchTracker::default();
    t.begin(200.0);
    let _ = t.movement(150.0);
    t.end();
    assert!(!t.active());
    assert!(t.movement(100.0).is_none());

    // a fresh gesture starts its total from zero
    t.begin(100.0);
    assert_eq!(t.movement(90.0), Some(10.0));
}

#[test]
fn a_new_begin_resets_the_running_total() {
    let mut t = TouchTracker::default();
    t.begin(100.0);
    let _ = t.movement(50.0);
    t.begin(100.0);
    assert_eq!(t.movement(95.0), Some(5.0));
}

#[test]
fn key_delta_always_clears_the_slide_threshold() {
    let threshold = 800.0;
    let down = key_delta(threshold, true);
    let up = key_delta(threshold, false);
    assert!(down > threshold);
    assert!(up < -threshold);
    assert_eq!(down, -up);
}
