// Host-side tests for the pure sizing math.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod sizing {
    include!("../src/core/sizing.rs");
}

use sizing::*;

#[test]
fn square_image_fills_the_fit_box() {
    let size = fit_panel(500.0, 500.0, 1000.0, 1000.0).unwrap();
    assert_eq!(size, PanelSize { width: 900, height: 900 });
}

#[test]
fn wide_image_is_bounded_by_viewport_width() {
    let size = fit_panel(2000.0, 1000.0, 1000.0, 1000.0).unwrap();
    assert_eq!(size, PanelSize { width: 900, height: 450 });
}

#[test]
fn tall_image_is_bounded_by_viewport_height() {
    let size = fit_panel(500.0, 1000.0, 800.0, 600.0).unwrap();
    assert_eq!(size, PanelSize { width: 270, height: 540 });
}

#[test]
fn output_is_rounded_to_whole_pixels() {
    let size = fit_panel(101.0, 100.0, 100.0, 100.0).unwrap();
    assert_eq!(size, PanelSize { width: 90, height: 89 });
}

#[test]
fn small_images_scale_up_to_the_fit_box() {
    let size = fit_panel(50.0, 50.0, 1000.0, 1000.0).unwrap();
    assert_eq!(size, PanelSize { width: 900, height: 900 });
}

#[test]
fn aspect_ratio_is_preserved() {
    let size = fit_panel(400.0, 300.0, 1200.0, 1200.0).unwrap();
    let input_ratio = 400.0 / 300.0;
    let output_ratio = size.width as f64 / size.height as f64;
    assert!((input_ratio - output_ratio).abs() < 0.01);
}

#[test]
fn unloaded_image_dimensions_yield_none() {
    assert!(fit_panel(0.0, 500.0, 1000.0, 1000.0).is_none());
    assert!(fit_panel(500.0, 0.0, 1000.0, 1000.0).is_none());
}

#[test]
fn degenerate_viewport_yields_none() {
    assert!(fit_panel(500.0, 500.0, 0.0, 1000.0).is_none());
    assert!(fit_panel(500.0, 500.0, 1000.0, 0.0).is_none());
    assert!(fit_panel(500.0, 500.0, -100.0, 100.0).is_none());
}
