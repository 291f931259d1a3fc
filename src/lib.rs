#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod input;
mod overlay;
mod stage;
mod transitions;

use crate::core::{sizing, Face, Thresholds, Viewer};
use crate::stage::Stage;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("panels-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage = Rc::new(Stage::from_document(&document)?);
    log::info!("[stage] {} panels", stage.panel_count());

    let thresholds = Thresholds::from_viewport_height(dom::viewport_height());
    let viewer = Rc::new(RefCell::new(Viewer::new(stage.panel_count(), thresholds)));
    let touch = Rc::new(RefCell::new(input::TouchTracker::default()));

    // Initial layout: every panel front-facing, stack parked at panel 0.
    for i in 0..stage.panel_count() {
        stage.set_face(i, Face::Front);
    }
    stage.jump_to(0);
    apply_sizing(&viewer, &stage);
    wire_first_image_load(viewer.clone(), stage.clone());
    wire_viewport_resize(viewer.clone(), stage.clone());

    let wiring = events::InputWiring {
        viewer,
        stage,
        touch,
    };
    events::wire_scroll_handlers(wiring.clone());
    events::wire_keyboard(wiring);

    overlay::inject_hint(&document);
    Ok(())
}

/// Fit the stack to the first panel image and the current viewport. If the
/// image has no dimensions yet, prior sizing stays in effect.
fn apply_sizing(viewer: &Rc<RefCell<Viewer>>, stage: &Stage) {
    let Some(img) = stage.first_image() else {
        return;
    };
    let fitted = sizing::fit_panel(
        img.natural_width() as f64,
        img.natural_height() as f64,
        dom::viewport_width(),
        dom::viewport_height(),
    );
    let Some(size) = fitted else {
        return;
    };
    stage.set_panel_size(size);
    stage.jump_to(viewer.borrow().current());
    log::info!("[size] panel {}x{}", size.width, size.height);
}

fn wire_viewport_resize(viewer: Rc<RefCell<Viewer>>, stage: Rc<Stage>) {
    let closure = Closure::wrap(Box::new(move || {
        viewer
            .borrow_mut()
            .set_thresholds(Thresholds::from_viewport_height(dom::viewport_height()));
        apply_sizing(&viewer, &stage);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Images load after startup more often than not; recompute sizing when the
/// first panel's image reports its natural dimensions.
fn wire_first_image_load(viewer: Rc<RefCell<Viewer>>, stage: Rc<Stage>) {
    let Some(img) = stage.first_image() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move || {
        apply_sizing(&viewer, &stage);
    }) as Box<dyn FnMut()>);
    _ = img.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}
