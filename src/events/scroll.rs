use crate::core::Viewer;
use crate::dom;
use crate::input::TouchTracker;
use crate::stage::Stage;
use crate::transitions;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub viewer: Rc<RefCell<Viewer>>,
    pub stage: Rc<Stage>,
    pub touch: Rc<RefCell<TouchTracker>>,
}

/// Feed one normalized delta into the state machine and spawn whatever
/// transition it decides on.
pub fn dispatch_delta(w: &InputWiring, delta: f64) {
    let decided = w.viewer.borrow_mut().feed(delta);
    if let Some(transition) = decided {
        spawn_local(transitions::run(
            transition,
            w.viewer.clone(),
            w.stage.clone(),
            w.touch.clone(),
        ));
    }
}

pub fn wire_scroll_handlers(w: InputWiring) {
    wire_wheel(&w);
    wire_touchstart(&w);
    wire_touchmove(&w);
    wire_touchend(&w);
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // the viewer owns vertical scrolling
        ev.prevent_default();
        dispatch_delta(&w, ev.delta_y());
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}

fn wire_touchstart(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if ev.touches().length() != 1 {
            return;
        }
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        w.touch.borrow_mut().begin(touch.client_y() as f64);
        set_touching_class(true);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let Some(touch) = ev.touches().get(0) else {
            return;
        };
        let Some(delta) = w.touch.borrow_mut().movement(touch.client_y() as f64) else {
            return;
        };
        ev.prevent_default();
        dispatch_delta(&w, delta);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(false);
        _ = wnd.add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &opts,
        );
    }
    closure.forget();
}

fn wire_touchend(w: &InputWiring) {
    let w = w.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        w.touch.borrow_mut().end();
        w.viewer.borrow_mut().reset_accumulator();
        set_touching_class(false);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn set_touching_class(on: bool) {
    if let Some(root) = dom::window_document().and_then(|d| d.document_element()) {
        let cl = root.class_list();
        if on {
            _ = cl.add_1("touching");
        } else {
            _ = cl.remove_1("touching");
        }
    }
}
