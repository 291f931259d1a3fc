use super::scroll::{dispatch_delta, InputWiring};
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// ArrowDown / ArrowUp synthesize a delta past the slide threshold, so one
/// press always produces a discrete action through the same dispatch path as
/// wheel and touch.
pub fn wire_keyboard(w: InputWiring) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let forward = match ev.key().as_str() {
            "ArrowDown" => true,
            "ArrowUp" => false,
            _ => return,
        };
        let threshold = w.viewer.borrow().slide_threshold();
        dispatch_delta(&w, input::key_delta(threshold, forward));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
