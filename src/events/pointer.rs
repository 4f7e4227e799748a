use super::event_client_point;
use crate::input::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keeps `pointer` at the latest mouse or touch position over the page body.
pub fn wire_pointer_tracking(document: &web::Document, pointer: Rc<RefCell<PointerState>>) {
    let Some(body) = document.body() else {
        log::warn!("[pointer] document has no body; pointer stays centered");
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Some((x, y)) = event_client_point(&ev) {
            pointer.borrow_mut().move_to(x as f32, y as f32);
        }
    }) as Box<dyn FnMut(_)>);
    for event in ["mousemove", "touchmove"] {
        _ = body.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
