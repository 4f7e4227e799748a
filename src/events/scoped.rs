use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Event listeners that stay attached exactly as long as this value lives.
pub struct ScopedListeners {
    target: web::EventTarget,
    entries: Vec<(&'static str, Closure<dyn FnMut(web::Event)>)>,
}

impl ScopedListeners {
    pub fn new(target: impl Into<web::EventTarget>) -> Self {
        Self {
            target: target.into(),
            entries: Vec::new(),
        }
    }

    pub fn listen(&mut self, event: &'static str, handler: impl FnMut(web::Event) + 'static) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = self
            .target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        self.entries.push((event, closure));
    }

    /// Like [`Self::listen`], registered non-passive so the handler may call
    /// `preventDefault` on touch events.
    pub fn listen_active(&mut self, event: &'static str, handler: impl FnMut(web::Event) + 'static) {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(false);
        _ = self
            .target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            );
        self.entries.push((event, closure));
    }
}

impl Drop for ScopedListeners {
    fn drop(&mut self) {
        for (event, closure) in self.entries.drain(..) {
            _ = self
                .target
                .remove_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }
    }
}
