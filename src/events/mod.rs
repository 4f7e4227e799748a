pub mod pointer;
pub mod scoped;
pub mod theme;

pub use pointer::wire_pointer_tracking;
pub use scoped::ScopedListeners;
pub use theme::wire_theme_options;

use wasm_bindgen::JsCast;
use web_sys as web;

/// Client coordinates of a mouse event or of the first active touch point.
pub fn event_client_point(ev: &web::Event) -> Option<(f64, f64)> {
    if let Some(m) = ev.dyn_ref::<web::MouseEvent>() {
        return Some((m.client_x() as f64, m.client_y() as f64));
    }
    let touch = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some((touch.client_x() as f64, touch.client_y() as f64))
}
