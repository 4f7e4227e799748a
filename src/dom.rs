use skybeam_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}; click handler not wired", element_id);
    }
}

/// Looks up `#id` and casts it, or `None` if it is absent or of another type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Current value of an `<input>` or `<select>`, empty if neither exists.
pub fn field_value(document: &web::Document, id: &str) -> String {
    if let Some(input) = element_by_id::<web::HtmlInputElement>(document, id) {
        input.value()
    } else if let Some(select) = element_by_id::<web::HtmlSelectElement>(document, id) {
        select.value()
    } else {
        String::new()
    }
}

pub fn set_input_value(document: &web::Document, id: &str, value: &str) {
    if let Some(input) = element_by_id::<web::HtmlInputElement>(document, id) {
        input.set_value(value);
    }
}

pub fn set_text(document: &web::Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

/// Window inner size in CSS pixels.
pub fn window_viewport() -> Viewport {
    web::window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            Viewport::new(width as f32, height as f32)
        })
        .unwrap_or(Viewport::new(0.0, 0.0))
}

/// Matches the canvas backing store to the window and returns the new viewport.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) -> Viewport {
    let viewport = window_viewport();
    canvas.set_width(viewport.width.max(1.0) as u32);
    canvas.set_height(viewport.height.max(1.0) as u32);
    viewport
}
