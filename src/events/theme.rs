use crate::constants::{ACTIVE_CLASS, THEME_ATTRIBUTE, THEME_OPTION_SELECTOR};
use crate::frame::Background;
use skybeam_core::Theme;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn theme_options(document: &web::Document) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(THEME_OPTION_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

fn mark_active(options: &[web::Element], theme: Theme) {
    for el in options {
        let is_active = el.get_attribute(THEME_ATTRIBUTE).as_deref() == Some(theme.name());
        _ = el.class_list().toggle_with_force(ACTIVE_CLASS, is_active);
    }
}

/// Makes every `.theme-option[data-theme]` switch the background theme.
pub fn wire_theme_options(document: &web::Document, background: &Rc<RefCell<Background>>) {
    let options = Rc::new(theme_options(document));
    mark_active(&options, background.borrow().theme());

    for el in options.iter() {
        let Some(raw) = el.get_attribute(THEME_ATTRIBUTE) else {
            continue;
        };
        let theme = match raw.parse::<Theme>() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("[theme] {}; option ignored", e);
                continue;
            }
        };
        let background = background.clone();
        let options = options.clone();
        let closure = Closure::wrap(Box::new(move || {
            if background.borrow_mut().switch_theme(theme) {
                log::info!("[theme] switched to {}", theme);
            }
            mark_active(&options, theme);
        }) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
