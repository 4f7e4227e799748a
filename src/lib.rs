#![cfg(target_arch = "wasm32")]
use skybeam_core::FieldConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod beam;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod svg;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skybeam-web starting");

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

    // The two halves are independent; either may be absent from the page.
    if let Err(e) = init_background(&document) {
        log::warn!("[init] particle background disabled: {:?}", e);
    }
    if let Err(e) = beam::start_beam_panel(&document) {
        log::warn!("[init] beam panel disabled: {:?}", e);
    }
    Ok(())
}

fn init_background(document: &web::Document) -> anyhow::Result<()> {
    let canvas: web::HtmlCanvasElement =
        dom::element_by_id(document, constants::PARTICLES_CANVAS_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::PARTICLES_CANVAS_ID))?;

    let pointer = Rc::new(RefCell::new(input::PointerState::default()));
    let background = frame::start_background(canvas, pointer.clone(), FieldConfig::default())?;
    events::wire_pointer_tracking(document, pointer);
    frame::wire_resize(&background);
    events::wire_theme_options(document, &background);
    Ok(())
}
