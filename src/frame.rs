use crate::canvas::Canvas2d;
use crate::dom;
use crate::input::PointerState;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skybeam_core::{FieldConfig, FrameHandle, FrameScheduler, ParticleField, Theme};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Callbacks = Rc<RefCell<HashMap<i32, Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` behind the field's scheduler seam. Each request
/// gets its own callback that reports the id it was issued under, so the
/// field can tell the pending frame from a stale one.
pub struct RafScheduler {
    target: Weak<RefCell<Background>>,
    callbacks: Callbacks,
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let window = web::window()?;
        let issued = Rc::new(Cell::new(0));
        let issued_id = issued.clone();
        let target = self.target.clone();
        let callbacks = self.callbacks.clone();
        let closure = Closure::wrap(Box::new(move || {
            let id = issued_id.get();
            // Released once this call returns.
            let _spent = callbacks.borrow_mut().remove(&id);
            if let Some(background) = target.upgrade() {
                background.borrow_mut().frame(id);
            }
        }) as Box<dyn FnMut()>);
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => {
                issued.set(id);
                self.callbacks.borrow_mut().insert(id, closure);
                Some(FrameHandle::new(id))
            }
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.id());
        }
        self.callbacks.borrow_mut().remove(&handle.id());
    }
}

pub struct Background {
    field: ParticleField<RafScheduler>,
    surface: Canvas2d,
    canvas: web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
    started: Instant,
}

impl Background {
    pub fn frame(&mut self, fired: i32) {
        let pointer = self.pointer.borrow().position;
        let elapsed_ms = self.started.elapsed().as_secs_f64() * 1000.0;
        self.field.on_frame(fired, &mut self.surface, pointer, elapsed_ms);
    }

    pub fn switch_theme(&mut self, theme: Theme) -> bool {
        self.field.switch_theme(theme, &mut self.surface)
    }

    pub fn theme(&self) -> Theme {
        self.field.theme()
    }

    pub fn resize(&mut self) {
        let viewport = dom::sync_canvas_to_window(&self.canvas);
        self.field.resize(viewport);
    }
}

/// Builds the particle field on `canvas` and starts its frame loop.
pub fn start_background(
    canvas: web::HtmlCanvasElement,
    pointer: Rc<RefCell<PointerState>>,
    config: FieldConfig,
) -> anyhow::Result<Rc<RefCell<Background>>> {
    let viewport = dom::sync_canvas_to_window(&canvas);
    *pointer.borrow_mut() = PointerState::centered(viewport);
    let surface = Canvas2d::from_canvas(&canvas)?;

    let background = Rc::new_cyclic(|weak| {
        let field = ParticleField::new(
            config,
            viewport,
            RafScheduler {
                target: weak.clone(),
                callbacks: Rc::default(),
            },
            StdRng::from_entropy(),
        );
        RefCell::new(Background {
            field,
            surface,
            canvas,
            pointer,
            started: Instant::now(),
        })
    });

    {
        let mut bg = background.borrow_mut();
        let Background { field, surface, .. } = &mut *bg;
        field.reset(surface);
    }
    Ok(background)
}

pub fn wire_resize(background: &Rc<RefCell<Background>>) {
    let background = background.clone();
    let closure = Closure::wrap(Box::new(move || {
        background.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
