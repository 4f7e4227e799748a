use crate::constants::*;
use crate::dom;
use crate::events::{event_client_point, ScopedListeners};
use crate::input::{self, RawBeamFields};
use crate::svg;
use skybeam_core::beam::diagram::SCENE_WIDTH;
use skybeam_core::{build_scene, solve, BeamLayout, DragSession, LengthUnit};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Live drag of the load marker. Dropping it detaches the document listeners.
struct ActiveDrag {
    session: DragSession,
    _listeners: ScopedListeners,
}

pub struct BeamPanel {
    document: web::Document,
    svg: web::Element,
    layout: Option<BeamLayout>,
    marker_x: Option<f64>,
    length_unit: LengthUnit,
    marker_listeners: Option<ScopedListeners>,
    drag: Option<ActiveDrag>,
}

impl BeamPanel {
    fn read_fields(&self) -> RawBeamFields {
        let d = &self.document;
        RawBeamFields {
            length: dom::field_value(d, LENGTH_INPUT_ID),
            position: dom::field_value(d, POSITION_INPUT_ID),
            mass: dom::field_value(d, MASS_INPUT_ID),
            gravity: dom::field_value(d, GRAVITY_INPUT_ID),
            length_unit: dom::field_value(d, LENGTH_UNIT_ID),
            mass_unit: dom::field_value(d, MASS_UNIT_ID),
            force_unit: dom::field_value(d, FORCE_UNIT_ID),
        }
    }

    fn scene_x(&self, client_x: f64) -> f64 {
        let rect = self.svg.get_bounding_client_rect();
        input::client_to_scene_x(client_x, rect.left(), rect.width(), SCENE_WIDTH)
    }
}

/// Reads the panel, solves, writes the result text and rebuilds the diagram.
fn render(panel: &Rc<RefCell<BeamPanel>>) {
    let mut p = panel.borrow_mut();
    let beam = input::beam_input_from_fields(&p.read_fields());
    let solution = solve(&beam);
    dom::set_text(&p.document, RESULT_ID, &solution.summary());

    let scene = build_scene(&solution);
    p.layout = Some(scene.layout);
    p.marker_x = scene.load_marker().map(|c| c.x);
    p.length_unit = beam.length_unit;
    // Old marker listeners go with the old marker.
    p.marker_listeners = None;
    match svg::write_scene(&p.document, &p.svg, &scene) {
        Ok(Some(marker)) => {
            _ = marker.set_attribute("style", &format!("cursor: {}", MARKER_CURSOR));
            p.marker_listeners = Some(arm_marker(panel, marker));
        }
        Ok(None) => log::warn!("[beam] scene has no load marker"),
        Err(e) => log::error!("[beam] diagram write failed: {:?}", e),
    }
}

/// Update button: writes sanitized values back into the panel, then renders.
fn full_update(panel: &Rc<RefCell<BeamPanel>>) {
    {
        let p = panel.borrow();
        let fixes = input::corrections(&p.read_fields());
        if !fixes.is_empty() {
            log::info!("[beam] corrected panel values {:?}", fixes);
        }
        for (id, value) in [
            (LENGTH_INPUT_ID, fixes.length),
            (MASS_INPUT_ID, fixes.mass),
            (GRAVITY_INPUT_ID, fixes.gravity),
        ] {
            if let Some(v) = value {
                dom::set_input_value(&p.document, id, &v.to_string());
            }
        }
    }
    render(panel);
}

fn arm_marker(panel: &Rc<RefCell<BeamPanel>>, marker: web::Element) -> ScopedListeners {
    let mut listeners = ScopedListeners::new(marker);
    let on_mouse = panel.clone();
    listeners.listen("mousedown", move |ev| {
        ev.prevent_default();
        begin_drag(&on_mouse, &ev);
    });
    let on_touch = panel.clone();
    listeners.listen_active("touchstart", move |ev| {
        ev.prevent_default();
        begin_drag(&on_touch, &ev);
    });
    listeners
}

fn begin_drag(panel: &Rc<RefCell<BeamPanel>>, ev: &web::Event) {
    let Some((client_x, _)) = event_client_point(ev) else {
        return;
    };
    let mut p = panel.borrow_mut();
    let (Some(layout), Some(marker_x)) = (p.layout, p.marker_x) else {
        return;
    };
    let pointer_x = p.scene_x(client_x);
    let session = DragSession::begin(pointer_x, marker_x, layout, p.length_unit);

    let mut listeners = ScopedListeners::new(p.document.clone());
    let on_mouse_move = panel.clone();
    listeners.listen("mousemove", move |ev| drag_move(&on_mouse_move, &ev));
    let on_touch_move = panel.clone();
    listeners.listen_active("touchmove", move |ev| {
        ev.prevent_default();
        drag_move(&on_touch_move, &ev);
    });
    for event in ["mouseup", "touchend"] {
        let on_end = panel.clone();
        listeners.listen(event, move |_| end_drag(&on_end));
    }

    log::info!("[beam] drag start offset={:.1}", session.offset_x());
    p.drag = Some(ActiveDrag {
        session,
        _listeners: listeners,
    });
}

fn drag_move(panel: &Rc<RefCell<BeamPanel>>, ev: &web::Event) {
    let Some((client_x, _)) = event_client_point(ev) else {
        return;
    };
    let update = {
        let p = panel.borrow();
        let Some(drag) = p.drag.as_ref() else {
            return;
        };
        drag.session.drag_to(p.scene_x(client_x))
    };
    dom::set_input_value(&panel.borrow().document, POSITION_INPUT_ID, &update.display);
    render(panel);
}

fn end_drag(panel: &Rc<RefCell<BeamPanel>>) {
    let finished = panel.borrow_mut().drag.take();
    if finished.is_some() {
        log::info!("[beam] drag end");
    }
    drop(finished);
}

/// Wires the update button and runs the first render.
pub fn start_beam_panel(document: &web::Document) -> anyhow::Result<Rc<RefCell<BeamPanel>>> {
    let svg = document
        .get_element_by_id(DIAGRAM_SVG_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", DIAGRAM_SVG_ID))?;
    let panel = Rc::new(RefCell::new(BeamPanel {
        document: document.clone(),
        svg,
        layout: None,
        marker_x: None,
        length_unit: LengthUnit::default(),
        marker_listeners: None,
        drag: None,
    }));

    let on_click = panel.clone();
    dom::add_click_listener(document, UPDATE_BUTTON_ID, move || full_update(&on_click));
    render(&panel);
    Ok(panel)
}
