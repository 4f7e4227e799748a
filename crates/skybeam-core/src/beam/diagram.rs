//! Vector scene for the beam diagram.
//!
//! The scene is a flat list of primitives in an 800x500 logical canvas. It is
//! rebuilt from a [`BeamSolution`] on every change; the front-end writes it
//! out as SVG and re-arms the load marker (the node tagged
//! [`LOAD_MARKER_ID`]) with drag listeners.

use super::statics::BeamSolution;
use super::units::format_length;
use crate::color::Rgba;
use glam::DVec2;

pub const SCENE_WIDTH: f64 = 800.0;
pub const SCENE_HEIGHT: f64 = 500.0;
pub const SCENE_MARGIN: f64 = 120.0;
pub const BEAM_Y: f64 = SCENE_HEIGHT - 160.0;
pub const SUPPORT_BASE_Y: f64 = SCENE_HEIGHT - 120.0;
pub const BEAM_THICKNESS: f64 = 12.0;
pub const SUPPORT_HALF_WIDTH: f64 = 22.0;
pub const LOAD_MARKER_ID: &str = "weightHandle";
pub const LOAD_MARKER_RADIUS: f64 = 18.0;
pub const LOAD_MARKER_LIFT: f64 = 36.0;
pub const ARROW_BUDGET_PX: f64 = 160.0; // longest force arrow
pub const ARROW_HEAD: f64 = 11.0;
pub const LABEL_GAP: f64 = 24.0;
pub const DIMENSION_Y: f64 = SCENE_HEIGHT - 60.0;
pub const DIMENSION_TICK: f64 = 7.0;
pub const FONT_PX: f64 = 15.0;

const BEAM_FILL: Rgba = Rgba::hex(0xcbd5e1);
const SUPPORT_FILL: Rgba = Rgba::hex(0x94a3b8);
const LOAD_FILL: Rgba = Rgba::hex(0xf87171);
const LOAD_LABEL: Rgba = Rgba::hex(0x0f172a);
const REACTION: Rgba = Rgba::hex(0x60a5fa);
const DIM_LEFT: Rgba = Rgba::hex(0xfbbf24);
const DIM_RIGHT: Rgba = Rgba::hex(0xf472b6);
const DIM_TOTAL: Rgba = Rgba::hex(0x94a3b8);

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Rect {
        origin: DVec2,
        size: DVec2,
        corner_radius: f64,
        fill: Rgba,
    },
    Polygon {
        points: Vec<DVec2>,
        fill: Rgba,
    },
    Circle {
        center: DVec2,
        radius: f64,
        fill: Rgba,
        id: Option<&'static str>,
    },
    Line {
        from: DVec2,
        to: DVec2,
        stroke: Rgba,
        width: f64,
    },
    /// Center-anchored label.
    Text {
        anchor: DVec2,
        text: String,
        fill: Rgba,
        size_px: f64,
        bold: bool,
    },
}

/// Mapping between beam meters and scene x coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BeamLayout {
    pub length_m: f64,
    /// Scene units per meter.
    pub scale_x: f64,
    pub left_x: f64,
    pub right_x: f64,
}

impl BeamLayout {
    pub fn new(length_m: f64) -> Self {
        let scale_x = (SCENE_WIDTH - 2.0 * SCENE_MARGIN) / length_m;
        Self {
            length_m,
            scale_x,
            left_x: SCENE_MARGIN,
            right_x: SCENE_MARGIN + length_m * scale_x,
        }
    }

    pub fn x_for(&self, position_m: f64) -> f64 {
        self.left_x + position_m * self.scale_x
    }

    /// Inverse of [`Self::x_for`], clamped to the beam span.
    pub fn position_at(&self, scene_x: f64) -> f64 {
        let px = scene_x.clamp(self.left_x, self.right_x);
        ((px - self.left_x) / self.scale_x).clamp(0.0, self.length_m)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub layout: BeamLayout,
    pub nodes: Vec<Node>,
}

impl Scene {
    /// The draggable load marker's center.
    pub fn load_marker(&self) -> Option<DVec2> {
        self.nodes.iter().find_map(|n| match n {
            Node::Circle {
                center,
                id: Some(LOAD_MARKER_ID),
                ..
            } => Some(*center),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn push_label(&mut self, x: f64, y: f64, text: String, fill: Rgba) {
        self.nodes.push(Node::Text {
            anchor: DVec2::new(x, y),
            text,
            fill,
            size_px: FONT_PX,
            bold: false,
        });
    }

    fn push_support(&mut self, x: f64) {
        self.nodes.push(Node::Polygon {
            points: vec![
                DVec2::new(x - SUPPORT_HALF_WIDTH, SUPPORT_BASE_Y),
                DVec2::new(x, BEAM_Y),
                DVec2::new(x + SUPPORT_HALF_WIDTH, SUPPORT_BASE_Y),
            ],
            fill: SUPPORT_FILL,
        });
    }

    fn push_arrow(&mut self, x: f64, y1: f64, y2: f64, color: Rgba, pointing_down: bool) {
        self.nodes.push(Node::Line {
            from: DVec2::new(x, y1),
            to: DVec2::new(x, y2),
            stroke: color,
            width: 2.8,
        });
        let back = if pointing_down { -ARROW_HEAD } else { ARROW_HEAD };
        self.nodes.push(Node::Polygon {
            points: vec![
                DVec2::new(x, y2),
                DVec2::new(x - ARROW_HEAD, y2 + back),
                DVec2::new(x + ARROW_HEAD, y2 + back),
            ],
            fill: color,
        });
    }

    fn push_dimension(&mut self, x1: f64, x2: f64, y: f64, label: String, color: Rgba) {
        self.nodes.push(Node::Line {
            from: DVec2::new(x1, y),
            to: DVec2::new(x2, y),
            stroke: color,
            width: 1.8,
        });
        for x in [x1, x2] {
            self.nodes.push(Node::Line {
                from: DVec2::new(x, y - DIMENSION_TICK),
                to: DVec2::new(x, y + DIMENSION_TICK),
                stroke: DIM_TOTAL,
                width: 2.0,
            });
        }
        self.push_label((x1 + x2) / 2.0, y - 12.0, label, color);
    }
}

/// Builds the full diagram for one solved state.
pub fn build_scene(solution: &BeamSolution) -> Scene {
    let layout = BeamLayout::new(solution.length_m);
    let mut scene = Scene {
        width: SCENE_WIDTH,
        height: SCENE_HEIGHT,
        layout,
        nodes: Vec::with_capacity(32),
    };
    let load_x = layout.x_for(solution.position_m);
    let max_force = solution
        .weight_n
        .max(solution.left_n)
        .max(solution.right_n)
        .max(1.0);
    let arrow_scale = ARROW_BUDGET_PX / max_force;

    scene.nodes.push(Node::Rect {
        origin: DVec2::new(layout.left_x, BEAM_Y),
        size: DVec2::new((layout.right_x - layout.left_x).max(1.0), BEAM_THICKNESS),
        corner_radius: 4.0,
        fill: BEAM_FILL,
    });
    scene.push_support(layout.left_x);
    scene.push_support(layout.right_x);

    let marker_y = BEAM_Y - LOAD_MARKER_LIFT;
    scene.nodes.push(Node::Circle {
        center: DVec2::new(load_x, marker_y),
        radius: LOAD_MARKER_RADIUS,
        fill: LOAD_FILL,
        id: Some(LOAD_MARKER_ID),
    });
    scene.nodes.push(Node::Text {
        anchor: DVec2::new(load_x, marker_y),
        text: "W".to_string(),
        fill: LOAD_LABEL,
        size_px: FONT_PX,
        bold: true,
    });

    let load_top = BEAM_Y + BEAM_THICKNESS;
    scene.push_arrow(
        load_x,
        load_top,
        load_top + solution.weight_n * arrow_scale,
        LOAD_FILL,
        true,
    );
    let left_tip = BEAM_Y - solution.left_n * arrow_scale;
    let right_tip = BEAM_Y - solution.right_n * arrow_scale;
    scene.push_arrow(layout.left_x, BEAM_Y, left_tip, REACTION, false);
    scene.push_arrow(layout.right_x, BEAM_Y, right_tip, REACTION, false);

    let unit = solution.force_unit;
    scene.push_label(
        layout.left_x,
        left_tip - LABEL_GAP,
        format!("R₁ = {} {}", solution.left_display, unit),
        REACTION,
    );
    scene.push_label(
        layout.right_x,
        right_tip - LABEL_GAP,
        format!("R₂ = {} {}", solution.right_display, unit),
        REACTION,
    );

    let lu = solution.length_unit;
    let left_span = lu.from_meters(solution.position_m);
    let right_span = lu.from_meters(solution.length_m - solution.position_m);
    let total = lu.from_meters(solution.length_m);
    if solution.position_m > 0.0 {
        scene.push_dimension(
            layout.left_x,
            load_x,
            DIMENSION_Y - LABEL_GAP,
            format!("{} {}", format_length(left_span), lu),
            DIM_LEFT,
        );
    }
    if solution.position_m < solution.length_m {
        scene.push_dimension(
            load_x,
            layout.right_x,
            DIMENSION_Y - LABEL_GAP,
            format!("{} {}", format_length(right_span), lu),
            DIM_RIGHT,
        );
    }
    scene.push_dimension(
        layout.left_x,
        layout.right_x,
        DIMENSION_Y,
        format!("{} {}", format_length(total), lu),
        DIM_TOTAL,
    );

    scene
}
