//! Raster drawing abstraction used by the particle field.
//!
//! The simulation never touches a platform canvas directly. It paints through
//! [`Surface`], which the web front-end implements on top of a 2D canvas
//! context and which [`DrawList`] implements by recording every call, so
//! frames can be inspected on the host.

use crate::color::Rgba;
use glam::Vec2;
use smallvec::SmallVec;

/// Drawable area in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

pub type Stops = SmallVec<[ColorStop; 3]>;

/// Fill or stroke source.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial {
        center: Vec2,
        radius: f32,
        stops: Stops,
    },
    Linear {
        from: Vec2,
        to: Vec2,
        stops: Stops,
    },
}

impl Paint {
    /// Radial fade from `color` at the center to transparent at `radius`.
    pub fn glow(center: Vec2, radius: f32, color: Rgba) -> Self {
        Paint::Radial {
            center,
            radius,
            stops: fade_stops(color),
        }
    }

    /// Linear fade from `color` at `from` to transparent at `to`.
    pub fn fade(from: Vec2, to: Vec2, color: Rgba) -> Self {
        Paint::Linear {
            from,
            to,
            stops: fade_stops(color),
        }
    }
}

fn fade_stops(color: Rgba) -> Stops {
    let mut stops = Stops::new();
    stops.push(ColorStop { offset: 0.0, color });
    stops.push(ColorStop {
        offset: 1.0,
        color: Rgba::TRANSPARENT,
    });
    stops
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f32,
    pub alpha: f32,
}

pub trait Surface {
    /// Reset every pixel to transparent.
    fn clear(&mut self, viewport: Viewport);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, alpha: f32);
    /// Stroke a circular arc from `start` to `end` radians, clockwise.
    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: &Stroke);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    fn fill_viewport(&mut self, viewport: Viewport, paint: &Paint) {
        self.fill_rect(Vec2::ZERO, viewport.size(), paint);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    Clear(Viewport),
    FillRect {
        origin: Vec2,
        size: Vec2,
        paint: Paint,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        alpha: f32,
    },
    StrokeArc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        stroke: Stroke,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        stroke: Stroke,
    },
}

/// Surface that records draw calls instead of rasterizing them.
#[derive(Clone, Debug, Default)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }
}

impl Surface for DrawList {
    fn clear(&mut self, viewport: Viewport) {
        self.ops.push(DrawOp::Clear(viewport));
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.ops.push(DrawOp::FillRect {
            origin,
            size,
            paint: paint.clone(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, alpha: f32) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            paint: paint.clone(),
            alpha,
        });
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeArc {
            center,
            radius,
            start,
            end,
            stroke: stroke.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            stroke: stroke.clone(),
        });
    }
}
