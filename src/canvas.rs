use glam::Vec2;
use skybeam_core::surface::ColorStop;
use skybeam_core::{Paint, Stroke, Surface, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by the background canvas' 2D context.
pub struct Canvas2d {
    ctx: web::CanvasRenderingContext2d,
}

impl Canvas2d {
    pub fn from_canvas(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    fn gradient(&self, stops: &[ColorStop], gradient: web::CanvasGradient) -> web::CanvasGradient {
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
        }
        gradient
    }

    fn apply_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_string()),
            Paint::Radial {
                center,
                radius,
                stops,
            } => {
                let c = center.as_dvec2();
                match self
                    .ctx
                    .create_radial_gradient(c.x, c.y, 0.0, c.x, c.y, (*radius).max(0.0) as f64)
                {
                    Ok(g) => self
                        .ctx
                        .set_fill_style_canvas_gradient(&self.gradient(stops, g)),
                    Err(e) => log::warn!("[canvas] radial gradient rejected: {:?}", e),
                }
            }
            Paint::Linear { from, to, stops } => {
                let g = self.linear(*from, *to, stops);
                self.ctx.set_fill_style_canvas_gradient(&g);
            }
        }
    }

    fn apply_stroke(&self, stroke: &Stroke) {
        match &stroke.paint {
            Paint::Solid(color) => self.ctx.set_stroke_style_str(&color.to_string()),
            Paint::Linear { from, to, stops } => {
                let g = self.linear(*from, *to, stops);
                self.ctx.set_stroke_style_canvas_gradient(&g);
            }
            Paint::Radial { stops, .. } => {
                // Strokes never use radial paint; fall back to the inner color.
                if let Some(first) = stops.first() {
                    self.ctx.set_stroke_style_str(&first.color.to_string());
                }
            }
        }
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_global_alpha(stroke.alpha.clamp(0.0, 1.0) as f64);
    }

    fn linear(&self, from: Vec2, to: Vec2, stops: &[ColorStop]) -> web::CanvasGradient {
        let g = self
            .ctx
            .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        self.gradient(stops, g)
    }
}

impl Surface for Canvas2d {
    fn clear(&mut self, viewport: Viewport) {
        self.ctx
            .clear_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint, alpha: f32) {
        if radius <= 0.0 {
            return;
        }
        self.ctx.save();
        self.apply_fill(paint);
        self.ctx.set_global_alpha(alpha.clamp(0.0, 1.0) as f64);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        self.ctx.fill();
        self.ctx.restore();
    }

    fn stroke_arc(&mut self, center: Vec2, radius: f32, start: f32, end: f32, stroke: &Stroke) {
        if radius <= 0.0 {
            return;
        }
        self.ctx.save();
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        _ = self.ctx.arc(
            center.x as f64,
            center.y as f64,
            radius as f64,
            start as f64,
            end as f64,
        );
        self.ctx.stroke();
        self.ctx.restore();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.ctx.save();
        self.apply_stroke(stroke);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
        self.ctx.restore();
    }
}
