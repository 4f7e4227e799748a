use super::{jitter, random_point, FrameEnv, Particle};
use crate::color::Rgba;
use crate::constants::*;
use crate::surface::{Paint, Stroke, Surface, Viewport};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Glowing star of the stellar theme.
///
/// The star drifts around an anchor, orbits it in a small circle and is pulled
/// toward the pointer when it comes within [`STAR_ATTRACT_RADIUS`]. Depth is
/// fixed at spawn and scales size, brightness, orbit and speed together.
#[derive(Clone, Debug, PartialEq)]
pub struct GlowStar {
    pub anchor: Vec2,
    pub velocity: Vec2,
    /// Displayed position: anchor + orbit offset + pointer pull.
    pub position: Vec2,
    pub depth: f32,
    pub size: f32,
    pub base_brightness: f32,
    pub brightness: f32,
    pub color: Rgba,
    pub speed: f32,
    pub orbit_radius: f32,
    pub orbit_angle: f32,
    pub spin: f32,
    pub pulse: f32,
    pub twinkle: bool,
    pub twinkle_phase: f32,
    pub line_fade: f32,
}

impl GlowStar {
    pub fn with_depth<R: Rng + ?Sized>(viewport: Viewport, depth: f32, rng: &mut R) -> Self {
        let depth = depth.clamp(0.0, 1.0);
        let anchor = random_point(viewport, rng);
        let size = (depth * 2.0 + 0.7).clamp(0.5, 3.0);
        let base_brightness = depth * 0.6 + 0.3;
        let color = STAR_PALETTE[rng.gen_range(0..STAR_PALETTE.len())];
        let speed = 0.02 + depth * 0.03;
        let velocity = Vec2::new(jitter(rng, speed * 0.5), jitter(rng, speed * 0.5));
        Self {
            anchor,
            velocity,
            position: anchor,
            depth,
            size,
            base_brightness,
            brightness: base_brightness,
            color,
            speed,
            orbit_radius: depth * 8.0 + 1.0,
            orbit_angle: rng.gen::<f32>() * TAU,
            spin: 0.0,
            pulse: rng.gen::<f32>() * TAU,
            twinkle: rng.gen_bool(TWINKLE_INITIAL_CHANCE),
            twinkle_phase: rng.gen::<f32>() * TAU,
            line_fade: 0.0,
        }
    }

    /// Size and position are finite and inside the range the renderer accepts.
    pub fn is_drawable(&self) -> bool {
        self.size.is_finite()
            && self.size > 0.0
            && self.size <= STAR_MAX_DRAW_SIZE
            && self.position.is_finite()
    }

    /// Faded line from the star to the pointer while the star is attracted.
    pub fn draw_line_to_pointer<S: Surface + ?Sized>(&self, surface: &mut S, pointer: Vec2) {
        if self.line_fade <= 0.0 || !self.position.is_finite() {
            return;
        }
        let distance = pointer.distance(self.position);
        if distance <= 0.0 || distance >= STAR_ATTRACT_RADIUS {
            return;
        }
        surface.stroke_line(
            self.position,
            pointer,
            &Stroke {
                paint: Paint::fade(self.position, pointer, self.color),
                width: STAR_LINE_WIDTH,
                alpha: self.line_fade * STAR_LINE_ALPHA,
            },
        );
    }

    fn drift(&mut self, viewport: Viewport) {
        self.anchor += self.velocity;
        let m = STAR_WRAP_MARGIN;
        if self.anchor.x < -m {
            self.anchor.x = viewport.width + m;
        }
        if self.anchor.x > viewport.width + m {
            self.anchor.x = -m;
        }
        if self.anchor.y < -m {
            self.anchor.y = viewport.height + m;
        }
        if self.anchor.y > viewport.height + m {
            self.anchor.y = -m;
        }
    }

    fn start_twinkle<R: Rng + ?Sized>(&mut self, chance: f64, rng: &mut R) {
        if !self.twinkle && rng.gen_bool(chance) {
            self.twinkle = true;
            self.twinkle_phase = rng.gen::<f32>() * TAU;
        }
    }
}

impl Particle for GlowStar {
    fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let depth = rng.gen::<f32>();
        Self::with_depth(viewport, depth, rng)
    }

    fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv, rng: &mut R) {
        self.orbit_angle += self.speed * STAR_ORBIT_STEP;
        let orbit = Vec2::new(self.orbit_angle.cos(), self.orbit_angle.sin()) * self.orbit_radius;

        self.drift(env.viewport);

        self.pulse += STAR_PULSE_STEP;
        let pulse = self.pulse.sin() * STAR_PULSE_AMPLITUDE;

        let mut twinkle = 0.0;
        if self.twinkle {
            self.twinkle_phase += STAR_TWINKLE_STEP;
            twinkle = (self.twinkle_phase * 3.0).sin() * STAR_TWINKLE_AMPLITUDE;
            if rng.gen_bool(TWINKLE_OFF_CHANCE) {
                self.twinkle = false;
            }
        }

        let natural = self.anchor + orbit;
        let distance = self.position.distance(env.pointer);
        if distance < STAR_ATTRACT_RADIUS {
            let force = (STAR_ATTRACT_RADIUS - distance) / STAR_ATTRACT_RADIUS;
            self.position = natural + (env.pointer - natural) * force * STAR_PULL_FRACTION;
            self.brightness = (self.base_brightness
                + STAR_NEAR_BRIGHTNESS_GAIN * force
                + pulse
                + twinkle)
                .min(STAR_MAX_BRIGHTNESS);
            self.spin += force * STAR_SPIN_GAIN;
            self.line_fade = (self.line_fade + STAR_LINE_FADE_IN).min(1.0);
            self.start_twinkle(TWINKLE_ON_CHANCE_NEAR, rng);
        } else {
            self.position = natural;
            self.brightness = (self.base_brightness + pulse + twinkle).max(STAR_MIN_BRIGHTNESS);
            self.spin *= STAR_SPIN_DECAY;
            self.line_fade = (self.line_fade - STAR_LINE_FADE_OUT).max(0.0);
            self.start_twinkle(TWINKLE_ON_CHANCE_FAR, rng);
        }
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        if !self.is_drawable() {
            return;
        }
        let alpha = self.brightness.clamp(0.0, 1.0);

        let glow_radius = (self.size * 2.0).min(20.0);
        surface.fill_circle(
            self.position,
            glow_radius,
            &Paint::glow(self.position, glow_radius, self.color),
            alpha,
        );

        surface.fill_circle(
            self.position,
            (self.size * 0.8).min(5.0),
            &Paint::Solid(self.color),
            alpha,
        );

        if self.spin.abs() > STAR_SPIN_TRAIL_THRESHOLD {
            surface.stroke_arc(
                self.position,
                (self.size * 1.8).min(15.0),
                self.spin,
                self.spin + PI * 0.8,
                &Stroke {
                    paint: Paint::Solid(self.color),
                    width: (self.size * 0.5).min(3.0),
                    alpha: alpha * 0.4,
                },
            );
        }
    }
}
