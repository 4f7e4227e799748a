pub mod drifter;
pub mod shooting;
pub mod star;

pub use drifter::Drifter;
pub use shooting::{ShootingStar, ShootingStars};
pub use star::GlowStar;

use crate::surface::{Surface, Viewport};
use glam::Vec2;
use rand::Rng;

/// Per-frame inputs shared by every entity update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameEnv {
    pub viewport: Viewport,
    pub pointer: Vec2,
}

/// A pooled field entity: spawned at random, advanced once per frame, painted.
pub trait Particle: Sized {
    fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self;
    fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv, rng: &mut R);
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S);
}

#[inline]
pub(crate) fn random_point<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Vec2 {
    Vec2::new(
        rng.gen::<f32>() * viewport.width,
        rng.gen::<f32>() * viewport.height,
    )
}

/// Symmetric random value in `[-half, half)`.
#[inline]
pub(crate) fn jitter<R: Rng + ?Sized>(rng: &mut R, half: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * half
}
