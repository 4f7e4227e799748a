//! Frame loop and theme orchestration for the particle background.
//!
//! [`ParticleField`] owns the active particle pool and the single pending
//! frame request. Theme switches cancel that request, drop the old pool,
//! repaint the surface, build a fresh pool and schedule the new loop, all in
//! one call, so a frame can never observe a half-reset field.

use crate::color::Rgba;
use crate::constants::{
    DEEP_BACKGROUND, NEBULA_RADIUS_FRACTION, NEBULA_TIME_SCALE, POOL_SIZE, STELLAR_BACKGROUND,
};
use crate::error::{Result, SkybeamError};
use crate::particles::{Drifter, FrameEnv, GlowStar, Particle, ShootingStars};
use crate::surface::{ColorStop, Paint, Stops, Surface, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Falling dust pushed away by the pointer.
    #[default]
    Deep,
    /// Glowing stars drawn toward the pointer, with a nebula wash and meteors.
    Stellar,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Deep => "deep",
            Theme::Stellar => "stellar",
        }
    }

    pub fn background(&self) -> Rgba {
        match self {
            Theme::Deep => DEEP_BACKGROUND,
            Theme::Stellar => STELLAR_BACKGROUND,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = SkybeamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "deep" => Ok(Theme::Deep),
            "stellar" => Ok(Theme::Stellar),
            other => Err(SkybeamError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub pool_size: usize,
    pub theme: Theme,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            pool_size: POOL_SIZE,
            theme: Theme::Deep,
        }
    }
}

/// Token for one requested display frame. Not clonable: whoever holds it is
/// the only party able to cancel that frame.
#[derive(Debug, PartialEq, Eq)]
pub struct FrameHandle {
    id: i32,
}

impl FrameHandle {
    pub fn new(id: i32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> i32 {
        self.id
    }
}

/// Platform hook that calls back into the field once per display refresh.
pub trait FrameScheduler {
    /// Requests one callback. `None` when the platform refused the request.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Debug, Default)]
enum Pool {
    #[default]
    Empty,
    Deep(Vec<Drifter>),
    Stellar {
        stars: Vec<GlowStar>,
        meteors: ShootingStars,
    },
}

impl Pool {
    fn populate(theme: Theme, size: usize, viewport: Viewport, rng: &mut StdRng) -> Self {
        match theme {
            Theme::Deep => Pool::Deep((0..size).map(|_| Drifter::spawn(viewport, rng)).collect()),
            Theme::Stellar => Pool::Stellar {
                stars: (0..size).map(|_| GlowStar::spawn(viewport, rng)).collect(),
                meteors: ShootingStars::new(),
            },
        }
    }
}

pub struct ParticleField<S: FrameScheduler> {
    config: FieldConfig,
    theme: Theme,
    viewport: Viewport,
    pool: Pool,
    pending: Option<FrameHandle>,
    scheduler: S,
    rng: StdRng,
}

impl<S: FrameScheduler> ParticleField<S> {
    /// Builds an idle field. Nothing is drawn or scheduled until [`Self::reset`].
    pub fn new(config: FieldConfig, viewport: Viewport, scheduler: S, rng: StdRng) -> Self {
        Self {
            theme: config.theme,
            config,
            viewport,
            pool: Pool::Empty,
            pending: None,
            scheduler,
            rng,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn drifters(&self) -> &[Drifter] {
        match &self.pool {
            Pool::Deep(drifters) => drifters,
            _ => &[],
        }
    }

    pub fn stars(&self) -> &[GlowStar] {
        match &self.pool {
            Pool::Stellar { stars, .. } => stars,
            _ => &[],
        }
    }

    pub fn meteors(&self) -> Option<&ShootingStars> {
        match &self.pool {
            Pool::Stellar { meteors, .. } => Some(meteors),
            _ => None,
        }
    }

    pub fn meteors_mut(&mut self) -> Option<&mut ShootingStars> {
        match &mut self.pool {
            Pool::Stellar { meteors, .. } => Some(meteors),
            _ => None,
        }
    }

    pub fn pending_frame(&self) -> Option<&FrameHandle> {
        self.pending.as_ref()
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Viewport changes only affect wrapping bounds; particles keep their state.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Changes theme and restarts the field. Returns `false` when `theme` is already active.
    pub fn switch_theme<Su: Surface + ?Sized>(&mut self, theme: Theme, surface: &mut Su) -> bool {
        if theme == self.theme && !matches!(self.pool, Pool::Empty) {
            return false;
        }
        self.theme = theme;
        self.reset(surface);
        true
    }

    /// Cancels the pending frame, rebuilds the pool for the current theme and
    /// starts its loop.
    pub fn reset<Su: Surface + ?Sized>(&mut self, surface: &mut Su) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        self.pool = Pool::Empty;

        surface.clear(self.viewport);
        surface.fill_viewport(self.viewport, &Paint::Solid(STELLAR_BACKGROUND));

        self.pool = Pool::populate(
            self.theme,
            self.config.pool_size,
            self.viewport,
            &mut self.rng,
        );
        log::info!(
            "[field] theme={} pool={} viewport={}x{}",
            self.theme,
            self.config.pool_size,
            self.viewport.width,
            self.viewport.height
        );
        self.schedule();
    }

    /// Runs one frame of the active theme and requests the next one.
    ///
    /// `fired` is the id of the frame the platform is calling back for. Only
    /// the pending request runs; any other callback is stale and ignored.
    pub fn on_frame<Su: Surface + ?Sized>(
        &mut self,
        fired: i32,
        surface: &mut Su,
        pointer: Vec2,
        elapsed_ms: f64,
    ) {
        match &self.pending {
            Some(handle) if handle.id() == fired => self.pending = None,
            _ => {
                log::debug!("[field] ignoring stale frame {}", fired);
                return;
            }
        }
        let env = FrameEnv {
            viewport: self.viewport,
            pointer,
        };
        let background = Paint::Solid(self.theme.background());
        let Self { pool, rng, .. } = self;
        match pool {
            Pool::Empty => {}
            Pool::Deep(drifters) => {
                surface.fill_viewport(env.viewport, &background);
                for d in drifters.iter_mut() {
                    d.update(&env, rng);
                    d.draw(surface);
                }
            }
            Pool::Stellar { stars, meteors } => {
                surface.fill_viewport(env.viewport, &background);
                surface.fill_viewport(env.viewport, &nebula_wash(env.viewport, elapsed_ms));
                for s in stars.iter_mut() {
                    s.update(&env, rng);
                }
                for s in stars.iter() {
                    s.draw_line_to_pointer(surface, env.pointer);
                }
                for s in stars.iter() {
                    s.draw(surface);
                }
                meteors.maybe_spawn(env.viewport, rng);
                meteors.step(env.viewport, surface);
            }
        }
        self.schedule();
    }

    fn schedule(&mut self) {
        if let Some(stale) = self.pending.take() {
            self.scheduler.cancel_frame(stale);
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[field] frame request refused; loop stopped");
        }
    }
}

/// Slowly breathing violet wash centered on the viewport.
pub fn nebula_wash(viewport: Viewport, elapsed_ms: f64) -> Paint {
    let t = elapsed_ms * NEBULA_TIME_SCALE;
    let inner = (0.05 + t.sin() * 0.02) as f32;
    let middle = (0.03 + (t * 0.7).cos() * 0.01) as f32;
    let mut stops = Stops::new();
    stops.push(ColorStop {
        offset: 0.0,
        color: Rgba::rgba(15, 10, 30, inner),
    });
    stops.push(ColorStop {
        offset: 0.6,
        color: Rgba::rgba(25, 15, 45, middle),
    });
    stops.push(ColorStop {
        offset: 1.0,
        color: Rgba::TRANSPARENT,
    });
    Paint::Radial {
        center: viewport.center(),
        radius: viewport.width.max(viewport.height) * NEBULA_RADIUS_FRACTION,
        stops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_round_trip() {
        for theme in [Theme::Deep, Theme::Stellar] {
            assert_eq!(theme.name().parse::<Theme>(), Ok(theme));
        }
        assert_eq!(
            "aurora".parse::<Theme>(),
            Err(SkybeamError::UnknownTheme("aurora".into()))
        );
    }

    #[test]
    fn nebula_alpha_stays_low() {
        for ms in (0..200_000).step_by(997) {
            let wash = nebula_wash(Viewport::new(800.0, 400.0), ms as f64);
            if let Paint::Radial { stops, radius, .. } = wash {
                assert!((radius - 560.0).abs() < 1e-3);
                assert!(stops[0].color.a <= 0.07 && stops[0].color.a >= 0.03);
                assert!(stops[1].color.a <= 0.04 && stops[1].color.a >= 0.02);
            } else {
                panic!("nebula must be radial");
            }
        }
    }
}
