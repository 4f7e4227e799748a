use super::{jitter, random_point, FrameEnv, Particle};
use crate::constants::{
    DRIFTER_FILL, DRIFTER_FORCE_DIVISOR, DRIFTER_FORCE_MULTIPLIER, DRIFTER_REPEL_RADIUS,
    DRIFTER_WRAP_MARGIN,
};
use crate::surface::{Paint, Surface, Viewport};
use glam::Vec2;
use rand::Rng;

/// Dust mote of the deep-space theme. Falls slowly and is pushed away from the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Drifter {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

impl Drifter {
    /// Displacement applied this frame by pointer repulsion, if any.
    pub fn repulsion(&self, pointer: Vec2) -> Option<Vec2> {
        let offset = self.position - pointer;
        let distance = offset.length();
        if distance >= DRIFTER_REPEL_RADIUS || distance == 0.0 {
            return None;
        }
        let force = (DRIFTER_REPEL_RADIUS - distance) / DRIFTER_FORCE_DIVISOR;
        Some(offset / distance * force * DRIFTER_FORCE_MULTIPLIER)
    }

    fn wrap<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) {
        let m = DRIFTER_WRAP_MARGIN;
        if self.position.y > viewport.height + m {
            self.position.y = -m;
            self.position.x = rng.gen::<f32>() * viewport.width;
        }
        if self.position.x < -m {
            self.position.x = viewport.width + m;
        }
        if self.position.x > viewport.width + m {
            self.position.x = -m;
        }
    }
}

impl Particle for Drifter {
    fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let position = random_point(viewport, rng);
        let radius = rng.gen::<f32>() * 2.0 + 1.0;
        let opacity = rng.gen::<f32>() * 0.5 + 0.2;
        let velocity = Vec2::new(jitter(rng, 0.15), rng.gen::<f32>() * 0.5 + 0.2);
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    fn update<R: Rng + ?Sized>(&mut self, env: &FrameEnv, rng: &mut R) {
        if let Some(push) = self.repulsion(env.pointer) {
            self.position += push;
        }
        self.position += self.velocity;
        self.wrap(env.viewport, rng);
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(
            self.position,
            self.radius,
            &Paint::Solid(DRIFTER_FILL),
            self.opacity,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn still(position: Vec2) -> Drifter {
        Drifter {
            position,
            velocity: Vec2::ZERO,
            radius: 1.5,
            opacity: 0.5,
        }
    }

    #[test]
    fn pointer_on_top_of_drifter_applies_no_force() {
        let d = still(Vec2::new(50.0, 50.0));
        assert!(d.repulsion(Vec2::new(50.0, 50.0)).is_none());
    }

    #[test]
    fn repulsion_pushes_away_from_pointer() {
        let d = still(Vec2::new(100.0, 100.0));
        let push = d.repulsion(Vec2::new(40.0, 100.0)).unwrap();
        // distance 60 -> force (180-60)/60 = 2, times 4
        assert!((push.x - 8.0).abs() < 1e-5);
        assert!(push.y.abs() < 1e-6);
    }

    #[test]
    fn distant_pointer_is_ignored() {
        let d = still(Vec2::new(0.0, 0.0));
        assert!(d.repulsion(Vec2::new(180.0, 0.0)).is_none());
    }

    #[test]
    fn spawn_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let vp = Viewport::new(640.0, 480.0);
        for _ in 0..500 {
            let d = Drifter::spawn(vp, &mut rng);
            assert!(d.radius >= 1.0 && d.radius <= 3.0);
            assert!(d.opacity >= 0.2 && d.opacity <= 0.7);
            assert!(d.velocity.x >= -0.15 && d.velocity.x <= 0.15);
            assert!(d.velocity.y >= 0.2 && d.velocity.y <= 0.7);
        }
    }

    fn far_env(viewport: Viewport) -> FrameEnv {
        FrameEnv {
            viewport,
            pointer: Vec2::new(-1000.0, -1000.0),
        }
    }

    #[test]
    fn leaving_the_left_edge_wraps_right() {
        let mut rng = StdRng::seed_from_u64(4);
        let vp = Viewport::new(640.0, 480.0);
        let mut d = still(Vec2::new(-19.9, 100.0));
        d.velocity = Vec2::new(-0.5, 0.0);
        d.update(&far_env(vp), &mut rng);
        assert_eq!(d.position.x, vp.width + DRIFTER_WRAP_MARGIN);
        assert_eq!(d.position.y, 100.0);
    }

    #[test]
    fn inside_the_margin_nothing_wraps() {
        let mut rng = StdRng::seed_from_u64(5);
        let vp = Viewport::new(640.0, 480.0);
        let mut d = still(Vec2::new(-19.0, 100.0));
        d.velocity = Vec2::new(-0.5, 0.0);
        d.update(&far_env(vp), &mut rng);
        assert_eq!(d.position.x, -19.5);
    }
}
