use crate::color::Rgba;
use crate::constants::{
    SHOOTING_EXIT_MARGIN, SHOOTING_LIFE, SHOOTING_MAX_ALPHA, SHOOTING_MAX_WIDTH,
    SHOOTING_SPAWN_CHANCE, SHOOTING_START_X, SHOOTING_TAIL,
};
use crate::surface::{Paint, Stroke, Surface, Viewport};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShootingStar {
    pub position: Vec2,
    pub velocity: Vec2,
    pub life: u32,
    pub max_life: u32,
}

impl ShootingStar {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            life: SHOOTING_LIFE,
            max_life: SHOOTING_LIFE,
        }
    }

    /// Enters from the left edge at a random height, heading right.
    pub fn launch<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let y = rng.gen::<f32>() * viewport.height;
        let velocity = Vec2::new(8.0 + rng.gen::<f32>() * 6.0, (rng.gen::<f32>() - 0.5) * 2.0);
        Self::new(Vec2::new(SHOOTING_START_X, y), velocity)
    }

    #[inline]
    fn remaining(&self) -> f32 {
        self.life as f32 / self.max_life.max(1) as f32
    }

    fn expired(&self, viewport: Viewport) -> bool {
        self.life == 0 || self.position.x > viewport.width + SHOOTING_EXIT_MARGIN
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let fraction = self.remaining();
        surface.stroke_line(
            self.position,
            self.position - self.velocity * SHOOTING_TAIL,
            &Stroke {
                paint: Paint::Solid(Rgba::WHITE),
                width: SHOOTING_MAX_WIDTH * fraction,
                alpha: SHOOTING_MAX_ALPHA * fraction,
            },
        );
    }
}

/// Transient meteors layered over the stellar theme.
#[derive(Clone, Debug, Default)]
pub struct ShootingStars {
    active: SmallVec<[ShootingStar; 4]>,
}

impl ShootingStars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShootingStar> {
        self.active.iter()
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn push(&mut self, star: ShootingStar) {
        self.active.push(star);
    }

    /// Launches a new meteor with [`SHOOTING_SPAWN_CHANCE`]. Returns whether one was added.
    pub fn maybe_spawn<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        if rng.gen_bool(SHOOTING_SPAWN_CHANCE) {
            self.push(ShootingStar::launch(viewport, rng));
            true
        } else {
            false
        }
    }

    /// Advances every meteor one frame, draws the survivors' streaks and drops
    /// the ones that burned out or left the right edge.
    pub fn step<S: Surface + ?Sized>(&mut self, viewport: Viewport, surface: &mut S) {
        self.active.retain(|s| {
            s.position += s.velocity;
            s.life = s.life.saturating_sub(1);
            if s.expired(viewport) {
                return false;
            }
            s.draw(surface);
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawList, DrawOp};

    const VP: Viewport = Viewport {
        width: 300.0,
        height: 200.0,
    };

    #[test]
    fn meteor_is_removed_on_the_frame_its_life_runs_out() {
        let mut stars = ShootingStars::new();
        let mut s = ShootingStar::new(Vec2::new(0.0, 50.0), Vec2::new(0.1, 0.0));
        s.life = 1;
        stars.push(s);
        let mut list = DrawList::new();
        stars.step(VP, &mut list);
        assert!(stars.is_empty());
        assert!(list.is_empty());
    }

    #[test]
    fn meteor_is_removed_on_the_frame_it_leaves_the_right_edge() {
        let mut stars = ShootingStars::new();
        stars.push(ShootingStar::new(Vec2::new(310.0, 50.0), Vec2::new(8.0, 0.0)));
        let mut list = DrawList::new();
        stars.step(VP, &mut list);
        assert_eq!(stars.len(), 1);
        stars.step(VP, &mut list);
        assert!(stars.is_empty());
    }

    #[test]
    fn streak_fades_with_remaining_life() {
        let mut stars = ShootingStars::new();
        stars.push(ShootingStar::new(Vec2::new(0.0, 50.0), Vec2::new(1.0, 0.0)));
        let mut list = DrawList::new();
        for _ in 0..30 {
            stars.step(VP, &mut list);
        }
        match list.ops().last() {
            Some(DrawOp::StrokeLine { from, to, stroke }) => {
                assert!((stroke.alpha - 0.45).abs() < 1e-5);
                assert!((stroke.width - 1.0).abs() < 1e-5);
                assert!((from.x - to.x - 3.0).abs() < 1e-5);
            }
            other => panic!("unexpected op {other:?}"),
        }
    }

    #[test]
    fn launch_enters_from_the_left() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let s = ShootingStar::launch(VP, &mut rng);
            assert_eq!(s.position.x, SHOOTING_START_X);
            assert!(s.velocity.x >= 8.0 && s.velocity.x <= 14.0);
            assert!(s.velocity.y.abs() <= 1.0);
            assert_eq!(s.life, SHOOTING_LIFE);
        }
    }
}
