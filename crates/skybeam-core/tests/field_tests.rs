// Host-side tests for the particle field frame loop and theme switching.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use skybeam_core::constants::{DEEP_BACKGROUND, POOL_SIZE, STELLAR_BACKGROUND};
use skybeam_core::particles::{Drifter, FrameEnv, Particle, ShootingStar};
use skybeam_core::{
    DrawList, DrawOp, FieldConfig, FrameHandle, FrameScheduler, Paint, ParticleField, Theme,
    Viewport,
};
use std::collections::HashSet;

/// Hands out increasing ids and tracks which ones are still outstanding.
#[derive(Default)]
struct CountingScheduler {
    next_id: i32,
    outstanding: HashSet<i32>,
    requested: usize,
    cancelled: usize,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        self.requested += 1;
        self.outstanding.insert(self.next_id);
        Some(FrameHandle::new(self.next_id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled += 1;
        assert!(
            self.outstanding.remove(&handle.id()),
            "cancelled unknown frame {}",
            handle.id()
        );
    }
}

const VP: Viewport = Viewport {
    width: 640.0,
    height: 480.0,
};

fn field(theme: Theme) -> ParticleField<CountingScheduler> {
    ParticleField::new(
        FieldConfig {
            theme,
            ..FieldConfig::default()
        },
        VP,
        CountingScheduler::default(),
        StdRng::seed_from_u64(42),
    )
}

/// Simulates the platform firing the pending frame.
fn fire(f: &mut ParticleField<CountingScheduler>, surface: &mut DrawList, pointer: Vec2) {
    let id = f.pending_frame().map(|h| h.id()).expect("no frame pending");
    f.scheduler_mut().outstanding.remove(&id);
    f.on_frame(id, surface, pointer, 0.0);
}

#[test]
fn reset_populates_pool_and_schedules_one_frame() {
    let mut f = field(Theme::Deep);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    assert_eq!(f.drifters().len(), POOL_SIZE);
    assert!(f.stars().is_empty());
    assert_eq!(f.scheduler().outstanding.len(), 1);

    // Cleared, then painted with the stellar base color to avoid a blank flash.
    let ops = surface.ops();
    assert!(matches!(ops[0], DrawOp::Clear(_)));
    assert!(matches!(
        &ops[1],
        DrawOp::FillRect { paint: Paint::Solid(c), .. } if *c == STELLAR_BACKGROUND
    ));
}

#[test]
fn theme_switch_leaves_exactly_one_pending_frame() {
    let mut f = field(Theme::Deep);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    for i in 0..10 {
        let theme = if i % 2 == 0 { Theme::Stellar } else { Theme::Deep };
        assert!(f.switch_theme(theme, &mut surface));
        assert_eq!(f.scheduler().outstanding.len(), 1, "switch {i}");
        match theme {
            Theme::Stellar => {
                assert_eq!(f.stars().len(), POOL_SIZE);
                assert!(f.drifters().is_empty());
            }
            Theme::Deep => {
                assert_eq!(f.drifters().len(), POOL_SIZE);
                assert!(f.stars().is_empty());
                assert!(f.meteors().is_none());
            }
        }
    }
    assert_eq!(f.scheduler().cancelled, 10);
}

#[test]
fn switching_to_the_active_theme_is_a_no_op() {
    let mut f = field(Theme::Stellar);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    let first = f.stars()[0].clone();
    assert!(!f.switch_theme(Theme::Stellar, &mut surface));
    assert_eq!(f.stars()[0], first);
    assert_eq!(f.scheduler().requested, 1);
}

#[test]
fn each_frame_reschedules_exactly_once() {
    let mut f = field(Theme::Stellar);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    for _ in 0..50 {
        fire(&mut f, &mut surface, VP.center());
        assert_eq!(f.scheduler().outstanding.len(), 1);
    }
    assert_eq!(f.scheduler().requested, 51);
    assert_eq!(f.scheduler().cancelled, 0);
}

#[test]
fn stale_frame_after_cancel_does_nothing() {
    let mut f = field(Theme::Deep);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    let cancelled = f.pending_frame().map(|h| h.id()).unwrap();
    assert!(f.switch_theme(Theme::Stellar, &mut surface));
    let requested = f.scheduler().requested;
    let pending = f.pending_frame().map(|h| h.id());

    // The cancelled frame's callback still arrives: nothing may run or reschedule.
    let before = f.stars().to_vec();
    let ops_before = surface.len();
    f.on_frame(cancelled, &mut surface, VP.center(), 16.0);
    assert_eq!(f.scheduler().requested, requested);
    assert_eq!(f.pending_frame().map(|h| h.id()), pending);
    assert_eq!(f.stars(), &before[..]);
    assert_eq!(surface.len(), ops_before);
}

#[test]
fn mismatched_callback_never_starts_a_second_loop() {
    let mut f = field(Theme::Stellar);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    let pending = f.pending_frame().map(|h| h.id()).unwrap();
    for spurious in [pending - 1, pending + 1, 0, -7] {
        f.on_frame(spurious, &mut surface, VP.center(), 0.0);
        assert_eq!(f.scheduler().outstanding.len(), 1);
        assert_eq!(f.pending_frame().map(|h| h.id()), Some(pending));
    }
    // The real callback still runs afterwards.
    fire(&mut f, &mut surface, VP.center());
    assert_eq!(f.scheduler().outstanding.len(), 1);
    assert_eq!(f.scheduler().requested, 2);
}

#[test]
fn callback_after_the_loop_stopped_is_ignored() {
    let mut f = field(Theme::Deep);
    let mut surface = DrawList::new();
    // Never reset: no frame was ever requested.
    f.on_frame(1, &mut surface, VP.center(), 0.0);
    assert!(surface.is_empty());
    assert_eq!(f.scheduler().requested, 0);
}

#[test]
fn deep_frame_paints_background_then_every_drifter() {
    let mut f = field(Theme::Deep);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    surface.take();
    fire(&mut f, &mut surface, Vec2::new(-1000.0, -1000.0));
    let ops = surface.ops();
    assert!(matches!(
        &ops[0],
        DrawOp::FillRect { paint: Paint::Solid(c), .. } if *c == DEEP_BACKGROUND
    ));
    let circles = ops
        .iter()
        .filter(|op| matches!(op, DrawOp::FillCircle { .. }))
        .count();
    assert_eq!(circles, POOL_SIZE);
}

#[test]
fn stellar_frame_layers_background_nebula_lines_then_stars() {
    let mut f = field(Theme::Stellar);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    surface.take();
    fire(&mut f, &mut surface, VP.center());
    let ops = surface.ops();
    assert!(matches!(
        &ops[0],
        DrawOp::FillRect { paint: Paint::Solid(c), .. } if *c == STELLAR_BACKGROUND
    ));
    assert!(matches!(
        &ops[1],
        DrawOp::FillRect { paint: Paint::Radial { .. }, .. }
    ));
    // All pointer lines come before the first star body.
    let first_circle = ops
        .iter()
        .position(|op| matches!(op, DrawOp::FillCircle { .. }))
        .unwrap();
    let last_line = ops.iter().rposition(|op| {
        matches!(op, DrawOp::StrokeLine { stroke, .. } if matches!(stroke.paint, Paint::Linear { .. }))
    });
    if let Some(last_line) = last_line {
        assert!(last_line < first_circle);
    }
}

#[test]
fn stars_near_the_pointer_grow_lines_over_frames() {
    let mut f = field(Theme::Stellar);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    let pointer = VP.center();
    for _ in 0..20 {
        fire(&mut f, &mut surface, pointer);
    }
    let near = f
        .stars()
        .iter()
        .filter(|s| s.position.distance(pointer) < 100.0)
        .collect::<Vec<_>>();
    for s in near {
        assert!(s.line_fade > 0.0);
    }
    for s in f.stars() {
        assert!((0.0..=1.0).contains(&s.line_fade));
        assert!(s.position.is_finite());
    }
}

#[test]
fn meteors_leave_the_active_set_when_spent() {
    let mut f = field(Theme::Stellar);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    f.meteors_mut()
        .unwrap()
        .push(ShootingStar::new(Vec2::new(630.0, 10.0), Vec2::new(40.0, 0.0)));
    fire(&mut f, &mut surface, VP.center());
    assert!(f
        .meteors()
        .unwrap()
        .iter()
        .all(|m| m.position.x <= VP.width + 20.0));
}

#[test]
fn resize_keeps_particles() {
    let mut f = field(Theme::Deep);
    let mut surface = DrawList::new();
    f.reset(&mut surface);
    let before = f.drifters().to_vec();
    f.resize(Viewport::new(1024.0, 768.0));
    assert_eq!(f.viewport(), Viewport::new(1024.0, 768.0));
    assert_eq!(f.drifters(), &before[..]);
    assert_eq!(f.scheduler().outstanding.len(), 1);
}

#[test]
fn drifter_falling_off_the_bottom_reenters_at_the_top() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut d = Drifter {
        position: Vec2::new(100.0, VP.height + 20.0),
        velocity: Vec2::new(0.0, 0.5),
        radius: 2.0,
        opacity: 0.5,
    };
    let env = FrameEnv {
        viewport: VP,
        pointer: Vec2::new(-1000.0, -1000.0),
    };
    d.update(&env, &mut rng);
    assert_eq!(d.position.y, -20.0);
    assert!(d.position.x >= 0.0 && d.position.x <= VP.width);
}

#[test]
fn drifters_never_escape_the_viewport_margin() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut drifters: Vec<Drifter> = (0..POOL_SIZE).map(|_| Drifter::spawn(VP, &mut rng)).collect();
    for frame in 0..2000 {
        // Sweep the pointer across the field so repulsion kicks in.
        let pointer = Vec2::new((frame % 640) as f32, ((frame * 7) % 480) as f32);
        let env = FrameEnv {
            viewport: VP,
            pointer,
        };
        for d in drifters.iter_mut() {
            d.update(&env, &mut rng);
            assert!(d.position.x >= -20.0 && d.position.x <= VP.width + 20.0);
            assert!(d.position.y <= VP.height + 20.0);
        }
    }
}

#[test]
fn drifter_leaving_the_right_edge_wraps_left() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut d = Drifter {
        position: Vec2::new(VP.width + 19.9, 100.0),
        velocity: Vec2::new(0.5, 0.0),
        radius: 2.0,
        opacity: 0.5,
    };
    let env = FrameEnv {
        viewport: VP,
        pointer: Vec2::new(-1000.0, -1000.0),
    };
    d.update(&env, &mut rng);
    assert_eq!(d.position.x, -20.0);
}
