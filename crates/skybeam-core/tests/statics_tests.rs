// Host-side tests for beam statics and unit handling.

use skybeam_core::{reactions, solve, BeamInput, ForceUnit, LengthUnit, MassUnit};

fn input(length: f64, position: f64, mass: f64, gravity: f64) -> BeamInput {
    BeamInput {
        length,
        position,
        mass,
        gravity,
        ..BeamInput::default()
    }
}

#[test]
fn reactions_balance_the_load_everywhere_on_the_beam() {
    // Property: R1 + R2 == W and both non-negative for every x in [0, L]
    for &length in &[0.5, 1.0, 7.3, 50.0, 1200.0] {
        for step in 0..=100 {
            let x = length * step as f64 / 100.0;
            let weight = 4321.0;
            let (r1, r2) = reactions(length, x, weight);
            assert!(r1 >= 0.0 && r2 >= 0.0, "negative reaction at x={x} L={length}");
            assert!(
                (r1 + r2 - weight).abs() < 1e-9 * weight,
                "imbalance at x={x} L={length}: {r1} + {r2} != {weight}"
            );
        }
    }
}

#[test]
fn load_over_a_support_is_carried_by_that_support() {
    let (r1, r2) = reactions(8.0, 0.0, 100.0);
    assert_eq!((r1, r2), (100.0, 0.0));
    let (r1, r2) = reactions(8.0, 8.0, 100.0);
    assert_eq!((r1, r2), (0.0, 100.0));
    let (r1, r2) = reactions(8.0, 4.0, 100.0);
    assert_eq!((r1, r2), (50.0, 50.0));
}

#[test]
fn centered_load_in_si_units() {
    let s = solve(&input(10.0, 5.0, 100.0, 10.0));
    assert_eq!(s.weight_n, 1000.0);
    assert_eq!(s.left_n, 500.0);
    assert_eq!(s.right_n, 500.0);
    assert_eq!((s.left_display, s.right_display), (500, 500));
    assert_eq!(s.summary(), "Left: 500 N | Right: 500 N");
}

#[test]
fn imperial_load_at_left_support() {
    let s = solve(&BeamInput {
        length: 20.0,
        position: 0.0,
        mass: 50.0,
        gravity: 9.8,
        length_unit: LengthUnit::Foot,
        mass_unit: MassUnit::Pound,
        force_unit: ForceUnit::PoundForce,
    });
    let expected_n = 50.0 * 0.45359237 * 9.8;
    assert!((s.weight_n - expected_n).abs() < 1e-9);
    assert!((s.left_n - expected_n).abs() < 1e-9);
    assert_eq!(s.right_n, 0.0);
    assert_eq!(s.left_display, 50);
    assert_eq!(s.right_display, 0);
    assert_eq!(s.summary(), "Left: 50 lbf | Right: 0 lbf");
}

#[test]
fn position_is_clamped_onto_the_beam() {
    let s = solve(&input(10.0, 25.0, 10.0, 10.0));
    assert_eq!(s.position_m, 10.0);
    assert_eq!(s.right_n, 100.0);
    let s = solve(&input(10.0, -3.0, 10.0, 10.0));
    assert_eq!(s.position_m, 0.0);
    assert_eq!(s.left_n, 100.0);
}

#[test]
fn position_is_converted_with_the_length_unit() {
    let s = solve(&BeamInput {
        length: 400.0,
        position: 100.0,
        length_unit: LengthUnit::Centimeter,
        ..BeamInput::default()
    });
    assert!((s.length_m - 4.0).abs() < 1e-12);
    assert!((s.position_m - 1.0).abs() < 1e-12);
    // 400 kg * 10 -> 4000 N split 3:1
    assert_eq!((s.left_display, s.right_display), (3000, 1000));
}

#[test]
fn length_unit_round_trip() {
    for unit in LengthUnit::ALL {
        for &v in &[0.001, 0.25, 1.0, 3.75, 50.0, 999.5] {
            let back = unit.from_meters(unit.to_meters(v));
            assert!(
                (back - v).abs() <= 1e-12 * v.max(1.0),
                "{unit}: {v} -> {back}"
            );
        }
    }
}

#[test]
fn sanitized_defaults_feed_a_valid_solution() {
    let s = solve(&input(0.0, 1.0, -5.0, 0.0).sanitized());
    assert_eq!(s.length_m, 50.0);
    assert_eq!(s.weight_n, 4000.0);
    assert_eq!(s.left_n + s.right_n, 4000.0);
}
