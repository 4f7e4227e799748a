use super::units::{ForceUnit, LengthUnit, MassUnit};
use std::fmt;

pub const DEFAULT_LENGTH: f64 = 50.0;
pub const DEFAULT_MASS: f64 = 400.0;
pub const DEFAULT_GRAVITY: f64 = 10.0;
pub const MAX_GRAVITY: f64 = 100.0;

/// Raw control-panel values, in the selected display units.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamInput {
    pub length: f64,
    pub position: f64,
    pub mass: f64,
    pub gravity: f64,
    pub length_unit: LengthUnit,
    pub mass_unit: MassUnit,
    pub force_unit: ForceUnit,
}

impl Default for BeamInput {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            position: 0.0,
            mass: DEFAULT_MASS,
            gravity: DEFAULT_GRAVITY,
            length_unit: LengthUnit::Meter,
            mass_unit: MassUnit::Kilogram,
            force_unit: ForceUnit::Newton,
        }
    }
}

impl BeamInput {
    /// Replaces values the solver cannot use with the panel defaults.
    pub fn sanitized(&self) -> Self {
        let mut out = self.clone();
        if !out.length.is_finite() || out.length <= 0.0 {
            out.length = DEFAULT_LENGTH;
        }
        if !out.position.is_finite() {
            out.position = 0.0;
        }
        if !out.mass.is_finite() || out.mass <= 0.0 {
            out.mass = DEFAULT_MASS;
        }
        if !out.gravity.is_finite() || out.gravity <= 0.0 || out.gravity > MAX_GRAVITY {
            out.gravity = DEFAULT_GRAVITY;
        }
        out
    }
}

/// Support reactions of a simply supported beam under one point load.
#[derive(Clone, Debug, PartialEq)]
pub struct BeamSolution {
    pub length_m: f64,
    /// Load position from the left support, clamped onto the beam.
    pub position_m: f64,
    pub weight_n: f64,
    pub left_n: f64,
    pub right_n: f64,
    /// Reactions in the display force unit, rounded to whole units.
    pub left_display: i64,
    pub right_display: i64,
    pub force_unit: ForceUnit,
    pub length_unit: LengthUnit,
}

/// Moment balance about each support: `R1 = W(L-x)/L`, `R2 = Wx/L`.
///
/// `length_m` must be positive; [`BeamInput::sanitized`] guarantees this for panel input.
#[inline]
pub fn reactions(length_m: f64, position_m: f64, weight_n: f64) -> (f64, f64) {
    let x = position_m.clamp(0.0, length_m);
    let left = weight_n * (length_m - x) / length_m;
    let right = weight_n * x / length_m;
    (left, right)
}

pub fn solve(input: &BeamInput) -> BeamSolution {
    let length_m = input.length_unit.to_meters(input.length);
    let position_m = input.length_unit.to_meters(input.position).clamp(0.0, length_m);
    let mass_kg = input.mass_unit.to_kilograms(input.mass);
    let weight_n = mass_kg * input.gravity;
    let (left_n, right_n) = reactions(length_m, position_m, weight_n);
    let unit = input.force_unit;
    BeamSolution {
        length_m,
        position_m,
        weight_n,
        left_n,
        right_n,
        left_display: unit.from_newtons(left_n).round() as i64,
        right_display: unit.from_newtons(right_n).round() as i64,
        force_unit: unit,
        length_unit: input.length_unit,
    }
}

impl BeamSolution {
    /// Result line shown under the controls.
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BeamSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Left: {} {} | Right: {} {}",
            self.left_display, self.force_unit, self.right_display, self.force_unit
        )
    }
}
