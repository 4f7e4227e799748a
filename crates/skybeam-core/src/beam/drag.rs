use super::diagram::BeamLayout;
use super::units::{format_length, LengthUnit};

/// Pointer-to-beam mapping for one drag of the load marker.
///
/// Created on pointer-down with the grab offset so the marker does not jump
/// under the cursor; each move maps the pointer back to a beam position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    offset_x: f64,
    layout: BeamLayout,
    unit: LengthUnit,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragUpdate {
    /// New load position in meters, rounded to millimeters.
    pub position_m: f64,
    /// Same position in the display unit, formatted for the position input.
    pub display: String,
}

impl DragSession {
    pub fn begin(pointer_x: f64, marker_x: f64, layout: BeamLayout, unit: LengthUnit) -> Self {
        Self {
            offset_x: pointer_x - marker_x,
            layout,
            unit,
        }
    }

    pub fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Maps a pointer x (scene units) to a clamped beam position.
    pub fn drag_to(&self, pointer_x: f64) -> DragUpdate {
        let raw = self.layout.position_at(pointer_x - self.offset_x);
        let position_m = ((raw * 1000.0).round() / 1000.0).clamp(0.0, self.layout.length_m);
        DragUpdate {
            position_m,
            display: format_length(self.unit.from_meters(position_m)),
        }
    }
}
