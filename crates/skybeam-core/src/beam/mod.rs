pub mod diagram;
pub mod drag;
pub mod statics;
pub mod units;

pub use diagram::{build_scene, BeamLayout, Node, Scene};
pub use drag::{DragSession, DragUpdate};
pub use statics::{reactions, solve, BeamInput, BeamSolution};
pub use units::{display_precision, format_length, ForceUnit, LengthUnit, MassUnit};
