// DOM hooks the front-end binds to. A missing element disables the feature
// that needs it; startup carries on.

// Particle background
pub const PARTICLES_CANVAS_ID: &str = "particlesCanvas";
pub const THEME_OPTION_SELECTOR: &str = ".theme-option";
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const ACTIVE_CLASS: &str = "active";

// Beam panel inputs
pub const LENGTH_INPUT_ID: &str = "length";
pub const POSITION_INPUT_ID: &str = "position";
pub const MASS_INPUT_ID: &str = "mass";
pub const GRAVITY_INPUT_ID: &str = "gravity";
pub const LENGTH_UNIT_ID: &str = "lengthUnit";
pub const MASS_UNIT_ID: &str = "massUnit";
pub const FORCE_UNIT_ID: &str = "forceUnit";
pub const UPDATE_BUTTON_ID: &str = "updateBtn";

// Beam panel outputs
pub const RESULT_ID: &str = "result";
pub const DIAGRAM_SVG_ID: &str = "bridgeSvg";

pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
pub const SVG_FONT_FAMILY: &str = "Arial, sans-serif";
pub const MARKER_CURSOR: &str = "grab";
