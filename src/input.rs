use glam::Vec2;
use skybeam_core::beam::statics::{DEFAULT_GRAVITY, DEFAULT_LENGTH, DEFAULT_MASS};
use skybeam_core::{BeamInput, ForceUnit, LengthUnit, MassUnit, Viewport};
use std::str::FromStr;

/// Last known pointer position in viewport pixels.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
}

impl PointerState {
    pub fn centered(viewport: Viewport) -> Self {
        Self {
            position: viewport.center(),
        }
    }

    #[inline]
    pub fn move_to(&mut self, client_x: f32, client_y: f32) {
        self.position = Vec2::new(client_x, client_y);
    }
}

/// Control-panel values exactly as read from the DOM.
#[derive(Clone, Debug, Default)]
pub struct RawBeamFields {
    pub length: String,
    pub position: String,
    pub mass: String,
    pub gravity: String,
    pub length_unit: String,
    pub mass_unit: String,
    pub force_unit: String,
}

/// Values the update button writes back into the panel after sanitizing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Corrections {
    pub length: Option<f64>,
    pub mass: Option<f64>,
    pub gravity: Option<f64>,
}

impl Corrections {
    pub fn is_empty(&self) -> bool {
        self.length.is_none() && self.mass.is_none() && self.gravity.is_none()
    }
}

/// Reads the leading decimal number of `text`, ignoring anything after it.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    if bytes.get(int_end) == Some(&b'.') {
        mantissa_end = digits_from(int_end + 1);
    }
    // Needs at least one digit on either side of the point.
    if mantissa_end - end - usize::from(mantissa_end > int_end) == 0 {
        return None;
    }
    end = mantissa_end;
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_unit<U: FromStr + Default>(text: &str) -> U
where
    U::Err: std::fmt::Display,
{
    text.parse().unwrap_or_else(|e| {
        log::warn!("{}; falling back to default unit", e);
        U::default()
    })
}

/// Parses and sanitizes the panel. Unparsable numbers take the panel defaults.
pub fn beam_input_from_fields(raw: &RawBeamFields) -> BeamInput {
    BeamInput {
        length: parse_number(&raw.length).unwrap_or(DEFAULT_LENGTH),
        position: parse_number(&raw.position).unwrap_or(0.0),
        mass: parse_number(&raw.mass).unwrap_or(DEFAULT_MASS),
        gravity: parse_number(&raw.gravity).unwrap_or(DEFAULT_GRAVITY),
        length_unit: parse_unit::<LengthUnit>(&raw.length_unit),
        mass_unit: parse_unit::<MassUnit>(&raw.mass_unit),
        force_unit: parse_unit::<ForceUnit>(&raw.force_unit),
    }
    .sanitized()
}

/// Fields whose typed value differs from what the solver will use.
pub fn corrections(raw: &RawBeamFields) -> Corrections {
    let used = beam_input_from_fields(raw);
    let differs = |text: &str, value: f64| parse_number(text) != Some(value);
    Corrections {
        length: differs(&raw.length, used.length).then_some(used.length),
        mass: differs(&raw.mass, used.mass).then_some(used.mass),
        gravity: differs(&raw.gravity, used.gravity).then_some(used.gravity),
    }
}

/// Maps a client x coordinate onto the diagram's logical width.
#[inline]
pub fn client_to_scene_x(client_x: f64, rect_left: f64, rect_width: f64, scene_width: f64) -> f64 {
    let local = client_x - rect_left;
    if rect_width > 0.0 {
        local / rect_width * scene_width
    } else {
        local
    }
}
