use crate::error::{Result, SkybeamError};
use std::fmt;
use std::str::FromStr;

pub const NEWTONS_TO_LBF: f64 = 0.2248089431;
pub const POUNDS_TO_KG: f64 = 0.45359237;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    Meter,
    Centimeter,
    Kilometer,
    Foot,
    Inch,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Kilometer,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    /// Meters per one of this unit.
    pub fn meters(&self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }

    pub fn to_meters(&self, value: f64) -> f64 {
        value * self.meters()
    }

    pub fn from_meters(&self, meters: f64) -> f64 {
        meters / self.meters()
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Kilometer => "km",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }
}

impl FromStr for LengthUnit {
    type Err = SkybeamError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|u| u.symbol() == s.trim())
            .ok_or_else(|| SkybeamError::UnknownLengthUnit(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MassUnit {
    #[default]
    Kilogram,
    Pound,
}

impl MassUnit {
    pub fn to_kilograms(&self, value: f64) -> f64 {
        match self {
            MassUnit::Kilogram => value,
            MassUnit::Pound => value * POUNDS_TO_KG,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Pound => "lb",
        }
    }
}

impl FromStr for MassUnit {
    type Err = SkybeamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "kg" => Ok(MassUnit::Kilogram),
            "lb" => Ok(MassUnit::Pound),
            _ => Err(SkybeamError::UnknownMassUnit(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForceUnit {
    #[default]
    Newton,
    PoundForce,
}

impl ForceUnit {
    pub fn from_newtons(&self, newtons: f64) -> f64 {
        match self {
            ForceUnit::Newton => newtons,
            ForceUnit::PoundForce => newtons * NEWTONS_TO_LBF,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::PoundForce => "lbf",
        }
    }
}

impl FromStr for ForceUnit {
    type Err = SkybeamError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "N" => Ok(ForceUnit::Newton),
            "lbf" => Ok(ForceUnit::PoundForce),
            _ => Err(SkybeamError::UnknownForceUnit(s.to_string())),
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for MassUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for ForceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Decimal places used to show a length: fewer digits for larger magnitudes.
#[inline]
pub fn display_precision(value: f64) -> usize {
    if value >= 100.0 {
        0
    } else if value >= 10.0 {
        1
    } else if value >= 1.0 {
        2
    } else {
        3
    }
}

/// Formats with [`display_precision`], rounding ties away from zero.
pub fn format_length(value: f64) -> String {
    let places = display_precision(value);
    let scale = 10f64.powi(places as i32);
    format!("{:.*}", places, (value * scale).round() / scale)
}
