pub mod beam;
pub mod color;
pub mod constants;
pub mod error;
pub mod field;
pub mod particles;
pub mod surface;

pub use beam::*;
pub use color::Rgba;
pub use error::{Result, SkybeamError};
pub use field::{FieldConfig, FrameHandle, FrameScheduler, ParticleField, Theme};
pub use surface::{DrawList, DrawOp, Paint, Stroke, Surface, Viewport};
