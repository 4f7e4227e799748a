use crate::color::Rgba;

// Shared tuning constants for the particle field and the beam diagram.

// Pools
pub const POOL_SIZE: usize = 100;

// Backgrounds
pub const DEEP_BACKGROUND: Rgba = Rgba::hex(0x0b0f19);
pub const STELLAR_BACKGROUND: Rgba = Rgba::hex(0x030712);

// Ambient drifters
pub const DRIFTER_REPEL_RADIUS: f32 = 180.0;
pub const DRIFTER_FORCE_DIVISOR: f32 = 60.0;
pub const DRIFTER_FORCE_MULTIPLIER: f32 = 4.0;
pub const DRIFTER_WRAP_MARGIN: f32 = 20.0;
pub const DRIFTER_FILL: Rgba = Rgba::hex(0xe2e8f0);

// Glowing stars
pub const STAR_ATTRACT_RADIUS: f32 = 200.0;
pub const STAR_PULL_FRACTION: f32 = 0.4; // share of the way toward the pointer at full force
pub const STAR_WRAP_MARGIN: f32 = 30.0;
pub const STAR_NEAR_BRIGHTNESS_GAIN: f32 = 0.7;
pub const STAR_MAX_BRIGHTNESS: f32 = 0.95;
pub const STAR_MIN_BRIGHTNESS: f32 = 0.1;
pub const STAR_SPIN_GAIN: f32 = 0.04;
pub const STAR_SPIN_DECAY: f32 = 0.94;
pub const STAR_SPIN_TRAIL_THRESHOLD: f32 = 0.03;
pub const STAR_LINE_FADE_IN: f32 = 0.12;
pub const STAR_LINE_FADE_OUT: f32 = 0.04;
pub const STAR_LINE_ALPHA: f32 = 0.6;
pub const STAR_LINE_WIDTH: f32 = 1.2;
pub const STAR_ORBIT_STEP: f32 = 0.3; // orbit angle advance per unit of speed
pub const STAR_PULSE_STEP: f32 = 0.02;
pub const STAR_PULSE_AMPLITUDE: f32 = 0.15;
pub const STAR_TWINKLE_STEP: f32 = 0.1;
pub const STAR_TWINKLE_AMPLITUDE: f32 = 0.2;
pub const STAR_MAX_DRAW_SIZE: f32 = 10.0;

// Twinkle toggling is cosmetic; values are tuned by eye.
pub const TWINKLE_INITIAL_CHANCE: f64 = 0.15;
pub const TWINKLE_ON_CHANCE_NEAR: f64 = 0.1;
pub const TWINKLE_ON_CHANCE_FAR: f64 = 0.0005;
pub const TWINKLE_OFF_CHANCE: f64 = 0.002;

pub const STAR_PALETTE: [Rgba; 5] = [
    Rgba::hex(0xffffff),
    Rgba::hex(0xffcc00),
    Rgba::hex(0xa0cfff),
    Rgba::hex(0xff9aa2),
    Rgba::hex(0xd4b8ff),
];

// Shooting stars
pub const SHOOTING_SPAWN_CHANCE: f64 = 0.002;
pub const SHOOTING_LIFE: u32 = 60;
pub const SHOOTING_START_X: f32 = -10.0;
pub const SHOOTING_EXIT_MARGIN: f32 = 20.0;
pub const SHOOTING_TAIL: f32 = 3.0; // streak length in frames of travel
pub const SHOOTING_MAX_ALPHA: f32 = 0.9;
pub const SHOOTING_MAX_WIDTH: f32 = 2.0;

// Nebula wash
pub const NEBULA_TIME_SCALE: f64 = 0.0001; // per elapsed millisecond
pub const NEBULA_RADIUS_FRACTION: f32 = 0.7;
