//! Slant Tennis - A perspective tennis rally on a skewed court
//!
//! Core modules:
//! - `sim`: Deterministic simulation (court geometry, arc model, collisions, scoring)
//! - `input`: Key mapping and command delivery for the player paddle
//! - `tuning`: Data-driven proportions for the court and entities
//! - `error`: Setup and configuration errors

pub mod error;
pub mod input;
pub mod sim;
pub mod tuning;

pub use error::SimError;
pub use tuning::Tuning;

/// Default proportions (all relative to the playing field unless noted)
pub mod consts {
    /// Court padding as a fraction of field height
    pub const PADDING_RATIO: f32 = 0.125;
    /// Baseline skew as a fraction of field width
    pub const SKEW_RATIO: f32 = 0.125;
    /// Net height as a fraction of field height
    pub const NET_HEIGHT_RATIO: f32 = 0.125;
    /// Net shadow width as a fraction of field width
    pub const NET_SHADOW_RATIO: f32 = 0.021;
    /// Maximum arc lift as a fraction of field height
    pub const MAX_ARC_RATIO: f32 = 0.0625;
    /// Singles sideline inset as a fraction of court height / skew
    pub const SINGLES_INSET: f32 = 0.125;
    /// Centre notch length as a fraction of field width
    pub const CENTER_MARK_RATIO: f32 = 1.0 / 64.0;

    /// Ball radius as a fraction of field width
    pub const BALL_RADIUS_RATIO: f32 = 0.021;
    /// Serve speed as a fraction of ball radius (pixels per tick)
    pub const BALL_SPEED_RATIO: f32 = 0.21;
    /// Serve vertical spread as a fraction of ball radius (symmetric)
    pub const SERVE_SPREAD_RATIO: f32 = 0.084;

    /// Paddle width as a fraction of field width (height is twice this)
    pub const PADDLE_WIDTH_RATIO: f32 = 0.03;
    /// Paddle speed as a fraction of paddle height (pixels per tick)
    pub const PADDLE_SPEED_RATIO: f32 = 0.05;
    /// AI dead-band as a fraction of paddle height
    pub const AI_DEAD_BAND_RATIO: f32 = 0.5;
    /// Animation counter advance per moving tick
    pub const ANIMATION_SPEED: f32 = 0.1;

    /// Horizontal speed multiplier applied on every paddle hit
    pub const HIT_SPEEDUP: f32 = 1.03;
    /// Upper end of the rebound magnitude draw ([0, range))
    pub const REBOUND_RANGE: f32 = 4.0;
    /// Gap left between the left paddle face and the ball after a hit (pixels)
    pub const LEFT_HIT_CLEARANCE: f32 = 5.0;
    /// Gap left between the right paddle face and the ball after a hit (pixels)
    pub const RIGHT_HIT_CLEARANCE: f32 = 4.0;

    /// Player start offset from the bottom-left court corner (pixels)
    pub const PLAYER_OFFSET: (f32, f32) = (30.0, -60.0);
    /// Opponent start offset from the top-right court corner (pixels)
    pub const OPPONENT_OFFSET: (f32, f32) = (-70.0, 60.0);
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Re-map `value` from `[in_min, in_max]` onto `[out_min, out_max]`
///
/// Not clamped: values outside the input range extrapolate linearly.
/// A collapsed input range maps everything to `out_min`.
#[inline]
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span.abs() <= f32::EPSILON {
        return out_min;
    }
    lerp(out_min, out_max, (value - in_min) / span)
}
