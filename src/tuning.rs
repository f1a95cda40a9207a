//! Data-driven proportions for the court and its entities
//!
//! Defaults reproduce the classic feel. A host may load a JSON override;
//! missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Court ===
    pub padding_ratio: f32,
    pub skew_ratio: f32,
    pub net_height_ratio: f32,
    pub net_shadow_ratio: f32,
    pub max_arc_ratio: f32,

    // === Ball ===
    pub ball_radius_ratio: f32,
    pub ball_speed_ratio: f32,
    pub serve_spread_ratio: f32,
    /// Cap on |vx| after a paddle hit (pixels per tick). `None` lets rallies
    /// accelerate without limit.
    pub max_ball_speed: Option<f32>,

    // === Paddles ===
    pub paddle_width_ratio: f32,
    pub paddle_speed_ratio: f32,
    pub ai_dead_band_ratio: f32,
    pub animation_speed: f32,
    pub player_offset: (f32, f32),
    pub opponent_offset: (f32, f32),

    // === Hits ===
    pub hit_speedup: f32,
    pub rebound_range: f32,
    pub left_hit_clearance: f32,
    pub right_hit_clearance: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            padding_ratio: PADDING_RATIO,
            skew_ratio: SKEW_RATIO,
            net_height_ratio: NET_HEIGHT_RATIO,
            net_shadow_ratio: NET_SHADOW_RATIO,
            max_arc_ratio: MAX_ARC_RATIO,

            ball_radius_ratio: BALL_RADIUS_RATIO,
            ball_speed_ratio: BALL_SPEED_RATIO,
            serve_spread_ratio: SERVE_SPREAD_RATIO,
            max_ball_speed: None,

            paddle_width_ratio: PADDLE_WIDTH_RATIO,
            paddle_speed_ratio: PADDLE_SPEED_RATIO,
            ai_dead_band_ratio: AI_DEAD_BAND_RATIO,
            animation_speed: ANIMATION_SPEED,
            player_offset: PLAYER_OFFSET,
            opponent_offset: OPPONENT_OFFSET,

            hit_speedup: HIT_SPEEDUP,
            rebound_range: REBOUND_RANGE,
            left_hit_clearance: LEFT_HIT_CLEARANCE,
            right_hit_clearance: RIGHT_HIT_CLEARANCE,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the motion model
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("padding_ratio", self.padding_ratio),
            ("skew_ratio", self.skew_ratio),
            ("ball_radius_ratio", self.ball_radius_ratio),
            ("ball_speed_ratio", self.ball_speed_ratio),
            ("serve_spread_ratio", self.serve_spread_ratio),
            ("paddle_width_ratio", self.paddle_width_ratio),
            ("paddle_speed_ratio", self.paddle_speed_ratio),
            ("rebound_range", self.rebound_range),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimError::InvalidTuning(format!("{name} must be positive, got {value}")));
            }
        }

        // A negative clearance would leave the ball inside the racket's reach
        let non_negative = [
            ("net_height_ratio", self.net_height_ratio),
            ("net_shadow_ratio", self.net_shadow_ratio),
            ("max_arc_ratio", self.max_arc_ratio),
            ("ai_dead_band_ratio", self.ai_dead_band_ratio),
            ("animation_speed", self.animation_speed),
            ("left_hit_clearance", self.left_hit_clearance),
            ("right_hit_clearance", self.right_hit_clearance),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SimError::InvalidTuning(format!(
                    "{name} must be zero or more, got {value}"
                )));
            }
        }

        for (name, (x, y)) in [
            ("player_offset", self.player_offset),
            ("opponent_offset", self.opponent_offset),
        ] {
            if !x.is_finite() || !y.is_finite() {
                return Err(SimError::InvalidTuning(format!("{name} must be finite, got ({x}, {y})")));
            }
        }

        // Each side loses one padding vertically
        if self.padding_ratio >= 0.5 {
            return Err(SimError::InvalidTuning(format!(
                "padding_ratio must be below 0.5, got {}",
                self.padding_ratio
            )));
        }

        if !self.hit_speedup.is_finite() || self.hit_speedup < 1.0 {
            return Err(SimError::InvalidTuning(format!(
                "hit_speedup must be at least 1.0, got {}",
                self.hit_speedup
            )));
        }

        if let Some(cap) = self.max_ball_speed {
            if !cap.is_finite() || cap <= 0.0 {
                return Err(SimError::InvalidTuning(format!(
                    "max_ball_speed must be positive, got {cap}"
                )));
            }
        }

        Ok(())
    }
}
