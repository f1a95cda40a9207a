//! Render-facing view of a session
//!
//! Holds everything a renderer needs to draw a frame without touching any
//! simulation logic.

use glam::Vec2;
use serde::Serialize;

use super::court::{CourtLines, Quad};
use super::state::{GameEvent, MoveDirection, Paddle, Score};

#[derive(Debug, Clone, Serialize)]
pub struct BallView {
    pub pos: Vec2,
    /// Where the ball's shadow falls on the court
    pub shadow: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaddleView {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub slope: f32,
    pub outline: [Vec2; 4],
    pub direction: MoveDirection,
    pub anim_counter: f32,
    pub is_ai: bool,
    /// Show the "use the arrow keys" prompt
    pub show_hint: bool,
}

impl From<&Paddle> for PaddleView {
    fn from(p: &Paddle) -> Self {
        Self {
            pos: p.pos,
            width: p.width,
            height: p.height,
            slope: p.slope,
            outline: p.outline(),
            direction: p.direction,
            anim_counter: p.anim_counter,
            is_ai: p.is_ai,
            show_hint: !p.is_ai && !p.has_moved,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub field: Vec2,
    pub court: Quad,
    pub net: Quad,
    pub net_height: f32,
    pub net_shadow: f32,
    pub lines: CourtLines,
    pub ball: BallView,
    pub player: PaddleView,
    pub opponent: PaddleView,
    pub score: Score,
    pub time_ticks: u64,
    pub events: Vec<GameEvent>,
}
