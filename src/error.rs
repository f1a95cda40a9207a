//! Setup and configuration errors
//!
//! Nothing inside a tick can fail; these only surface from session setup,
//! resizing and tuning loads.

use thiserror::Error;

use crate::sim::Side;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid field dimensions {width}x{height}")]
    InvalidDimensions { width: f32, height: f32 },

    #[error("degenerate {side:?} baseline: slope is zero or undefined")]
    DegenerateBaseline { side: Side },

    #[error("court collapsed: width between baselines is {court_width}")]
    CollapsedCourt { court_width: f32 },

    #[error("paddles overlap: player racket at x {player_x}, opponent racket at x {opponent_x}")]
    OverlappingPaddles { player_x: f32, opponent_x: f32 },

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("tuning json: {0}")]
    Json(#[from] serde_json::Error),
}
