//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-order tick per frame
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod arc;
pub mod collision;
pub mod court;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use arc::{ArcProfile, ArcSegment, Heading};
pub use collision::{ball_touches_paddle, check_score, reflect_off_walls, reset_ball, resolve_paddle_hits};
pub use court::{CourtGeometry, CourtLines, Quad, Segment};
pub use snapshot::{BallView, PaddleView, Snapshot};
pub use state::{
    Ball, GameEvent, MoveDirection, Paddle, PlayerCommand, Score, Side, SimulationState,
};
pub use tick::{TickInput, tick};
