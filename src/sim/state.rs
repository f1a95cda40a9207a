//! Game state and core simulation types
//!
//! The whole session lives in one `SimulationState` value owned by the host
//! loop. Only `tick` mutates it; renderers read a `Snapshot`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arc::Heading;
use super::court::CourtGeometry;
use super::snapshot::{BallView, PaddleView, Snapshot};
use crate::error::SimError;
use crate::tuning::Tuning;

/// Which end of the court
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Paddle movement intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveDirection {
    Up,
    Down,
    #[default]
    None,
}

/// Discrete command from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerCommand {
    BeginUp,
    BeginDown,
    End,
}

impl PlayerCommand {
    /// Parse a textual command. Unknown strings yield `None` and are ignored.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "up" | "begin_up" | "beginup" => Some(PlayerCommand::BeginUp),
            "down" | "begin_down" | "begindown" => Some(PlayerCommand::BeginDown),
            "end" | "stop" | "none" => Some(PlayerCommand::End),
            _ => None,
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Rendered position (shadow minus arc lift)
    pub pos: Vec2,
    /// Integrated vertical position before the arc is applied
    pub shadow_y: f32,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
    /// |vx| restored on every serve
    pub base_speed: f32,
    /// Serve vy is drawn from (-serve_spread, serve_spread)
    pub serve_spread: f32,
}

impl Ball {
    /// A ball at `center` heading right at base speed
    pub fn new<R: Rng + ?Sized>(
        center: Vec2,
        radius: f32,
        base_speed: f32,
        serve_spread: f32,
        rng: &mut R,
    ) -> Self {
        let mut ball = Self {
            pos: center,
            shadow_y: center.y,
            vel: Vec2::new(base_speed, 0.0),
            radius,
            base_speed,
            serve_spread,
        };
        ball.vel.y = ball.serve_vy(rng);
        ball
    }

    /// Advance one tick, lifting the rendered position by `lift`
    pub fn update(&mut self, lift: f32) {
        self.pos.x += self.vel.x;
        self.shadow_y += self.vel.y;
        self.pos.y = self.shadow_y - lift;
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        Heading::from_vx(self.vel.x)
    }

    /// Fresh vertical serve speed
    pub fn serve_vy<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.random_range(-self.serve_spread..self.serve_spread)
    }
}

/// A racket-holding player sliding along a slanted baseline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Foot position on the baseline
    pub pos: Vec2,
    pub top_bound: f32,
    pub bottom_bound: f32,
    /// Baseline tilt; every vertical step drifts x by step / slope
    pub slope: f32,
    pub width: f32,
    pub height: f32,
    /// Pixels per tick
    pub speed: f32,
    pub direction: MoveDirection,
    pub side: Side,
    pub is_ai: bool,
    /// Vertical tolerance before the AI reacts
    pub dead_band: f32,
    /// Set once the paddle has been told to move
    pub has_moved: bool,
    /// Sprite animation counter (advances only while moving)
    pub anim_counter: f32,
    pub anim_speed: f32,
}

impl Paddle {
    /// Paddle for `side` of `court`, offset from that side's setup corner
    pub fn for_side(court: &CourtGeometry, side: Side, is_ai: bool, tuning: &Tuning) -> Self {
        let (corner, offset) = match side {
            Side::Left => (court.court.bottom_left, tuning.player_offset),
            Side::Right => (court.court.top_right, tuning.opponent_offset),
        };
        let top_bound = court.top_y();
        let bottom_bound = court.bottom_y();

        let width = court.field.x * tuning.paddle_width_ratio;
        let height = width * 2.0;
        let mut pos = corner + Vec2::new(offset.0, offset.1);
        let y = pos.y.clamp(top_bound, bottom_bound);
        if y != pos.y {
            // The pixel offset overshoots a small court: stand on the baseline
            pos = Vec2::new(corner.x + (y - corner.y) / court.baseline_slope(side), y);
        }

        Self {
            pos,
            top_bound,
            bottom_bound,
            slope: -court.baseline_slope(side),
            width,
            height,
            speed: height * tuning.paddle_speed_ratio,
            direction: MoveDirection::None,
            side,
            is_ai,
            dead_band: height * tuning.ai_dead_band_ratio,
            has_moved: false,
            anim_counter: 0.0,
            anim_speed: tuning.animation_speed,
        }
    }

    /// Start moving (player input)
    pub fn begin(&mut self, direction: MoveDirection) {
        self.direction = direction;
        if direction != MoveDirection::None {
            self.has_moved = true;
        }
    }

    /// Stop moving (player input)
    pub fn end(&mut self) {
        self.direction = MoveDirection::None;
    }

    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::BeginUp => self.begin(MoveDirection::Up),
            PlayerCommand::BeginDown => self.begin(MoveDirection::Down),
            PlayerCommand::End => self.end(),
        }
    }

    /// Slide one step along the baseline in the current direction.
    ///
    /// The step is skipped entirely if it would leave `[top_bound, bottom_bound]`.
    /// Returns whether the paddle moved.
    pub fn advance(&mut self) -> bool {
        let dy = match self.direction {
            MoveDirection::Up => -self.speed,
            MoveDirection::Down => self.speed,
            MoveDirection::None => return false,
        };

        let next_y = self.pos.y + dy;
        if next_y < self.top_bound || next_y > self.bottom_bound {
            return false;
        }

        self.pos.y = next_y;
        self.pos.x -= dy / self.slope;
        self.anim_counter += self.anim_speed;
        true
    }

    /// Pick a direction toward `ball_y` (with dead-band), then move
    pub fn auto_move(&mut self, ball_y: f32) -> bool {
        let diff = self.pos.y - ball_y;
        let direction = if diff < 0.0 && -diff > self.dead_band {
            MoveDirection::Down
        } else if diff > 0.0 && diff > self.dead_band {
            MoveDirection::Up
        } else {
            MoveDirection::None
        };
        self.begin(direction);
        self.advance()
    }

    /// x of the racket face that meets the ball
    #[inline]
    pub fn racket_x(&self) -> f32 {
        match self.side {
            Side::Left => self.pos.x + self.width,
            Side::Right => self.pos.x - self.width,
        }
    }

    /// Horizontal reach `[x - width, x + width]`
    #[inline]
    pub fn reach_x(&self) -> (f32, f32) {
        (self.pos.x - self.width, self.pos.x + self.width)
    }

    /// Vertical reach `[y - height, y + height]`
    #[inline]
    pub fn reach_y(&self) -> (f32, f32) {
        (self.pos.y - self.height, self.pos.y + self.height)
    }

    /// Slanted quad for sprite-less rendering
    pub fn outline(&self) -> [Vec2; 4] {
        let top = Vec2::new(self.pos.x + self.height / self.slope, self.pos.y - self.height);
        [
            self.pos,
            top,
            top + Vec2::new(self.width, 0.0),
            self.pos + Vec2::new(self.width, 0.0),
        ]
    }

    /// Current sprite frame out of `frames`
    pub fn frame_index(&self, frames: usize) -> usize {
        if frames == 0 {
            return 0;
        }
        (self.anim_counter.floor() as usize) % frames
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Something notable that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PaddleHit { side: Side },
    WallBounce,
    Scored { side: Side },
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub seed: u64,
    pub tuning: Tuning,
    pub court: CourtGeometry,
    /// Human paddle (left)
    pub player: Paddle,
    /// Computer paddle (right)
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    pub rng: Pcg32,
}

impl SimulationState {
    /// New session on a `width` x `height` field with default tuning
    pub fn new(width: f32, height: f32, seed: u64) -> Result<Self, SimError> {
        Self::with_tuning(width, height, seed, Tuning::default())
    }

    pub fn with_tuning(width: f32, height: f32, seed: u64, tuning: Tuning) -> Result<Self, SimError> {
        tuning.validate()?;
        let court = checked_court(width, height, &tuning)?;
        let mut rng = Pcg32::seed_from_u64(seed);

        let player = Paddle::for_side(&court, Side::Left, false, &tuning);
        let opponent = Paddle::for_side(&court, Side::Right, true, &tuning);
        check_paddle_order(&player, &opponent)?;
        let ball = new_ball(&court, &tuning, &mut rng);

        log::info!(
            "Session {}x{} (seed {}): court x {}..{}, y {}..{}",
            width,
            height,
            seed,
            court.left_out_x(),
            court.right_out_x(),
            court.top_y(),
            court.bottom_y()
        );

        Ok(Self {
            seed,
            tuning,
            court,
            player,
            opponent,
            ball,
            score: Score::default(),
            time_ticks: 0,
            events: Vec::new(),
            rng,
        })
    }

    /// Re-derive geometry and entities for a new field size, keeping the score
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), SimError> {
        let court = checked_court(width, height, &self.tuning)?;
        let mut player = Paddle::for_side(&court, Side::Left, self.player.is_ai, &self.tuning);
        let opponent = Paddle::for_side(&court, Side::Right, self.opponent.is_ai, &self.tuning);
        check_paddle_order(&player, &opponent)?;
        log::info!("Resize {}x{} -> {}x{}", self.court.field.x, self.court.field.y, width, height);

        player.has_moved = self.player.has_moved;
        self.player = player;
        self.opponent = opponent;
        self.ball = new_ball(&court, &self.tuning, &mut self.rng);
        self.court = court;
        self.events.clear();
        Ok(())
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.player,
            Side::Right => &self.opponent,
        }
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            field: self.court.field,
            court: self.court.court,
            net: self.court.net,
            net_height: self.court.net_height,
            net_shadow: self.court.net_shadow,
            lines: self.court.lines(),
            ball: BallView {
                pos: self.ball.pos,
                shadow: Vec2::new(self.ball.pos.x, self.ball.shadow_y),
                radius: self.ball.radius,
            },
            player: PaddleView::from(&self.player),
            opponent: PaddleView::from(&self.opponent),
            score: self.score,
            time_ticks: self.time_ticks,
            events: self.events.clone(),
        }
    }
}

fn checked_court(width: f32, height: f32, tuning: &Tuning) -> Result<CourtGeometry, SimError> {
    if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
        return Err(SimError::InvalidDimensions { width, height });
    }
    let court = CourtGeometry::compute_with(width, height, tuning);
    court.validate()?;
    Ok(court)
}

/// Rackets must face each other across the net
fn check_paddle_order(player: &Paddle, opponent: &Paddle) -> Result<(), SimError> {
    let (player_x, opponent_x) = (player.racket_x(), opponent.racket_x());
    if !(player_x < opponent_x) {
        return Err(SimError::OverlappingPaddles { player_x, opponent_x });
    }
    Ok(())
}

fn new_ball<R: Rng + ?Sized>(court: &CourtGeometry, tuning: &Tuning, rng: &mut R) -> Ball {
    let radius = court.field.x * tuning.ball_radius_ratio;
    Ball::new(
        court.center(),
        radius,
        radius * tuning.ball_speed_ratio,
        radius * tuning.serve_spread_ratio,
        rng,
    )
}
