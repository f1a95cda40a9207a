//! Fixed-order simulation tick
//!
//! One tick per rendered frame:
//! 1. player paddle (command first, then movement)
//! 2. opponent AI
//! 3. arc lift + ball integration
//! 4. paddle hits
//! 5. wall reflections
//! 6. scoring
//!
//! Later steps always see the positions produced by earlier ones.

use super::arc::ArcProfile;
use super::collision::{check_score, reflect_off_walls, resolve_paddle_hits};
use super::state::{GameEvent, PlayerCommand, SimulationState};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Player command, applied before anything moves
    pub command: Option<PlayerCommand>,
    /// Demo mode - the player paddle tracks the ball like the opponent
    pub autopilot: bool,
}

impl TickInput {
    pub fn command(command: PlayerCommand) -> Self {
        Self {
            command: Some(command),
            ..Default::default()
        }
    }
}

/// Advance the session by one tick
pub fn tick(state: &mut SimulationState, input: &TickInput) {
    state.events.clear();

    if let Some(command) = input.command {
        state.player.apply(command);
    }
    if input.autopilot {
        state.player.auto_move(state.ball.pos.y);
    } else {
        state.player.advance();
    }

    state.opponent.auto_move(state.ball.pos.y);

    let profile = ArcProfile::new(&state.court, &state.player, &state.opponent);
    let lift = profile.offset(state.ball.pos.x, state.ball.heading());
    state.ball.update(lift);

    if let Some(side) = resolve_paddle_hits(
        &mut state.ball,
        &state.player,
        &state.opponent,
        &state.court,
        &state.tuning,
        &mut state.rng,
    ) {
        state.events.push(GameEvent::PaddleHit { side });
    }

    if reflect_off_walls(&mut state.ball, &state.court) {
        state.events.push(GameEvent::WallBounce);
    }

    if let Some(side) = check_score(&mut state.ball, &state.court, &mut state.score, &mut state.rng) {
        state.events.push(GameEvent::Scored { side });
    }

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::MoveDirection;
    use glam::Vec2;

    #[test]
    fn test_command_applies_same_tick() {
        let mut state = SimulationState::new(800.0, 400.0, 11).unwrap();
        let start = state.player.pos;
        tick(&mut state, &TickInput::command(PlayerCommand::BeginUp));
        assert_eq!(state.player.direction, MoveDirection::Up);
        assert!(state.player.pos.y < start.y);
        assert!(state.player.pos.x > start.x);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_ball_is_lifted_by_arc() {
        let mut state = SimulationState::new(800.0, 400.0, 11).unwrap();
        tick(&mut state, &TickInput::default());
        // Just right of centre heading right: close to peak lift
        let lift = state.ball.shadow_y - state.ball.pos.y;
        assert!(lift > 0.0 && lift <= state.court.max_arc + 1e-3);
    }

    #[test]
    fn test_rally_events() {
        let mut state = SimulationState::new(800.0, 400.0, 11).unwrap();
        // Park the ball in front of the opponent, moving toward it
        state.ball.pos = state.opponent.pos - Vec2::new(state.ball.vel.x, 0.0);
        state.ball.shadow_y = state.opponent.pos.y;
        state.ball.vel.y = 0.0;
        tick(&mut state, &TickInput::default());
        assert!(state.events.contains(&GameEvent::PaddleHit {
            side: crate::sim::Side::Right
        }));
        assert!(state.ball.vel.x < 0.0);

        // Events only cover the latest tick
        tick(&mut state, &TickInput::default());
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::PaddleHit { .. })));
    }

    #[test]
    fn test_wall_bounce_event() {
        let mut state = SimulationState::new(800.0, 400.0, 11).unwrap();
        // Mid-court, just inside the top sideline and still climbing
        state.ball.pos = Vec2::new(state.court.center().x, state.court.top_y() + 1.0);
        state.ball.shadow_y = state.ball.pos.y;
        state.ball.vel.y = -3.0;
        tick(&mut state, &TickInput::default());
        assert!(state.events.contains(&GameEvent::WallBounce));
        assert_eq!(state.ball.vel.y, 3.0);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::Scored { .. })));
    }

    #[test]
    fn test_autopilot_moves_player() {
        let mut state = SimulationState::new(800.0, 400.0, 11).unwrap();
        state.ball.pos.y = state.court.top_y() + 5.0;
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.player.direction, MoveDirection::Up);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut state1 = SimulationState::new(800.0, 400.0, 99999).unwrap();
        let mut state2 = SimulationState::new(800.0, 400.0, 99999).unwrap();

        let inputs = [
            TickInput::command(PlayerCommand::BeginUp),
            TickInput::default(),
            TickInput::command(PlayerCommand::BeginDown),
            TickInput::command(PlayerCommand::End),
            TickInput {
                autopilot: true,
                ..Default::default()
            },
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut state1, input);
                tick(&mut state2, input);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.ball.pos, state2.ball.pos);
        assert_eq!(state1.ball.vel, state2.ball.vel);
        assert_eq!(state1.opponent.pos, state2.opponent.pos);
    }
}
