//! Collision detection and response on the skewed court
//!
//! Paddle hits use a plain axis-aligned reach test (the paddle's slant is
//! ignored). Rebound angles are bounded by the far court corners so a fresh
//! return cannot leave the court straight away.

use glam::Vec2;
use rand::Rng;

use super::court::CourtGeometry;
use super::state::{Ball, Paddle, Score, Side};
use crate::map_range;
use crate::tuning::Tuning;

/// Whether the ball is inside a paddle's reach
pub fn ball_touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    within_reach_x(ball, paddle) && overlaps_y(ball, paddle)
}

#[inline]
fn within_reach_x(ball: &Ball, paddle: &Paddle) -> bool {
    let (min_x, max_x) = paddle.reach_x();
    ball.pos.x >= min_x && ball.pos.x <= max_x
}

#[inline]
fn overlaps_y(ball: &Ball, paddle: &Paddle) -> bool {
    let (top, bottom) = paddle.reach_y();
    ball.pos.y - ball.radius <= bottom && ball.pos.y + ball.radius >= top
}

/// Check the near paddle, then the far one, and bounce off whichever is hit.
///
/// The far paddle is only considered when the ball is outside the near
/// paddle's horizontal reach.
pub fn resolve_paddle_hits<R: Rng + ?Sized>(
    ball: &mut Ball,
    near: &Paddle,
    far: &Paddle,
    court: &CourtGeometry,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<Side> {
    let hit = if within_reach_x(ball, near) {
        overlaps_y(ball, near).then_some(near)
    } else if within_reach_x(ball, far) {
        overlaps_y(ball, far).then_some(far)
    } else {
        None
    }?;

    rebound(ball, hit, court, tuning, rng);
    log::debug!(
        "{:?} paddle hit at ({:.1}, {:.1}), vel -> ({:.3}, {:.3})",
        hit.side,
        ball.pos.x,
        ball.pos.y,
        ball.vel.x,
        ball.vel.y
    );
    Some(hit.side)
}

/// Send the ball back across the court from `paddle`
pub fn rebound<R: Rng + ?Sized>(
    ball: &mut Ball,
    paddle: &Paddle,
    court: &CourtGeometry,
    tuning: &Tuning,
    rng: &mut R,
) {
    let incoming = ball.vel.x.abs();
    ball.vel.x *= -tuning.hit_speedup;
    if let Some(cap) = tuning.max_ball_speed {
        if ball.vel.x.abs() > cap {
            // Rallies already at the cap stay there on every later hit
            if incoming < cap {
                log::warn!("Ball speed {:.3} capped at {:.3}", ball.vel.x.abs(), cap);
            } else {
                log::debug!("Ball speed held at cap {:.3}", cap);
            }
            ball.vel.x = cap.copysign(ball.vel.x);
        }
    }

    let face = paddle.racket_x();
    let (clearance, top_corner, bottom_corner) = match paddle.side {
        Side::Left => (tuning.left_hit_clearance, court.court.top_right, court.court.bottom_right),
        Side::Right => (-tuning.right_hit_clearance, court.court.top_left, court.court.bottom_left),
    };
    ball.pos.x = face + clearance;

    let (max_top, max_bottom) = rebound_slopes(paddle, face, top_corner, bottom_corner);
    let vx = ball.vel.x;
    let range = tuning.rebound_range;

    ball.vel.y = if ball.pos.y < paddle.pos.y {
        let magnitude = -rng.random_range(0.0..range);
        map_range(magnitude, -range, 0.0, vx * max_top, 0.0)
    } else {
        let magnitude = rng.random_range(0.0..range);
        map_range(magnitude, 0.0, range, 0.0, vx * max_bottom)
    };
}

/// Steepest slopes from the paddle's reach toward the far corners
fn rebound_slopes(paddle: &Paddle, face: f32, top_corner: Vec2, bottom_corner: Vec2) -> (f32, f32) {
    let (top, bottom) = paddle.reach_y();
    let max_top = (top_corner.y - top) / (top_corner.x - face);
    let max_bottom = (bottom_corner.y - bottom) / (bottom_corner.x - face);
    (max_top, max_bottom)
}

/// Reflect off the sidelines. Returns whether vy flipped.
pub fn reflect_off_walls(ball: &mut Ball, court: &CourtGeometry) -> bool {
    let mut flips = 0;
    if ball.pos.y <= court.top_y() {
        ball.vel.y = -ball.vel.y;
        flips += 1;
    }
    if ball.pos.y >= court.bottom_y() {
        ball.vel.y = -ball.vel.y;
        flips += 1;
    }
    if flips > 0 {
        log::trace!("Wall bounce at y {:.1}, vy -> {:.3}", ball.pos.y, ball.vel.y);
    }
    flips % 2 == 1
}

/// Award a point if the ball left through a baseline, then re-serve
pub fn check_score<R: Rng + ?Sized>(
    ball: &mut Ball,
    court: &CourtGeometry,
    score: &mut Score,
    rng: &mut R,
) -> Option<Side> {
    let scorer = if ball.pos.x <= court.left_out_x() {
        Side::Right
    } else if ball.pos.x >= court.right_out_x() {
        Side::Left
    } else {
        return None;
    };

    score.award(scorer);
    log::info!("Point {:?}: {} - {}", scorer, score.left, score.right);
    reset_ball(ball, court.center(), rng);
    Some(scorer)
}

/// Back to the centre at base speed, heading away from the last direction
pub fn reset_ball<R: Rng + ?Sized>(ball: &mut Ball, center: Vec2, rng: &mut R) {
    ball.pos = center;
    ball.shadow_y = center.y;
    ball.vel.x = if ball.vel.x < 0.0 {
        ball.base_speed
    } else {
        -ball.base_speed
    };
    ball.vel.y = ball.serve_vy(rng);
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::sim::SimulationState;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    proptest! {
        /// A hit always flips vx and grows it by the speed-up factor
        #[test]
        fn prop_hit_flips_and_accelerates(
            seed in any::<u64>(),
            vx in 1.0f32..20.0f32,
            dy in -40.0f32..40.0f32,
            left in any::<bool>(),
        ) {
            let mut state = SimulationState::new(800.0, 400.0, seed).unwrap();
            let mut rng = Pcg32::seed_from_u64(seed);
            let paddle = if left { state.player.clone() } else { state.opponent.clone() };
            state.ball.pos = paddle.pos + Vec2::new(0.0, dy);
            state.ball.vel = Vec2::new(if left { -vx } else { vx }, 0.5);

            rebound(&mut state.ball, &paddle, &state.court, &state.tuning, &mut rng);
            prop_assert_eq!(state.ball.vel.x > 0.0, left);
            let expected = vx * state.tuning.hit_speedup;
            prop_assert!((state.ball.vel.x.abs() - expected).abs() < 1e-3);
            prop_assert!(state.ball.vel.x.abs() > vx);
        }

        /// Reflection flips the sign of vy and keeps its size
        #[test]
        fn prop_wall_reflection_preserves_speed(
            vy in -10.0f32..10.0f32,
            top in any::<bool>(),
            past in 0.0f32..20.0f32,
        ) {
            let mut state = SimulationState::new(800.0, 400.0, 1).unwrap();
            state.ball.pos.y = if top {
                state.court.top_y() - past
            } else {
                state.court.bottom_y() + past
            };
            state.ball.vel.y = vy;
            prop_assert!(reflect_off_walls(&mut state.ball, &state.court));
            prop_assert_eq!(state.ball.vel.y, -vy);
        }
    }
}
