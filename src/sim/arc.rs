//! Bounce arc model
//!
//! The ball has no vertical physics. Its apparent height above the court is a
//! piecewise-linear function of x that depends on which way it is heading:
//! - climb: from the hitting racket to mid-court, half lift rising to full lift
//! - descent: from mid-court to the far quarter point, full lift falling to zero
//! - approach: from the far quarter point to the receiving racket, zero back to half
//!
//! Heading left mirrors the zones around mid-court.

use serde::{Deserialize, Serialize};

use super::court::CourtGeometry;
use super::state::Paddle;
use crate::map_range;

/// Horizontal direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Right,
    Left,
}

impl Heading {
    /// Anything not moving right counts as heading left
    #[inline]
    pub fn from_vx(vx: f32) -> Self {
        if vx > 0.0 { Heading::Right } else { Heading::Left }
    }
}

/// One linear piece of the arc
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArcSegment {
    Climb,
    Descent,
    Approach,
}

/// Reference x positions for one tick's arc evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcProfile {
    /// Face of the left racket (x + width)
    pub left_racket_x: f32,
    /// Face of the right racket (x - width)
    pub right_racket_x: f32,
    pub mid_x: f32,
    pub one_fourth_x: f32,
    pub three_fourths_x: f32,
    pub max_height: f32,
}

impl ArcProfile {
    /// Profile from the court and the rackets' current positions
    pub fn new(court: &CourtGeometry, left: &Paddle, right: &Paddle) -> Self {
        Self {
            left_racket_x: left.racket_x(),
            right_racket_x: right.racket_x(),
            mid_x: court.center().x,
            one_fourth_x: court.one_fourth_x,
            three_fourths_x: court.three_fourths_x,
            max_height: court.max_arc,
        }
    }

    /// Lift to subtract from the shadow position at `x`
    pub fn offset(&self, x: f32, heading: Heading) -> f32 {
        ArcSegment::select(self, x, heading).evaluate(self, x, heading)
    }
}

impl ArcSegment {
    /// Which piece applies at `x`
    pub fn select(profile: &ArcProfile, x: f32, heading: Heading) -> Self {
        match heading {
            Heading::Right => {
                if x <= profile.mid_x {
                    ArcSegment::Climb
                } else if x <= profile.three_fourths_x {
                    ArcSegment::Descent
                } else {
                    ArcSegment::Approach
                }
            }
            Heading::Left => {
                if x >= profile.mid_x {
                    ArcSegment::Climb
                } else if x >= profile.one_fourth_x {
                    ArcSegment::Descent
                } else {
                    ArcSegment::Approach
                }
            }
        }
    }

    /// Evaluate this piece at `x`, regardless of whether `x` lies inside it
    pub fn evaluate(self, profile: &ArcProfile, x: f32, heading: Heading) -> f32 {
        let max = profile.max_height;
        let half = max * 0.5;

        let (from_racket, to_racket, far_quarter) = match heading {
            Heading::Right => (profile.left_racket_x, profile.right_racket_x, profile.three_fourths_x),
            Heading::Left => (profile.right_racket_x, profile.left_racket_x, profile.one_fourth_x),
        };

        match self {
            ArcSegment::Climb => map_range(x, from_racket, profile.mid_x, half, max),
            ArcSegment::Descent => map_range(x, profile.mid_x, far_quarter, max, 0.0),
            ArcSegment::Approach => map_range(x, far_quarter, to_racket, 0.0, half),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ArcProfile {
        ArcProfile {
            left_racket_x: 104.0,
            right_racket_x: 656.0,
            mid_x: 400.0,
            one_fourth_x: 250.0,
            three_fourths_x: 550.0,
            max_height: 25.0,
        }
    }

    #[test]
    fn test_heading_from_vx() {
        assert_eq!(Heading::from_vx(1.0), Heading::Right);
        assert_eq!(Heading::from_vx(-1.0), Heading::Left);
        assert_eq!(Heading::from_vx(0.0), Heading::Left);
    }

    #[test]
    fn test_segment_selection_right() {
        let p = profile();
        assert_eq!(ArcSegment::select(&p, 300.0, Heading::Right), ArcSegment::Climb);
        assert_eq!(ArcSegment::select(&p, 400.0, Heading::Right), ArcSegment::Climb);
        assert_eq!(ArcSegment::select(&p, 500.0, Heading::Right), ArcSegment::Descent);
        assert_eq!(ArcSegment::select(&p, 600.0, Heading::Right), ArcSegment::Approach);
    }

    #[test]
    fn test_segment_selection_left() {
        let p = profile();
        assert_eq!(ArcSegment::select(&p, 500.0, Heading::Left), ArcSegment::Climb);
        assert_eq!(ArcSegment::select(&p, 300.0, Heading::Left), ArcSegment::Descent);
        assert_eq!(ArcSegment::select(&p, 250.0, Heading::Left), ArcSegment::Descent);
        assert_eq!(ArcSegment::select(&p, 200.0, Heading::Left), ArcSegment::Approach);
    }

    #[test]
    fn test_lift_at_rackets_and_peak() {
        let p = profile();
        assert!((p.offset(104.0, Heading::Right) - 12.5).abs() < 1e-4);
        assert!((p.offset(400.0, Heading::Right) - 25.0).abs() < 1e-4);
        assert!((p.offset(550.0, Heading::Right)).abs() < 1e-4);
        assert!((p.offset(656.0, Heading::Right) - 12.5).abs() < 1e-4);

        assert!((p.offset(656.0, Heading::Left) - 12.5).abs() < 1e-4);
        assert!((p.offset(250.0, Heading::Left)).abs() < 1e-4);
        assert!((p.offset(104.0, Heading::Left) - 12.5).abs() < 1e-4);
    }

    #[test]
    fn test_continuous_at_boundaries() {
        let p = profile();
        for heading in [Heading::Right, Heading::Left] {
            let quarter = match heading {
                Heading::Right => p.three_fourths_x,
                Heading::Left => p.one_fourth_x,
            };
            let climb = ArcSegment::Climb.evaluate(&p, p.mid_x, heading);
            let descent = ArcSegment::Descent.evaluate(&p, p.mid_x, heading);
            assert!((climb - descent).abs() < 1e-4, "{heading:?} mid-court");

            let descent = ArcSegment::Descent.evaluate(&p, quarter, heading);
            let approach = ArcSegment::Approach.evaluate(&p, quarter, heading);
            assert!((descent - approach).abs() < 1e-4, "{heading:?} quarter point");
        }
    }

    #[test]
    fn test_collapsed_zone_does_not_blow_up() {
        let mut p = profile();
        p.right_racket_x = p.three_fourths_x;
        let lift = p.offset(600.0, Heading::Right);
        assert!(lift.is_finite());
    }
}
