//! Skewed court and net geometry
//!
//! The court is a parallelogram-like quadrilateral: left and right baselines
//! lean by `quad_offset`, so "up" on either baseline also means "right".
//! Everything here is derived from the field size and is recomputed only
//! when the field is resized.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Side;
use crate::consts::{CENTER_MARK_RATIO, SINGLES_INSET};
use crate::error::SimError;
use crate::tuning::Tuning;

/// Four corners of a skewed quadrilateral
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quad {
    pub top_left: Vec2,
    pub bottom_left: Vec2,
    pub bottom_right: Vec2,
    pub top_right: Vec2,
}

impl Quad {
    /// Corners in drawing order (TL, BL, BR, TR)
    pub fn corners(&self) -> [Vec2; 4] {
        [self.top_left, self.bottom_left, self.bottom_right, self.top_right]
    }
}

/// A straight court marking
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            start: Vec2::new(x1, y1),
            end: Vec2::new(x2, y2),
        }
    }
}

/// Painted lines on the court surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtLines {
    /// Centre line between the two quarter points
    pub center: Segment,
    /// Centre notch on the left baseline
    pub left_mark: Segment,
    /// Centre notch on the right baseline
    pub right_mark: Segment,
    pub top_singles: Segment,
    pub bottom_singles: Segment,
    pub left_service: Segment,
    pub right_service: Segment,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CourtGeometry {
    /// Playing field size (width, height)
    pub field: Vec2,
    pub padding: f32,
    /// Horizontal lean of each baseline
    pub quad_offset: f32,
    pub court: Quad,
    pub net: Quad,
    /// Net height in pixels
    pub net_height: f32,
    /// Width of the net's drop shadow
    pub net_shadow: f32,
    /// Width between the baselines measured along the centreline
    pub court_width: f32,
    pub court_height: f32,
    /// Centreline quarter point on the left half
    pub one_fourth_x: f32,
    /// Centreline quarter point on the right half
    pub three_fourths_x: f32,
    /// Peak arc lift
    pub max_arc: f32,
}

impl CourtGeometry {
    /// Geometry for a field using the default proportions
    pub fn compute(field_width: f32, field_height: f32) -> Self {
        Self::compute_with(field_width, field_height, &Tuning::default())
    }

    pub fn compute_with(field_width: f32, field_height: f32, tuning: &Tuning) -> Self {
        let (w, h) = (field_width, field_height);
        let padding = h * tuning.padding_ratio;
        let quad_offset = w * tuning.skew_ratio;

        let court = Quad {
            top_left: Vec2::new(padding + quad_offset, padding),
            bottom_left: Vec2::new(padding, h - padding),
            bottom_right: Vec2::new(w - padding - quad_offset, h - padding),
            top_right: Vec2::new(w - padding, padding),
        };

        let net_height = h * tuning.net_height_ratio;
        let mid = w * 0.5;
        let net = Quad {
            top_left: Vec2::new(mid + quad_offset * 0.5, padding - net_height),
            bottom_left: Vec2::new(mid - quad_offset * 0.5, h - padding - net_height),
            bottom_right: Vec2::new(mid - quad_offset * 0.5, h - padding),
            top_right: Vec2::new(mid + quad_offset * 0.5, padding),
        };

        let court_width = w - 2.0 * padding - quad_offset;
        let court_height = h - 2.0 * padding;

        Self {
            field: Vec2::new(w, h),
            padding,
            quad_offset,
            court,
            net,
            net_height,
            net_shadow: w * tuning.net_shadow_ratio,
            court_width,
            court_height,
            one_fourth_x: court.bottom_left.x + quad_offset * 0.5 + court_width * 0.25,
            three_fourths_x: court.top_right.x - quad_offset * 0.5 - court_width * 0.25,
            max_arc: h * tuning.max_arc_ratio,
        }
    }

    /// Check the geometry can host a rally
    pub fn validate(&self) -> Result<(), SimError> {
        for side in [Side::Left, Side::Right] {
            let slope = self.baseline_slope(side);
            if !slope.is_finite() || slope == 0.0 {
                return Err(SimError::DegenerateBaseline { side });
            }
        }
        if !(self.court_width > 0.0) {
            return Err(SimError::CollapsedCourt {
                court_width: self.court_width,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.field * 0.5
    }

    /// Rise over run of a baseline (negative: the court leans right)
    pub fn baseline_slope(&self, side: Side) -> f32 {
        let c = &self.court;
        match side {
            Side::Left => (c.bottom_left.y - c.top_left.y) / (c.bottom_left.x - c.top_left.x),
            Side::Right => (c.top_right.y - c.bottom_right.y) / (c.top_right.x - c.bottom_right.x),
        }
    }

    /// Upper sideline y (ball reflects at or above this)
    #[inline]
    pub fn top_y(&self) -> f32 {
        self.court.top_left.y
    }

    /// Lower sideline y
    #[inline]
    pub fn bottom_y(&self) -> f32 {
        self.court.bottom_left.y
    }

    /// Leftmost court x; crossing it scores for the right side
    #[inline]
    pub fn left_out_x(&self) -> f32 {
        self.court.bottom_left.x
    }

    /// Rightmost court x; crossing it scores for the left side
    #[inline]
    pub fn right_out_x(&self) -> f32 {
        self.court.top_right.x
    }

    pub fn lines(&self) -> CourtLines {
        let (w, h) = (self.field.x, self.field.y);
        let p = self.padding;
        let q = self.quad_offset;
        let quarter = self.court_width * 0.25;

        let top_y = p + SINGLES_INSET * self.court_height;
        let top_x1 = p + (1.0 - SINGLES_INSET) * q;
        let top_x2 = w - p - SINGLES_INSET * q;

        let bottom_y = p + (1.0 - SINGLES_INSET) * self.court_height;
        let bottom_x1 = p + SINGLES_INSET * q;
        let bottom_x2 = w - p - (1.0 - SINGLES_INSET) * q;

        let mark = w * CENTER_MARK_RATIO;
        let left_x = self.court.bottom_left.x + q * 0.5;
        let right_x = self.court.top_right.x - q * 0.5;

        CourtLines {
            center: Segment::new(self.one_fourth_x, h * 0.5, self.three_fourths_x, h * 0.5),
            left_mark: Segment::new(left_x, h * 0.5, left_x + mark, h * 0.5),
            right_mark: Segment::new(right_x - mark, h * 0.5, right_x, h * 0.5),
            top_singles: Segment::new(top_x1, top_y, top_x2, top_y),
            bottom_singles: Segment::new(bottom_x1, bottom_y, bottom_x2, bottom_y),
            left_service: Segment::new(bottom_x1 + quarter, bottom_y, top_x1 + quarter, top_y),
            right_service: Segment::new(bottom_x2 - quarter, bottom_y, top_x2 - quarter, top_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_court_corners_800x400() {
        let g = CourtGeometry::compute(800.0, 400.0);
        assert_eq!(g.padding, 50.0);
        assert_eq!(g.quad_offset, 100.0);
        assert_eq!(g.court.top_left, Vec2::new(150.0, 50.0));
        assert_eq!(g.court.bottom_left, Vec2::new(50.0, 350.0));
        assert_eq!(g.court.bottom_right, Vec2::new(650.0, 350.0));
        assert_eq!(g.court.top_right, Vec2::new(750.0, 50.0));
        assert_eq!(g.court.corners()[1], g.court.bottom_left);
    }

    #[test]
    fn test_net_and_quarter_points() {
        let g = CourtGeometry::compute(800.0, 400.0);
        assert_eq!(g.net.top_left, Vec2::new(450.0, 0.0));
        assert_eq!(g.net.bottom_left, Vec2::new(350.0, 300.0));
        assert_eq!(g.net.bottom_right, Vec2::new(350.0, 350.0));
        assert_eq!(g.net.top_right, Vec2::new(450.0, 50.0));

        assert_eq!(g.court_width, 600.0);
        assert_eq!(g.one_fourth_x, 250.0);
        assert_eq!(g.three_fourths_x, 550.0);
        assert_eq!(g.max_arc, 25.0);
        assert_eq!(g.center(), Vec2::new(400.0, 200.0));
    }

    #[test]
    fn test_baselines_lean_the_same_way() {
        let g = CourtGeometry::compute(800.0, 400.0);
        assert_eq!(g.baseline_slope(Side::Left), -3.0);
        assert_eq!(g.baseline_slope(Side::Right), -3.0);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn test_center_line_spans_quarter_points() {
        let g = CourtGeometry::compute(800.0, 400.0);
        let lines = g.lines();
        assert_eq!(lines.center.start, Vec2::new(250.0, 200.0));
        assert_eq!(lines.center.end, Vec2::new(550.0, 200.0));
        assert_eq!(lines.left_mark.start.x, 100.0);
        assert_eq!(lines.right_mark.end.x, 700.0);
        // Singles lines sit inside the sidelines
        assert!(lines.top_singles.start.y > g.top_y());
        assert!(lines.bottom_singles.start.y < g.bottom_y());
    }

    #[test]
    fn test_tall_field_collapses_court() {
        // Width too small for the padding on both ends plus the skew
        let g = CourtGeometry::compute(100.0, 400.0);
        assert!(matches!(g.validate(), Err(SimError::CollapsedCourt { .. })));
    }

    #[test]
    fn test_unskewed_court_has_vertical_baselines() {
        let tuning = Tuning {
            skew_ratio: 0.0,
            ..Default::default()
        };
        let g = CourtGeometry::compute_with(800.0, 400.0, &tuning);
        assert!(g.baseline_slope(Side::Left).is_infinite());
        assert!(matches!(
            g.validate(),
            Err(SimError::DegenerateBaseline { side: Side::Left })
        ));
    }
}
