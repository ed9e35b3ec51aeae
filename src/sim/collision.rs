//! Collision checks between the ball circle, screen edge segments, and
//! paddle rectangles
//!
//! Everything is an overlap test; response (sign-flipping a velocity
//! component) is the caller's concern.

use glam::Vec2;

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Closest point inside the rectangle to `point`
    #[inline]
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.pos, self.pos + self.size)
    }
}

/// Circle vs. line segment overlap
///
/// True when the closest point on segment `a`-`b` lies within `radius` of
/// `center`. A degenerate segment collapses to a point test.
pub fn circle_overlaps_segment(center: Vec2, radius: f32, a: Vec2, b: Vec2) -> bool {
    let seg = b - a;
    let len_sq = seg.length_squared();

    let closest = if len_sq <= f32::EPSILON {
        a
    } else {
        let t = ((center - a).dot(seg) / len_sq).clamp(0.0, 1.0);
        a + seg * t
    };

    center.distance_squared(closest) <= radius * radius
}

/// Circle vs. axis-aligned rectangle overlap
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.distance_squared(rect.closest_point(center)) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_segment_hit_midspan() {
        // Horizontal segment along y = 0, ball hanging 20 below
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1200.0, 0.0);
        assert!(circle_overlaps_segment(Vec2::new(600.0, 20.0), 25.0, a, b));
    }

    #[test]
    fn test_circle_segment_miss() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(1200.0, 0.0);
        assert!(!circle_overlaps_segment(Vec2::new(600.0, 26.0), 25.0, a, b));
    }

    #[test]
    fn test_circle_segment_clamps_to_endpoint() {
        // Ball past the end of the segment; closest point is the endpoint
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(100.0, 0.0);
        assert!(circle_overlaps_segment(Vec2::new(110.0, 0.0), 25.0, a, b));
        assert!(!circle_overlaps_segment(Vec2::new(130.0, 0.0), 25.0, a, b));
    }

    #[test]
    fn test_circle_segment_degenerate() {
        let p = Vec2::new(10.0, 10.0);
        assert!(circle_overlaps_segment(Vec2::new(10.0, 20.0), 15.0, p, p));
        assert!(!circle_overlaps_segment(Vec2::new(10.0, 40.0), 15.0, p, p));
    }

    #[test]
    fn test_circle_rect_hit_from_side() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(62.5, 250.0));
        // Ball center 15 left of the rect's left edge
        assert!(circle_overlaps_rect(Vec2::new(85.0, 200.0), 25.0, &rect));
    }

    #[test]
    fn test_circle_rect_center_inside() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(62.5, 250.0));
        assert!(circle_overlaps_rect(Vec2::new(120.0, 200.0), 25.0, &rect));
    }

    #[test]
    fn test_circle_rect_miss_diagonal() {
        let rect = Rect::new(Vec2::new(100.0, 100.0), Vec2::new(62.5, 250.0));
        // Closest corner is (100, 100); distance is ~28.3
        assert!(!circle_overlaps_rect(Vec2::new(80.0, 80.0), 25.0, &rect));
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0));
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }
}
