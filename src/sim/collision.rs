//! Collision detection for axis-aligned boxes
//!
//! Everything in the world (player and platforms) is an upright rectangle in
//! world coordinates, so one overlap test covers all contacts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left corner + size, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Horizontal center
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// Check whether two rectangles overlap with positive area
///
/// Comparisons are strict: rectangles that only share an edge do not collide.
/// A player resting exactly on a platform top therefore does not overlap it.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_detected() {
        let a = Rect::new(0.0, 0.0, 50.0, 80.0);
        let b = Rect::new(40.0, 70.0, 100.0, 20.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let player = Rect::new(10.0, 700.0, 50.0, 80.0);
        // Platform top exactly at the player's feet
        let floor = Rect::new(0.0, 780.0, 600.0, 20.0);
        assert!(!overlaps(&player, &floor));

        // Side by side
        let left = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&left, &right));
    }

    #[test]
    fn test_separated_on_one_axis_misses() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        // Overlaps horizontally, far away vertically
        let b = Rect::new(10.0, 200.0, 50.0, 50.0);
        assert!(!overlaps(&a, &b));
        // Overlaps vertically, far away horizontally
        let c = Rect::new(300.0, 10.0, 50.0, 50.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_containment_counts_as_overlap() {
        let outer = Rect::new(0.0, 0.0, 600.0, 20.0);
        let inner = Rect::new(100.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&outer, &inner));
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center_x(), 25.0);
    }
}
