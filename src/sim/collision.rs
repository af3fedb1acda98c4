//! Axis-aligned collision detection
//!
//! Every entity in the game is an axis-aligned rectangle, so the whole
//! collision story is a strict-inequality AABB overlap test. Rects that
//! merely share an edge do not collide.

use glam::Vec2;

/// An axis-aligned rectangle in playfield coordinates (y grows downward,
/// `pos` is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
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

    /// Strict overlap test. Touching edges count as a miss, so a bullet
    /// resting exactly on an invader's boundary does not register.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_overlap_detected() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(9.0, 9.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_shared_edge_is_a_miss() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // b's left edge == a's right edge
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));

        // Shared horizontal edge
        let c = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_one_unit_overlap_hits() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(9.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint_is_a_miss() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(100.0, 100.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_containment_hits() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 10.0, 10.0);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }
}
