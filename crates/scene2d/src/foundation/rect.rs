//! Axis-aligned rectangle type for 2D bounding geometry

use crate::foundation::math::Vec2;

/// Axis-aligned rectangle with floating-point coordinates
///
/// `(x, y)` is the top-left corner; `width` and `height` extend
/// toward positive X and Y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectangleF {
    /// X coordinate of the left edge
    pub x: f32,
    /// Y coordinate of the top edge
    pub y: f32,
    /// Extent along the X axis
    pub width: f32,
    /// Extent along the Y axis
    pub height: f32,
}

impl RectangleF {
    /// Create a new rectangle from its top-left corner and size
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// X coordinate of the left edge
    pub fn left(&self) -> f32 {
        self.x
    }

    /// Y coordinate of the top edge
    pub fn top(&self) -> f32 {
        self.y
    }

    /// X coordinate of the right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Y coordinate of the bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Top-left corner as a vector
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Size as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Translate the rectangle in place
    pub fn offset(&mut self, amount: Vec2) {
        self.x += amount.x;
        self.y += amount.y;
    }

    /// Smallest axis-aligned rectangle covering both rectangles
    pub fn union(&self, other: &Self) -> Self {
        let x0 = self.left().min(other.left());
        let y0 = self.top().min(other.top());
        let x1 = self.right().max(other.right());
        let y1 = self.bottom().max(other.bottom());

        Self::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Check if this rectangle contains a point
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Check if this rectangle intersects another rectangle
    pub fn intersects(&self, other: &Self) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_accessors() {
        let rect = RectangleF::new(1.0, 2.0, 10.0, 20.0);

        assert_eq!(rect.left(), 1.0);
        assert_eq!(rect.top(), 2.0);
        assert_eq!(rect.right(), 11.0);
        assert_eq!(rect.bottom(), 22.0);
    }

    #[test]
    fn test_offset() {
        let mut rect = RectangleF::new(0.0, 0.0, 5.0, 5.0);
        rect.offset(Vec2::new(3.0, -2.0));

        assert_eq!(rect, RectangleF::new(3.0, -2.0, 5.0, 5.0));
    }

    #[test]
    fn test_union_covers_both() {
        let a = RectangleF::new(0.0, 0.0, 10.0, 10.0);
        let b = RectangleF::new(20.0, 20.0, 5.0, 5.0);

        let union = a.union(&b);
        assert_eq!(union, RectangleF::new(0.0, 0.0, 25.0, 25.0));

        // Union is symmetric
        assert_eq!(b.union(&a), union);
    }

    #[test]
    fn test_union_of_nested_is_outer() {
        let outer = RectangleF::new(-5.0, -5.0, 20.0, 20.0);
        let inner = RectangleF::new(0.0, 0.0, 1.0, 1.0);

        assert_eq!(outer.union(&inner), outer);
    }

    #[test]
    fn test_contains_point() {
        let rect = RectangleF::new(0.0, 0.0, 10.0, 10.0);

        assert!(rect.contains_point(Vec2::new(5.0, 5.0)));
        assert!(rect.contains_point(Vec2::new(0.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_intersects() {
        let a = RectangleF::new(0.0, 0.0, 10.0, 10.0);
        let b = RectangleF::new(5.0, 5.0, 10.0, 10.0);
        let c = RectangleF::new(50.0, 50.0, 1.0, 1.0);

        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }
}
