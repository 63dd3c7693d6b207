#![forbid(unsafe_code)]

//! Geometric primitives.

/// An axis-aligned rectangle used for tile bounds and hit testing.
///
/// Uses screen coordinates (origin at top-left, y grows downward). The
/// origin may be negative; extents are unsigned. Edges are reported as
/// `i64` so that `x + width` never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Build a rectangle from inclusive left/top and exclusive right/bottom edges.
    ///
    /// Inverted edges produce a zero extent on that axis. Extents larger than
    /// `u32::MAX` saturate.
    pub fn from_edges(left: i32, top: i32, right: i64, bottom: i64) -> Self {
        Self {
            x: left,
            y: top,
            width: span(i64::from(left), right),
            height: span(i64::from(top), bottom),
        }
    }

    /// Left edge (alias for x).
    #[inline]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Top edge (alias for y).
    #[inline]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Area in pixels.
    #[inline]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle (half-open on both axes).
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        let (px, py) = (px as i64, py as i64);
        px >= self.x as i64 && px < self.right() && py >= self.y as i64 && py < self.bottom()
    }

    /// Create a new rectangle that is the union of this rectangle and another.
    ///
    /// The result is the smallest rectangle that contains both.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.x.min(other.x);
        let top = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::from_edges(left, top, right, bottom)
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if i64::from(left) < right && i64::from(top) < bottom {
            Some(Rect::from_edges(left, top, right, bottom))
        } else {
            None
        }
    }

    /// Compute the intersection with another rectangle.
    ///
    /// Returns an empty rectangle if the rectangles don't overlap.
    #[inline]
    pub fn intersection(&self, other: &Rect) -> Rect {
        self.intersection_opt(other).unwrap_or_default()
    }
}

fn span(start: i64, end: i64) -> u32 {
    u32::try_from((end - start).max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
        assert!(!rect.contains(1, 3));
    }

    #[test]
    fn rect_contains_negative_origin() {
        let rect = Rect::new(-10, -10, 5, 5);
        assert!(rect.contains(-10, -10));
        assert!(rect.contains(-6, -6));
        assert!(!rect.contains(-5, -6));
    }

    #[test]
    fn rect_edges_do_not_overflow() {
        let rect = Rect::new(i32::MAX, i32::MAX, u32::MAX, 1);
        assert_eq!(rect.right(), i64::from(i32::MAX) + i64::from(u32::MAX));
        assert!(rect.contains(i32::MAX, i32::MAX));
    }

    #[test]
    fn rect_union_covers_both() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.union(&b), Rect::new(0, 0, 15, 15));
        assert_eq!(b.union(&a), Rect::new(0, 0, 15, 15));
    }

    #[test]
    fn rect_union_disjoint() {
        let a = Rect::new(-4, 2, 2, 2);
        let b = Rect::new(6, -3, 1, 1);
        assert_eq!(a.union(&b), Rect::new(-4, -3, 11, 7));
    }

    #[test]
    fn rect_union_saturates_extent() {
        let a = Rect::new(i32::MIN, 0, 1, 1);
        let b = Rect::new(i32::MAX, 0, u32::MAX, 1);
        assert_eq!(a.union(&b).width, u32::MAX);
    }

    #[test]
    fn rect_intersection_overlaps() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 4, 4);
        assert_eq!(a.intersection(&b), Rect::new(2, 2, 2, 2));
    }

    #[test]
    fn rect_intersection_no_overlap_is_empty() {
        let a = Rect::new(0, 0, 2, 2);
        let b = Rect::new(3, 3, 2, 2);
        assert_eq!(a.intersection_opt(&b), None);
        assert!(a.intersection(&b).is_empty());
    }

    #[test]
    fn from_edges_clamps_inverted() {
        let r = Rect::from_edges(5, 5, 2, 9);
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 4);
        assert!(r.is_empty());
    }
}
