#![forbid(unsafe_code)]

//! A single colored rectangle.

use std::fmt;

use tilestack_core::{Color, Rect};
use tilestack_render::Surface;

/// An axis-aligned, colored rectangle.
///
/// Width and height are always non-zero and every edge fits in `i32`;
/// [`Tile::new`] rejects anything else. Geometry never changes after
/// construction. Only the color can be updated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    rect: Rect,
    color: Color,
}

impl Tile {
    /// Create a tile at (`x`, `y`) with the given extent and color.
    pub fn new(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: impl Into<Color>,
    ) -> Result<Self, TileError> {
        Self::from_rect(Rect::new(x, y, width, height), color)
    }

    /// Create a tile covering `rect`.
    pub fn from_rect(rect: Rect, color: impl Into<Color>) -> Result<Self, TileError> {
        if rect.is_empty() {
            return Err(TileError::EmptyExtent {
                width: rect.width,
                height: rect.height,
            });
        }
        if rect.right() > i64::from(i32::MAX) || rect.bottom() > i64::from(i32::MAX) {
            return Err(TileError::OutOfRange {
                right: rect.right(),
                bottom: rect.bottom(),
            });
        }
        Ok(Self {
            rect,
            color: color.into(),
        })
    }

    /// Build a tile from a rect already known to be valid.
    ///
    /// The union of two valid rects is valid, so merge results go through here.
    pub(crate) fn from_nonempty(rect: Rect, color: Color) -> Self {
        debug_assert!(!rect.is_empty(), "tile extent must be non-zero: {rect:?}");
        debug_assert!(rect.right() <= i64::from(i32::MAX) && rect.bottom() <= i64::from(i32::MAX));
        Self { rect, color }
    }

    #[inline]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub const fn x(&self) -> i32 {
        self.rect.x
    }

    #[inline]
    pub const fn y(&self) -> i32 {
        self.rect.y
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.rect.width
    }

    #[inline]
    pub const fn height(&self) -> u32 {
        self.rect.height
    }

    #[inline]
    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Replace the fill color.
    pub fn set_color(&mut self, color: impl Into<Color>) {
        self.color = color.into();
    }

    /// Check if (`px`, `py`) lies inside the tile (right and bottom edges excluded).
    #[inline]
    pub const fn contains(&self, px: i32, py: i32) -> bool {
        self.rect.contains(px, py)
    }

    /// Paint the tile onto `surface` with a single fill.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.rect, &self.color);
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tile{{x={},y={},w={},h={},color={}}}",
            self.rect.x, self.rect.y, self.rect.width, self.rect.height, self.color
        )
    }
}

/// Errors from tile construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    /// Width or height is zero.
    EmptyExtent { width: u32, height: u32 },
    /// The right or bottom edge lies past `i32::MAX`.
    OutOfRange { right: i64, bottom: i64 },
}

impl fmt::Display for TileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent { width, height } => {
                write!(f, "tile extent must be non-zero (got {width}x{height})")
            }
            Self::OutOfRange { right, bottom } => write!(
                f,
                "tile edges must fit in i32 (right={right}, bottom={bottom})"
            ),
        }
    }
}

impl std::error::Error for TileError {}

#[cfg(test)]
mod tests {
    use super::*;
    use tilestack_render::{Canvas, FillRecorder};

    #[test]
    fn zero_extent_is_rejected() {
        assert_eq!(
            Tile::new(0, 0, 0, 5, "red"),
            Err(TileError::EmptyExtent {
                width: 0,
                height: 5
            })
        );
        assert!(Tile::new(0, 0, 5, 0, "red").is_err());
        assert!(Tile::from_rect(Rect::default(), "red").is_err());
    }

    #[test]
    fn edges_past_i32_max_are_rejected() {
        assert_eq!(
            Tile::new(0, 0, u32::MAX, 1, "red"),
            Err(TileError::OutOfRange {
                right: i64::from(u32::MAX),
                bottom: 1,
            })
        );
        assert!(Tile::new(0, i32::MAX, 1, 2, "red").is_err());
        assert!(Tile::new(i32::MAX, 0, 1, 1, "red").is_err());
    }

    #[test]
    fn edges_at_i32_limits_are_accepted() {
        let widest = Tile::new(i32::MIN, 0, u32::MAX, 1, "red").unwrap();
        assert_eq!(widest.rect().right(), i64::from(i32::MAX));
        let corner = Tile::new(i32::MAX - 1, i32::MAX - 1, 1, 1, "red").unwrap();
        assert!(corner.contains(i32::MAX - 1, i32::MAX - 1));
    }

    #[test]
    fn error_display() {
        let err = Tile::new(1, 1, 0, 0, "red").unwrap_err();
        assert_eq!(err.to_string(), "tile extent must be non-zero (got 0x0)");
        let err = Tile::new(0, 0, u32::MAX, 1, "red").unwrap_err();
        assert_eq!(
            err.to_string(),
            "tile edges must fit in i32 (right=4294967295, bottom=1)"
        );
    }

    #[test]
    fn contains_is_half_open() {
        let tile = Tile::new(0, 0, 10, 10, "red").unwrap();
        assert!(tile.contains(0, 0));
        assert!(tile.contains(9, 9));
        assert!(!tile.contains(10, 5));
        assert!(!tile.contains(5, 10));
        assert!(!tile.contains(-1, 0));
    }

    #[test]
    fn accessors_reflect_geometry() {
        let tile = Tile::new(-3, 4, 7, 8, "blue").unwrap();
        assert_eq!(
            (tile.x(), tile.y(), tile.width(), tile.height()),
            (-3, 4, 7, 8)
        );
        assert_eq!(tile.rect(), Rect::new(-3, 4, 7, 8));
        assert_eq!(tile.color(), "blue");
    }

    #[test]
    fn set_color_keeps_geometry() {
        let mut tile = Tile::new(1, 2, 3, 4, "red").unwrap();
        tile.set_color(Color::YELLOW);
        assert_eq!(tile.color(), "yellow");
        assert_eq!(tile.rect(), Rect::new(1, 2, 3, 4));
    }

    #[test]
    fn draw_issues_one_fill() {
        let tile = Tile::new(2, 2, 3, 3, "green").unwrap();
        let mut rec = FillRecorder::new();
        tile.draw(&mut rec);
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.commands()[0].rect, tile.rect());
        assert_eq!(rec.commands()[0].color, "green");
    }

    #[test]
    fn draw_onto_canvas() {
        let tile = Tile::new(1, 1, 2, 2, "green").unwrap();
        let mut canvas = Canvas::new(4, 4);
        tile.draw(&mut canvas);
        assert_eq!(canvas.count_color("green"), 4);
        assert!(canvas.color_at(0, 0).is_none());
    }

    #[test]
    fn display_format() {
        let tile = Tile::new(0, 5, 10, 20, "red").unwrap();
        assert_eq!(tile.to_string(), "Tile{x=0,y=5,w=10,h=20,color=red}");
    }
}
