#![forbid(unsafe_code)]

//! In-memory cell grid surface.
//!
//! A [`Canvas`] stores one optional color per pixel. Fills are clipped to
//! the canvas bounds; later fills overwrite earlier ones, so the final grid
//! shows exactly what a compositor painting in the same order would show.
//!
//! # Usage
//!
//! ```
//! use tilestack_core::{Color, Rect};
//! use tilestack_render::{Canvas, Surface};
//!
//! let mut canvas = Canvas::new(8, 4);
//! canvas.fill_rect(Rect::new(-2, 1, 4, 10), &Color::named("red"));
//!
//! assert_eq!(canvas.color_at(0, 1).map(|c| c.as_str()), Some("red"));
//! assert_eq!(canvas.color_at(2, 1), None);
//! ```

use tilestack_core::{Color, Rect};

use crate::surface::Surface;

/// A fixed-size grid of colored cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    cells: Vec<Option<Color>>,
    fills: usize,
}

impl Canvas {
    /// Create a blank canvas with the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![None; size],
            fills: 0,
        }
    }

    /// Canvas width.
    #[inline]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height.
    #[inline]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Bounding rectangle of the canvas.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Number of `fill_rect` calls received since creation or the last clear.
    #[inline]
    pub const fn fill_count(&self) -> usize {
        self.fills
    }

    /// Convert (x, y) to linear index.
    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok()?;
        let y = u32::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Color painted at (x, y), or `None` for blank and out-of-bounds cells.
    pub fn color_at(&self, x: i32, y: i32) -> Option<&Color> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    /// Number of cells currently painted with `color`.
    pub fn count_color(&self, color: &str) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.as_ref().is_some_and(|c| c == color))
            .count()
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(None);
        self.fills = 0;
    }
}

impl Surface for Canvas {
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.fills += 1;
        let Some(clip) = rect.intersection_opt(&self.bounds()) else {
            return;
        };
        // Clipped to bounds, so both origins are non-negative and inside the grid.
        let x0 = clip.x as usize;
        let y0 = clip.y as usize;
        let row_len = self.width as usize;
        for y in y0..y0 + clip.height as usize {
            let start = y * row_len + x0;
            self.cells[start..start + clip.width as usize].fill(Some(color.clone()));
        }
    }
}
