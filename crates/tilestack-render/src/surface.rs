#![forbid(unsafe_code)]

//! The drawing capability tiles paint through.

use tilestack_core::{Color, Rect};

/// A render target that can fill axis-aligned rectangles with a color.
///
/// This is the only coupling between the tile engine and whatever actually
/// puts pixels on screen. Implementations decide how to interpret color
/// names and how to clip rectangles that fall outside their bounds.
pub trait Surface {
    /// Fill `rect` with `color`, painting over anything drawn there before.
    fn fill_rect(&mut self, rect: Rect, color: &Color);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        (**self).fill_rect(rect, color);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        (**self).fill_rect(rect, color);
    }
}

/// One recorded `fill_rect` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillCommand {
    pub rect: Rect,
    pub color: Color,
}

/// A surface that records every fill in call order instead of painting.
///
/// Useful for asserting paint order.
#[derive(Debug, Clone, Default)]
pub struct FillRecorder {
    commands: Vec<FillCommand>,
}

impl FillRecorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded so far, oldest first.
    #[inline]
    pub fn commands(&self) -> &[FillCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Consume the recorder and return its commands.
    pub fn into_commands(self) -> Vec<FillCommand> {
        self.commands
    }
}

impl Surface for FillRecorder {
    fn fill_rect(&mut self, rect: Rect, color: &Color) {
        self.commands.push(FillCommand {
            rect,
            color: color.clone(),
        });
    }
}
