#![forbid(unsafe_code)]

//! Stack configuration.

use tilestack_core::Color;

/// Options applied when a [`TileStack`](crate::TileStack) is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackConfig {
    /// Color a tile takes when it is highlighted.
    ///
    /// Defaults to `yellow`.
    pub highlight_color: Color,

    /// Number of tiles to reserve storage for up front.
    pub initial_capacity: usize,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            highlight_color: Color::YELLOW,
            initial_capacity: 0,
        }
    }
}

impl StackConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highlight color.
    #[must_use]
    pub fn with_highlight_color(mut self, color: impl Into<Color>) -> Self {
        self.highlight_color = color.into();
        self
    }

    /// Reserve room for `capacity` tiles.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
