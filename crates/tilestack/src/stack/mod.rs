#![forbid(unsafe_code)]

//! The z-ordered tile stack.
//!
//! A [`TileStack`] is a doubly linked chain of [`Tile`]s. The front of the
//! chain is the topmost tile (painted last), the back is the bottommost
//! (painted first). Every point query scans front to back, so the tile the
//! user sees on top is always the one a query hits.
//!
//! # Usage
//!
//! ```
//! use tilestack::TileStack;
//! use tilestack_render::FillRecorder;
//!
//! let mut stack = TileStack::new();
//! stack.add_back(0, 0, 5, 5, "red").unwrap();
//! stack.add_front(2, 2, 5, 5, "blue").unwrap();
//!
//! // The blue tile is on top where the two overlap.
//! assert!(stack.highlight(3, 3));
//! assert_eq!(stack.front().unwrap().color(), "yellow");
//!
//! // Push the highlighted tile underneath; red is now topmost at (3, 3).
//! assert!(stack.lower(3, 3));
//! assert_eq!(stack.find_tile(3, 3).unwrap().color(), "red");
//!
//! let mut surface = FillRecorder::new();
//! stack.draw_all(&mut surface);
//! assert_eq!(surface.commands()[1].color, "red");
//! ```
//!
//! # Storage
//!
//! Nodes live in an arena and link to each other through generational
//! [`TileId`] handles rather than pointers. Splicing a node in or out is
//! O(1); a handle to a removed tile simply stops resolving.

mod arena;
mod invariant;

use std::fmt;
use std::iter::FusedIterator;

use tilestack_core::{Color, Rect};
use tilestack_render::Surface;

use crate::config::StackConfig;
use crate::tile::{Tile, TileError};

use arena::Arena;
pub use arena::TileId;
pub use invariant::StackInvariantError;

/// An ordered collection of tiles, topmost first.
#[derive(Debug, Clone, Default)]
pub struct TileStack {
    arena: Arena,
    front: Option<TileId>,
    back: Option<TileId>,
    config: StackConfig,
}

impl TileStack {
    /// Create an empty stack with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with the given configuration.
    pub fn with_config(config: StackConfig) -> Self {
        Self {
            arena: Arena::with_capacity(config.initial_capacity),
            front: None,
            back: None,
            config,
        }
    }

    /// The configuration this stack was created with.
    #[inline]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Number of tiles in the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True when the stack holds no tiles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    // ---- Insertion ----

    /// Create a tile and make it the new topmost tile.
    pub fn add_front(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: impl Into<Color>,
    ) -> Result<TileId, TileError> {
        Ok(self.push_front(Tile::new(x, y, width, height, color)?))
    }

    /// Create a tile and make it the new bottommost tile.
    pub fn add_back(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        color: impl Into<Color>,
    ) -> Result<TileId, TileError> {
        Ok(self.push_back(Tile::new(x, y, width, height, color)?))
    }

    /// Insert `tile` as the new topmost tile.
    pub fn push_front(&mut self, tile: Tile) -> TileId {
        let id = self.arena.insert(tile);
        self.attach_front(id);
        tracing::trace!(%id, len = self.len(), "tile pushed to front");
        id
    }

    /// Insert `tile` as the new bottommost tile.
    pub fn push_back(&mut self, tile: Tile) -> TileId {
        let id = self.arena.insert(tile);
        self.attach_back(id);
        tracing::trace!(%id, len = self.len(), "tile pushed to back");
        id
    }

    // ---- Lookup ----

    /// The topmost tile, if any.
    pub fn front(&self) -> Option<&Tile> {
        self.front.and_then(|id| self.get(id))
    }

    /// The bottommost tile, if any.
    pub fn back(&self) -> Option<&Tile> {
        self.back.and_then(|id| self.get(id))
    }

    /// Handle of the topmost tile, if any.
    #[inline]
    pub fn front_id(&self) -> Option<TileId> {
        self.front
    }

    /// Handle of the bottommost tile, if any.
    #[inline]
    pub fn back_id(&self) -> Option<TileId> {
        self.back
    }

    /// Resolve a handle. Returns `None` once the tile has left the stack.
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.arena.get(id).map(|node| &node.tile)
    }

    /// The topmost tile containing (`x`, `y`).
    pub fn find_tile(&self, x: i32, y: i32) -> Option<&Tile> {
        self.find_id(x, y).and_then(|id| self.get(id))
    }

    /// Handle of the topmost tile containing (`x`, `y`).
    ///
    /// Linear scan from the front; O(n).
    pub fn find_id(&self, x: i32, y: i32) -> Option<TileId> {
        self.ids()
            .find(|&id| self.arena.get(id).is_some_and(|node| node.tile.contains(x, y)))
    }

    /// Every tile containing (`x`, `y`), topmost first.
    pub fn tiles_at(&self, x: i32, y: i32) -> impl Iterator<Item = &Tile> + '_ {
        self.iter().filter(move |tile| tile.contains(x, y))
    }

    /// Iterate tiles from front (topmost) to back.
    ///
    /// Use `.rev()` for paint order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: self,
            front: self.front,
            back: self.back,
            remaining: self.len(),
        }
    }

    // ---- Point commands ----

    /// Recolor the topmost tile at (`x`, `y`) with the highlight color.
    ///
    /// Returns `false` when no tile contains the point. Order is unchanged.
    pub fn highlight(&mut self, x: i32, y: i32) -> bool {
        let Some(id) = self.find_id(x, y) else {
            return false;
        };
        let color = self.config.highlight_color.clone();
        let Some(node) = self.arena.get_mut(id) else {
            return false;
        };
        node.tile.set_color(color);
        tracing::debug!(x, y, %id, "tile highlighted");
        true
    }

    /// Move the topmost tile at (`x`, `y`) to the front.
    ///
    /// Returns `false` when no tile contains the point or the tile is
    /// already at the front.
    pub fn raise(&mut self, x: i32, y: i32) -> bool {
        let Some(id) = self.find_id(x, y) else {
            return false;
        };
        if self.front == Some(id) {
            return false;
        }
        self.detach(id);
        self.attach_front(id);
        tracing::debug!(x, y, %id, "tile raised to front");
        true
    }

    /// Move the topmost tile at (`x`, `y`) to the back.
    ///
    /// Returns `false` when no tile contains the point or the tile is
    /// already at the back.
    pub fn lower(&mut self, x: i32, y: i32) -> bool {
        let Some(id) = self.find_id(x, y) else {
            return false;
        };
        if self.back == Some(id) {
            return false;
        }
        self.detach(id);
        self.attach_back(id);
        tracing::debug!(x, y, %id, "tile lowered to back");
        true
    }

    /// Delete the topmost tile at (`x`, `y`). Returns whether one was removed.
    pub fn remove(&mut self, x: i32, y: i32) -> bool {
        self.take(x, y).is_some()
    }

    /// Detach the topmost tile at (`x`, `y`) and return it.
    pub fn take(&mut self, x: i32, y: i32) -> Option<Tile> {
        let id = self.find_id(x, y)?;
        let tile = self.unlink(id)?;
        tracing::debug!(x, y, %id, len = self.len(), "tile removed");
        Some(tile)
    }

    /// Delete every tile containing (`x`, `y`) and return how many went.
    pub fn remove_all(&mut self, x: i32, y: i32) -> usize {
        let removed = self
            .hits(x, y)
            .into_iter()
            .filter_map(|id| self.unlink(id))
            .count();
        if removed > 0 {
            tracing::debug!(x, y, removed, len = self.len(), "tiles removed");
        }
        removed
    }

    /// Replace every tile containing (`x`, `y`) with one tile covering their
    /// combined bounding box.
    ///
    /// The new tile takes the color of the topmost tile that was merged and
    /// goes to the front. Returns its handle, or `None` (and leaves the stack
    /// untouched) when no tile contains the point.
    pub fn merge(&mut self, x: i32, y: i32) -> Option<TileId> {
        let mut hits = self.hits(x, y).into_iter();
        let first = self.unlink(hits.next()?)?;
        let color = first.color().clone();
        let mut bounds: Rect = first.rect();
        let mut merged = 1usize;
        for id in hits {
            if let Some(tile) = self.unlink(id) {
                bounds = bounds.union(&tile.rect());
                merged += 1;
            }
        }
        let id = self.push_front(Tile::from_nonempty(bounds, color));
        tracing::debug!(
            x,
            y,
            merged,
            bounds = ?bounds,
            %id,
            "tiles merged"
        );
        Some(id)
    }

    // ---- Whole-stack operations ----

    /// Paint every tile onto `surface`, back to front.
    pub fn draw_all<S: Surface + ?Sized>(&self, surface: &mut S) {
        for tile in self.iter().rev() {
            tile.draw(surface);
        }
    }

    /// Drop every tile. All outstanding handles become stale.
    pub fn clear(&mut self) {
        let dropped = self.len();
        self.arena.clear();
        self.front = None;
        self.back = None;
        tracing::debug!(dropped, "stack cleared");
    }

    /// One line per tile, back to front: `Node Tile{x=..,y=..,w=..,h=..,color=..}`.
    pub fn debug_dump(&self) -> String {
        self.to_string()
    }

    // ---- Chain primitives ----

    fn ids(&self) -> impl Iterator<Item = TileId> + '_ {
        std::iter::successors(self.front, |&id| self.arena.get(id).and_then(|node| node.next))
    }

    fn hits(&self, x: i32, y: i32) -> Vec<TileId> {
        self.ids()
            .filter(|&id| self.arena.get(id).is_some_and(|node| node.tile.contains(x, y)))
            .collect()
    }

    /// Detach and free `id`, handing back its tile.
    fn unlink(&mut self, id: TileId) -> Option<Tile> {
        self.detach(id);
        self.arena.remove(id).map(|node| node.tile)
    }

    /// Splice `id` out of the chain. Only its neighbours are touched.
    fn detach(&mut self, id: TileId) {
        let Some(node) = self.arena.get_mut(id) else {
            return;
        };
        let (prev, next) = (node.prev.take(), node.next.take());

        match prev.and_then(|p| self.arena.get_mut(p)) {
            Some(prev_node) => prev_node.next = next,
            None => self.front = next,
        }
        match next.and_then(|n| self.arena.get_mut(n)) {
            Some(next_node) => next_node.prev = prev,
            None => self.back = prev,
        }
    }

    /// Link an unlinked node in as the new front.
    fn attach_front(&mut self, id: TileId) {
        let old_front = self.front;
        let Some(node) = self.arena.get_mut(id) else {
            return;
        };
        node.prev = None;
        node.next = old_front;

        match old_front.and_then(|f| self.arena.get_mut(f)) {
            Some(front_node) => front_node.prev = Some(id),
            None => self.back = Some(id),
        }
        self.front = Some(id);
    }

    /// Link an unlinked node in as the new back.
    fn attach_back(&mut self, id: TileId) {
        let old_back = self.back;
        let Some(node) = self.arena.get_mut(id) else {
            return;
        };
        node.next = None;
        node.prev = old_back;

        match old_back.and_then(|b| self.arena.get_mut(b)) {
            Some(back_node) => back_node.next = Some(id),
            None => self.front = Some(id),
        }
        self.back = Some(id);
    }
}

impl fmt::Display for TileStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tile in self.iter().rev() {
            writeln!(f, "Node {tile}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TileStack {
    type Item = &'a Tile;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Tile> for TileStack {
    /// Pushes each tile to the back, so iteration order matches input order.
    fn extend<I: IntoIterator<Item = Tile>>(&mut self, iter: I) {
        for tile in iter {
            self.push_back(tile);
        }
    }
}

impl FromIterator<Tile> for TileStack {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

/// Front-to-back iterator over a [`TileStack`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: &'a TileStack,
    front: Option<TileId>,
    back: Option<TileId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.stack.arena.get(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.stack.arena.get(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.tile)
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}
