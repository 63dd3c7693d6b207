#![forbid(unsafe_code)]

//! TileStack: a z-ordered stack of colored rectangles.
//!
//! # Role in TileStack
//! This is the engine crate. It keeps overlapping tiles in depth order and
//! answers the questions a simple window manager asks: what is under this
//! point, bring it to the top, push it to the bottom, delete it, or fuse
//! everything under the point into one bounding tile.
//!
//! # Primary responsibilities
//! - **Tile**: a non-empty colored rectangle with a point test and a draw call.
//! - **TileStack**: the ordered chain, point queries, and restructuring.
//! - **StackConfig**: highlight color and storage sizing.
//! - **Validation**: [`TileStack::validate`] checks the chain invariants.
//!
//! # How it fits in the system
//! Geometry and colors come from `tilestack-core`. Painting goes through the
//! `Surface` trait from `tilestack-render`; the stack only decides the order
//! (back to front) in which tiles are handed to it.
//!
//! # Logging
//! Restructuring operations emit `tracing` events at `debug` level, inserts
//! at `trace`. Install any subscriber to see them.

pub mod config;
pub mod stack;
pub mod tile;

pub use config::StackConfig;
pub use stack::{Iter, StackInvariantError, TileId, TileStack};
pub use tile::{Tile, TileError};

pub use tilestack_core::{Color, Rect};
pub use tilestack_render::Surface;
