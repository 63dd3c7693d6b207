#![forbid(unsafe_code)]

//! Core: geometry and color primitives for TileStack.
//!
//! # Role in TileStack
//! `tilestack-core` holds the value types every other crate agrees on:
//! [`Rect`](geometry::Rect) for tile bounds and hit testing, and
//! [`Color`](color::Color) for tile fills. It has no knowledge of stacks or
//! surfaces.
//!
//! # Feature flags
//! - `serde`: derive `Serialize`/`Deserialize` for [`Rect`] and [`Color`].

pub mod color;
pub mod geometry;

pub use color::Color;
pub use geometry::Rect;
