#![forbid(unsafe_code)]

//! Render: the surface capability tiles draw through.
//!
//! # Role in TileStack
//! The tile engine never touches pixels. It hands each tile's bounds and
//! color to a [`Surface`], back to front, and the surface does the rest.
//!
//! # Primary responsibilities
//! - **Surface**: the fill-rectangle-with-color capability.
//! - **Canvas**: an in-memory cell grid, handy for headless rendering and tests.
//! - **FillRecorder**: a surface that logs fill commands in call order.

pub mod canvas;
pub mod surface;

pub use canvas::Canvas;
pub use surface::{FillCommand, FillRecorder, Surface};
