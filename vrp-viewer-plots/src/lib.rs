//! This crate turns a loaded route snapshot into drawable primitives and paints them with `plotters`.
//!
//! Rendering is split into two steps: [`render_scene`] produces an ordered list of [`Primitive`] in canvas pixel
//! coordinates (routes first, then node markers, then the selection overlay), and [`draw_scene`] paints them on any
//! `plotters` drawing area. The primitive list is also what click handling uses, see [`hit_test`].

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

/// Type alias for the result of a drawing function.
pub type DrawResult<T> = Result<T, Box<dyn std::error::Error>>;

mod drawing;
pub use self::drawing::*;

mod palette;
pub use self::palette::*;

mod projection;
pub use self::projection::*;

mod scene;
pub use self::scene::*;
