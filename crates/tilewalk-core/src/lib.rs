//! **tilewalk-core** — value types shared across the *tilewalk* crates.
//!
//! This crate provides tile-grid geometry ([`Point`], [`Range`], [`Bounds`])
//! and the conversions between tile coordinates and continuous pixel
//! positions used by movement code.

pub mod geom;
pub mod pixel;

pub use geom::{Bounds, Point, Range, RangeIter, TileCoord};
pub use pixel::{PixelPos, pixel_to_tile, tile_center_pixel, tile_to_pixel};
