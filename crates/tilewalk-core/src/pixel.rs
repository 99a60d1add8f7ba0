//! Conversions between tile coordinates and pixel space.
//!
//! A tile's pixel position is its top-left corner: tile `(x, y)` with a
//! tile size of `s` covers pixels `[x*s, (x+1)*s) × [y*s, (y+1)*s)`.

use std::fmt;

use crate::geom::Point;

/// Top-left pixel of `tile`.
#[inline]
pub fn tile_to_pixel(tile: Point, tile_size: i32) -> Point {
    tile * tile_size
}

/// Tile containing pixel `p`.
///
/// Uses floor division so pixels left of / above the origin map to negative
/// tiles. Returns `None` when `tile_size <= 0`.
#[inline]
pub fn pixel_to_tile(p: Point, tile_size: i32) -> Option<Point> {
    if tile_size <= 0 {
        return None;
    }
    Some(Point::new(
        p.x.div_euclid(tile_size),
        p.y.div_euclid(tile_size),
    ))
}

/// Centre pixel of `tile` (rounded down for odd sizes).
#[inline]
pub fn tile_center_pixel(tile: Point, tile_size: i32) -> Point {
    let offset = tile_size / 2;
    tile_to_pixel(tile, tile_size).shift(offset, offset)
}

// ---------------------------------------------------------------------------
// PixelPos
// ---------------------------------------------------------------------------

/// A continuous (sub-tile) position in pixel units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPos {
    pub x: f32,
    pub y: f32,
}

impl PixelPos {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Top-left corner of `tile`.
    #[inline]
    pub fn from_tile(tile: Point, tile_size: f32) -> Self {
        Self::new(tile.x as f32 * tile_size, tile.y as f32 * tile_size)
    }

    /// Centre of `tile`.
    #[inline]
    pub fn center_of(tile: Point, tile_size: f32) -> Self {
        let half = tile_size / 2.0;
        Self::new(
            tile.x as f32 * tile_size + half,
            tile.y as f32 * tile_size + half,
        )
    }

    /// Tile containing this position, or `None` when `tile_size` is not a
    /// positive finite number.
    #[inline]
    pub fn to_tile(self, tile_size: f32) -> Option<Point> {
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return None;
        }
        Some(Point::new(
            (self.x / tile_size).floor() as i32,
            (self.y / tile_size).floor() as i32,
        ))
    }
}

impl From<Point> for PixelPos {
    #[inline]
    fn from(p: Point) -> Self {
        Self::new(p.x as f32, p.y as f32)
    }
}

impl fmt::Display for PixelPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversions() {
        assert_eq!(tile_to_pixel(Point::new(6, 5), 8), Point::new(48, 40));
        assert_eq!(pixel_to_tile(Point::new(48, 40), 8), Some(Point::new(6, 5)));
        assert_eq!(pixel_to_tile(Point::new(55, 47), 8), Some(Point::new(6, 5)));
        assert_eq!(pixel_to_tile(Point::new(-1, 0), 8), Some(Point::new(-1, 0)));
        assert_eq!(tile_center_pixel(Point::new(1, 2), 8), Point::new(12, 20));
    }

    #[test]
    fn pixel_to_tile_rejects_non_positive_size() {
        assert_eq!(pixel_to_tile(Point::new(10, 10), 0), None);
        assert_eq!(pixel_to_tile(Point::new(10, 10), -4), None);
    }

    #[test]
    fn float_conversions() {
        let p = PixelPos::from_tile(Point::new(3, 1), 8.0);
        assert_eq!(p, PixelPos::new(24.0, 8.0));
        assert_eq!(p.to_tile(8.0), Some(Point::new(3, 1)));
        assert_eq!(PixelPos::new(31.9, 15.9).to_tile(8.0), Some(Point::new(3, 1)));
        assert_eq!(
            PixelPos::center_of(Point::new(0, 0), 16.0),
            PixelPos::new(8.0, 8.0)
        );
        assert_eq!(p.to_tile(0.0), None);
        assert_eq!(p.to_tile(f32::NAN), None);
    }
}
