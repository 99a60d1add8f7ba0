//! A boolean walkability grid usable as a [`PassabilityOracle`].

use tilewalk_core::{Bounds, Point};

use crate::error::PathError;
use crate::traits::PassabilityOracle;

/// Character marking a blocked tile in [`PassMap::from_ascii`].
pub const BLOCKED_CHAR: char = '#';

/// Row-major grid of walkable flags anchored at the origin.
///
/// Tiles outside the bounds are never passable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassMap {
    bounds: Bounds,
    cells: Vec<bool>,
}

impl PassMap {
    /// A map where every tile is walkable.
    pub fn open(bounds: Bounds) -> Result<Self, PathError> {
        Self::from_fn(bounds, |_| true)
    }

    /// Build a map by evaluating `f` on every tile.
    pub fn from_fn(bounds: Bounds, f: impl Fn(Point) -> bool) -> Result<Self, PathError> {
        if !bounds.is_valid() {
            return Err(PathError::InvalidBounds(bounds));
        }
        let cells = bounds.range().iter().map(f).collect();
        Ok(Self { bounds, cells })
    }

    /// Build a map from row-major tile values. A tile is walkable when it
    /// equals `passable`.
    pub fn from_tiles<T: PartialEq>(
        bounds: Bounds,
        tiles: &[T],
        passable: &T,
    ) -> Result<Self, PathError> {
        if !bounds.is_valid() {
            return Err(PathError::InvalidBounds(bounds));
        }
        let expected = bounds.area();
        if tiles.len() != expected {
            return Err(PathError::MapSizeMismatch {
                bounds,
                expected,
                actual: tiles.len(),
            });
        }
        let cells = tiles.iter().map(|t| t == passable).collect();
        Ok(Self { bounds, cells })
    }

    /// Parse a map drawn as text, one line per row.
    ///
    /// `#` is blocked, any other character is walkable. Leading and trailing
    /// whitespace on each line is ignored, as are blank lines, so maps can be
    /// written as indented string literals.
    pub fn from_ascii(text: &str) -> Result<Self, PathError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(PathError::RaggedMap {
                    row,
                    expected: width,
                    actual,
                });
            }
            cells.extend(line.chars().map(|c| c != BLOCKED_CHAR));
        }
        let bounds = Bounds::new(width as i32, rows.len() as i32);
        if !bounds.is_valid() {
            return Err(PathError::InvalidBounds(bounds));
        }
        Ok(Self { bounds, cells })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `p` is on the map and walkable.
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.index(p)
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or(false)
    }

    /// Mark a tile walkable or blocked. Off-map points are ignored.
    pub fn set_passable(&mut self, p: Point, passable: bool) {
        if let Some(cell) = self.index(p).and_then(|i| self.cells.get_mut(i)) {
            *cell = passable;
        }
    }

    /// Number of walkable tiles.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over every walkable tile in row-major order.
    pub fn passable_tiles(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds.range().iter().filter(|&p| self.is_passable(p))
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width + p.x) as usize)
    }
}

impl PassabilityOracle for PassMap {
    #[inline]
    fn is_passable(&self, p: Point) -> bool {
        PassMap::is_passable(self, p)
    }
}
