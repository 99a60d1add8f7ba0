use std::ops::Deref;

use tilewalk_core::Point;

use crate::error::PathError;

/// A non-empty route of tiles from start to goal, both inclusive.
///
/// A single-tile path is valid and means "already there". Dereferences to
/// `[Point]`, so indexing, `len()` and iteration work as on a slice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Point>", into = "Vec<Point>")
)]
pub struct Path(Vec<Point>);

impl Path {
    /// Build a path from waypoints. Fails with [`PathError::EmptyPath`] when
    /// `waypoints` is empty.
    pub fn new(waypoints: Vec<Point>) -> Result<Self, PathError> {
        if waypoints.is_empty() {
            return Err(PathError::EmptyPath);
        }
        Ok(Self(waypoints))
    }

    /// Wrap waypoints produced by a search, which are never empty.
    pub(crate) fn from_search(waypoints: Vec<Point>) -> Self {
        debug_assert!(!waypoints.is_empty());
        Self(waypoints)
    }

    /// The zero-length path `[p]`.
    pub fn single(p: Point) -> Self {
        Self(vec![p])
    }

    /// First waypoint.
    #[inline]
    pub fn start(&self) -> Point {
        self.0[0]
    }

    /// Last waypoint.
    #[inline]
    pub fn goal(&self) -> Point {
        self.0[self.0.len() - 1]
    }

    /// Number of moves needed to walk the path (`len() - 1`).
    #[inline]
    pub fn cost(&self) -> usize {
        self.0.len() - 1
    }

    /// Whether every consecutive pair of waypoints is one cardinal step apart.
    pub fn is_contiguous(&self) -> bool {
        self.0.windows(2).all(|w| w[0].is_adjacent_cardinal(w[1]))
    }

    #[inline]
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Point];

    #[inline]
    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl TryFrom<Vec<Point>> for Path {
    type Error = PathError;

    fn try_from(waypoints: Vec<Point>) -> Result<Self, PathError> {
        Self::new(waypoints)
    }
}

impl From<Path> for Vec<Point> {
    fn from(path: Path) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_waypoints_rejected() {
        assert_eq!(Path::new(Vec::new()), Err(PathError::EmptyPath));
        assert_eq!(Path::try_from(Vec::new()), Err(PathError::EmptyPath));
    }

    #[test]
    fn endpoints_and_cost() {
        let path = Path::new(vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(1, 1),
        ])
        .unwrap();
        assert_eq!(path.start(), Point::new(0, 0));
        assert_eq!(path.goal(), Point::new(1, 1));
        assert_eq!(path.len(), 3);
        assert_eq!(path.cost(), 2);
        assert_eq!(path[1], Point::new(1, 0));
        assert!(path.is_contiguous());
        assert_eq!(path.iter().count(), 3);
    }

    #[test]
    fn single_tile_path() {
        let path = Path::single(Point::new(3, 3));
        assert_eq!(path.start(), path.goal());
        assert_eq!(path.cost(), 0);
        assert!(path.is_contiguous());
    }

    #[test]
    fn gaps_and_diagonals_are_not_contiguous() {
        let jump = Path::new(vec![Point::new(0, 0), Point::new(2, 0)]).unwrap();
        assert!(!jump.is_contiguous());
        let diag = Path::new(vec![Point::new(0, 0), Point::new(1, 1)]).unwrap();
        assert!(!diag.is_contiguous());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_serializes_as_point_list() {
        let path = Path::new(vec![Point::new(0, 0), Point::new(0, 1)]).unwrap();
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#"[{"x":0,"y":0},{"x":0,"y":1}]"#);
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }

    #[test]
    fn empty_list_does_not_deserialize() {
        assert!(serde_json::from_str::<Path>("[]").is_err());
    }
}
