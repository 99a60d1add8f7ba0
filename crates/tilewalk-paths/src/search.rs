use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tilewalk_core::{Bounds, Point};

use crate::error::PathError;
use crate::neighbors::Neighbors;

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

/// Per-tile search record. Only meaningful when `generation` matches the
/// searcher's current generation; anything older is treated as unvisited.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            parent: NO_PARENT,
            generation: 0,
            closed: false,
        }
    }
}

/// Open-set entry. Duplicates for the same tile may coexist; the stale ones
/// are skipped when popped.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) pos: Point,
    pub(crate) f: i32,
    pub(crate) g: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so BinaryHeap (max-heap) pops the smallest
        // (f, g, x, y) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.g.cmp(&self.g))
            .then_with(|| other.pos.x.cmp(&self.pos.x))
            .then_with(|| other.pos.y.cmp(&self.pos.y))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel g-score for tiles not reached yet.
pub(crate) const UNREACHABLE: i32 = i32::MAX;

/// Sentinel parent index for the start tile.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable A* searcher for one map size.
///
/// `PathSearch` owns the node array, open set and neighbor buffer, so
/// repeated queries on the same map do not allocate after warm-up. Every
/// query starts from a logically fresh state: stale nodes are invalidated
/// by bumping a generation counter instead of clearing the array.
///
/// Independent searchers share nothing and may run on different threads.
#[derive(Debug, Clone)]
pub struct PathSearch {
    pub(crate) bounds: Bounds,
    pub(crate) width: usize,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) nbuf: Neighbors,
}

impl PathSearch {
    /// Create a searcher for a `bounds.width × bounds.height` map.
    ///
    /// Fails with [`PathError::InvalidBounds`] if either side is not positive.
    pub fn new(bounds: Bounds) -> Result<Self, PathError> {
        if !bounds.is_valid() {
            return Err(PathError::InvalidBounds(bounds));
        }
        Ok(Self {
            bounds,
            width: bounds.width as usize,
            nodes: vec![Node::default(); bounds.area()],
            generation: 0,
            open: BinaryHeap::new(),
            nbuf: Neighbors::new(),
        })
    }

    /// Switch to a different map size.
    ///
    /// If the new map fits in the existing node array it is reused and only
    /// the generation is bumped; otherwise the array is reallocated.
    pub fn set_bounds(&mut self, bounds: Bounds) -> Result<(), PathError> {
        if !bounds.is_valid() {
            return Err(PathError::InvalidBounds(bounds));
        }
        let new_len = bounds.area();
        self.bounds = bounds;
        self.width = bounds.width as usize;

        if new_len <= self.nodes.len() {
            self.next_generation();
            return Ok(());
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
        Ok(())
    }

    /// The map size searched against.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Advance to a new generation, invalidating every node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: old stamps could alias the new generation.
            for n in self.nodes.iter_mut() {
                n.generation = 0;
            }
            self.generation = 1;
        }
        self.generation
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_bounds() {
        assert_eq!(
            PathSearch::new(Bounds::new(0, 5)).unwrap_err(),
            PathError::InvalidBounds(Bounds::new(0, 5))
        );
        assert!(PathSearch::new(Bounds::new(5, -1)).is_err());
        let mut ps = PathSearch::new(Bounds::new(3, 3)).unwrap();
        assert!(ps.set_bounds(Bounds::new(-3, 3)).is_err());
        assert_eq!(ps.bounds(), Bounds::new(3, 3));
    }

    #[test]
    fn index_round_trip() {
        let ps = PathSearch::new(Bounds::new(7, 4)).unwrap();
        for p in ps.bounds().range() {
            let i = ps.idx(p).unwrap();
            assert_eq!(ps.point(i), p);
        }
        assert_eq!(ps.idx(Point::new(7, 0)), None);
        assert_eq!(ps.idx(Point::new(0, -1)), None);
    }

    #[test]
    fn set_bounds_smaller_preserves_capacity() {
        let mut ps = PathSearch::new(Bounds::new(20, 20)).unwrap();
        let original_cap = ps.nodes.len();

        ps.set_bounds(Bounds::new(5, 5)).unwrap();
        assert_eq!(ps.bounds(), Bounds::new(5, 5));
        assert_eq!(ps.nodes.len(), original_cap);
        assert_eq!(ps.width, 5);
        assert!(ps.generation > 0);
    }

    #[test]
    fn set_bounds_larger_reallocates() {
        let mut ps = PathSearch::new(Bounds::new(5, 5)).unwrap();
        ps.set_bounds(Bounds::new(20, 20)).unwrap();
        assert_eq!(ps.nodes.len(), 400);
        assert_eq!(ps.generation, 0);
    }

    #[test]
    fn generation_wrap_resets_stamps() {
        let mut ps = PathSearch::new(Bounds::new(2, 2)).unwrap();
        ps.nodes[3].generation = 1;
        ps.generation = u32::MAX;
        assert_eq!(ps.next_generation(), 1);
        assert!(ps.nodes.iter().all(|n| n.generation == 0));
    }

    #[test]
    fn open_set_orders_by_f_then_g_then_coord() {
        let mut heap = BinaryHeap::new();
        let entry = |x: i32, y: i32, f: i32, g: i32| NodeRef {
            idx: 0,
            pos: Point::new(x, y),
            f,
            g,
        };
        heap.push(entry(0, 0, 6, 3));
        heap.push(entry(1, 0, 5, 4));
        heap.push(entry(2, 0, 5, 2));
        heap.push(entry(0, 1, 5, 2));
        let order: Vec<Point> = std::iter::from_fn(|| heap.pop().map(|n| n.pos)).collect();
        assert_eq!(
            order,
            vec![
                Point::new(0, 1),
                Point::new(2, 0),
                Point::new(1, 0),
                Point::new(0, 0),
            ]
        );
    }
}
