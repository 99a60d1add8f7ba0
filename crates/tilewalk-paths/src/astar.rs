use tilewalk_core::{Bounds, Point};

use crate::distance::manhattan;
use crate::error::PathError;
use crate::path::Path;
use crate::search::{NO_PARENT, NodeRef, PathSearch, UNREACHABLE};
use crate::traits::PassabilityOracle;

/// Compute a shortest 4-connected path from `start` to `goal` on a
/// `bounds`-sized map.
///
/// One-shot convenience over [`PathSearch::find_path`] with a fresh
/// searcher. Returns `Ok(None)` when no route exists (including blocked or
/// off-map endpoints) and `Err` only for malformed bounds or negative
/// coordinates.
pub fn find_path<O: PassabilityOracle>(
    start: Point,
    goal: Point,
    bounds: Bounds,
    oracle: &O,
) -> Result<Option<Path>, PathError> {
    PathSearch::new(bounds)?.find_path(start, goal, oracle)
}

impl PathSearch {
    /// Compute the shortest path from `start` to `goal` using A*.
    ///
    /// Moves are up/down/left/right with unit cost and the heuristic is the
    /// Manhattan distance, so the first time `goal` leaves the open set its
    /// cost is optimal. The open set pops by `(f, g)` and then by coordinate,
    /// which makes the chosen path deterministic among equal-cost routes.
    ///
    /// The oracle is only asked about in-bounds tiles.
    pub fn find_path<O: PassabilityOracle>(
        &mut self,
        start: Point,
        goal: Point,
        oracle: &O,
    ) -> Result<Option<Path>, PathError> {
        for p in [start, goal] {
            if !p.is_non_negative() {
                return Err(PathError::NegativeCoord(p));
            }
        }
        let (Some(start_idx), Some(goal_idx)) = (self.idx(start), self.idx(goal)) else {
            log::warn!(
                "path endpoints {start} -> {goal} are outside the {} map",
                self.bounds
            );
            return Ok(None);
        };
        if !oracle.is_passable(start) || !oracle.is_passable(goal) {
            log::warn!("path endpoint is not passable: {start} -> {goal}");
            return Ok(None);
        }
        if start_idx == goal_idx {
            return Ok(Some(Path::single(start)));
        }

        let cur_gen = self.next_generation();
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.parent = NO_PARENT;
            node.generation = cur_gen;
            node.closed = false;
        }

        self.open.clear();
        self.open.push(NodeRef {
            idx: start_idx,
            pos: start,
            f: manhattan(start, goal),
            g: 0,
        });

        let bounds = self.bounds;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Lazy deletion: a tile may sit in the heap several times.
            if self.nodes[ci].closed {
                continue;
            }
            self.nodes[ci].closed = true;

            if ci == goal_idx {
                break 'search true;
            }

            let tentative_g = self.nodes[ci].g + 1;
            let keep = |n: Point| bounds.contains(n) && oracle.is_passable(n);

            for &np in nbuf.cardinal(current.pos, keep) {
                let Some(ni) = self.idx(np) else {
                    continue;
                };

                let n = &mut self.nodes[ni];
                if n.generation != cur_gen {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                    n.parent = NO_PARENT;
                    n.closed = false;
                }
                if tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.parent = ci;

                self.open.push(NodeRef {
                    idx: ni,
                    pos: np,
                    f: tentative_g + manhattan(np, goal),
                    g: tentative_g,
                });
            }
        };

        self.nbuf = nbuf;
        self.open.clear();

        if !found {
            log::debug!("no route from {start} to {goal}");
            return Ok(None);
        }

        let mut waypoints = Vec::with_capacity(self.nodes[goal_idx].g as usize + 1);
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            waypoints.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        waypoints.reverse();

        log::debug!(
            "route {start} -> {goal}: {} tiles, cost {}",
            waypoints.len(),
            waypoints.len() - 1
        );
        Ok(Some(Path::from_search(waypoints)))
    }
}
