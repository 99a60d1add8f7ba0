//! Shared click-to-walk scene used by the demo binaries.
//!
//! Demonstrates: ASCII maps, A* on click, re-targeting mid-walk, and
//! per-tick path following with a text overlay of the remaining route.

use rand::Rng;
use tilewalk_core::Point;
use tilewalk_paths::{FollowerConfig, FollowerStatus, PassMap, PathError, PathFollower, PathSearch};

/// 20×15 map; `#` is wall.
pub const MAP: &str = "
....................
....................
..######....####....
.......#.......#....
.......#.......#....
..#....#...........#
..#....#######.....#
..#..........#.....#
..#..........#.....#
..######.....#######
.........#..........
.........#..........
..####...#....####..
.....#...#....#.....
.....#...#....#.....
";

/// Starting tile of the agent.
pub const SPAWN: Point = Point::new(6, 5);

/// Result of clicking a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A route was found and the agent is walking it.
    Routed { waypoints: usize },
    /// The tile is on the map but cannot be reached; the agent stops.
    NoRoute,
    /// The click landed outside the map and was ignored.
    OffMap,
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// A map, one agent, and the searcher used to route it.
pub struct Scene {
    map: PassMap,
    search: PathSearch,
    agent: PathFollower,
    destination: Option<Point>,
}

impl Scene {
    pub fn new(map: PassMap, spawn: Point, config: FollowerConfig) -> Result<Self, PathError> {
        let search = PathSearch::new(map.bounds())?;
        let agent = PathFollower::at_tile(spawn, config)?;
        Ok(Self {
            map,
            search,
            agent,
            destination: None,
        })
    }

    /// Route the agent from its current tile to `target`.
    pub fn click(&mut self, target: Point) -> Result<ClickOutcome, PathError> {
        if !self.map.bounds().contains(target) {
            log::info!("click {target} is off the map");
            return Ok(ClickOutcome::OffMap);
        }
        let start = self.agent.tile();
        match self.search.find_path(start, target, &self.map)? {
            Some(path) => {
                let waypoints = path.len();
                self.agent.assign(path);
                self.destination = Some(target);
                Ok(ClickOutcome::Routed { waypoints })
            }
            None => {
                self.agent.cancel();
                self.destination = None;
                Ok(ClickOutcome::NoRoute)
            }
        }
    }

    /// Advance the agent one tick.
    pub fn tick(&mut self) -> FollowerStatus {
        let status = self.agent.step();
        if status == FollowerStatus::Arrived {
            self.destination = None;
        }
        status
    }

    /// Tick until the agent is idle, returning the number of ticks taken.
    pub fn run_to_idle(&mut self, max_ticks: usize) -> usize {
        let mut ticks = 0;
        while !self.agent.is_idle() && ticks < max_ticks {
            self.tick();
            ticks += 1;
        }
        ticks
    }

    pub fn agent(&self) -> &PathFollower {
        &self.agent
    }

    pub fn map(&self) -> &PassMap {
        &self.map
    }

    pub fn destination(&self) -> Option<Point> {
        self.destination
    }

    /// A uniformly chosen walkable tile, or `None` when the map is all wall.
    pub fn random_floor<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point> {
        let count = self.map.passable_count();
        if count == 0 {
            return None;
        }
        self.map.passable_tiles().nth(rng.random_range(0..count))
    }

    /// Draw the map: `@` agent, `X` destination, `*` remaining route.
    pub fn render(&self) -> String {
        let bounds = self.map.bounds();
        let here = self.agent.tile();
        let remaining = self.agent.remaining();
        let mut out = String::with_capacity(bounds.area() + bounds.height as usize);
        for y in 0..bounds.height {
            for x in 0..bounds.width {
                let p = Point::new(x, y);
                let c = if p == here {
                    '@'
                } else if Some(p) == self.destination {
                    'X'
                } else if remaining.contains(&p) {
                    '*'
                } else if self.map.is_passable(p) {
                    '.'
                } else {
                    '#'
                };
                out.push(c);
            }
            out.push('\n');
        }
        out
    }

    /// One-line status, e.g. `tile (6, 5) | path 3/12`.
    pub fn status_line(&self) -> String {
        match self.agent.progress() {
            Some((index, len)) => format!("tile {} | path {index}/{len}", self.agent.tile()),
            None => format!("tile {} | idle", self.agent.tile()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        let map = PassMap::from_ascii(MAP).unwrap();
        Scene::new(map, SPAWN, FollowerConfig::default()).unwrap()
    }

    #[test]
    fn demo_map_is_well_formed() {
        let map = PassMap::from_ascii(MAP).unwrap();
        assert_eq!(map.bounds().width, 20);
        assert_eq!(map.bounds().height, 15);
        assert!(map.is_passable(SPAWN));
    }

    #[test]
    fn click_walks_agent_to_target() {
        let mut s = scene();
        let target = Point::new(17, 13);
        assert!(matches!(s.click(target).unwrap(), ClickOutcome::Routed { .. }));
        assert_eq!(s.destination(), Some(target));
        s.run_to_idle(10_000);
        assert_eq!(s.agent().tile(), target);
        assert_eq!(s.destination(), None);
    }

    #[test]
    fn blocked_and_offmap_clicks() {
        let mut s = scene();
        assert_eq!(s.click(Point::new(2, 2)).unwrap(), ClickOutcome::NoRoute);
        assert_eq!(s.click(Point::new(20, 0)).unwrap(), ClickOutcome::OffMap);
        assert_eq!(s.click(Point::new(-1, 0)).unwrap(), ClickOutcome::OffMap);
        assert!(s.agent().is_idle());
    }

    #[test]
    fn retarget_mid_walk_replans_from_current_tile() {
        let mut s = scene();
        s.click(Point::new(19, 0)).unwrap();
        for _ in 0..20 {
            s.tick();
        }
        let here = s.agent().tile();
        s.click(Point::new(0, 14)).unwrap();
        assert_eq!(s.agent().progress().map(|(i, _)| i), Some(0));
        assert_eq!(s.agent().path().map(|p| p.start()), Some(here));
        s.run_to_idle(10_000);
        assert_eq!(s.agent().tile(), Point::new(0, 14));
    }

    #[test]
    fn render_marks_agent_and_route() {
        let mut s = scene();
        s.click(Point::new(6, 7)).unwrap();
        let frame = s.render();
        let rows: Vec<&str> = frame.lines().collect();
        assert_eq!(rows.len(), 15);
        assert_eq!(rows[5].chars().nth(6), Some('@'));
        assert_eq!(rows[7].chars().nth(6), Some('X'));
        assert!(frame.contains('*'));
        assert_eq!(s.status_line(), "tile (6, 5) | path 0/3");
    }

    #[test]
    fn random_floor_picks_walkable_tiles() {
        use rand::SeedableRng;

        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let s = scene();
        for _ in 0..20 {
            let p = s.random_floor(&mut rng).unwrap();
            assert!(s.map().is_passable(p));
        }

        let walls = PassMap::from_ascii("##\n##").unwrap();
        let s = Scene::new(walls, Point::ZERO, FollowerConfig::default()).unwrap();
        assert_eq!(s.random_floor(&mut rng), None);
    }
}
