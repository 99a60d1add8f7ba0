//! Per-agent path following.
//!
//! A [`PathFollower`] owns an agent's continuous pixel position and walks it
//! along a [`Path`] one tick at a time. Each waypoint tile maps to its
//! top-left pixel (`tile * tile_size`); movement is applied per axis and
//! snaps onto the target instead of overshooting it.

use tilewalk_core::{PixelPos, Point};

use crate::error::PathError;
use crate::path::Path;

/// Movement tuning for a follower.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FollowerConfig {
    /// Pixels moved per axis per tick.
    pub speed: f32,
    /// Edge length of one tile in pixels.
    pub tile_size: f32,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            tile_size: 8.0,
        }
    }
}

impl FollowerConfig {
    /// Reject non-finite or non-positive values.
    pub fn validate(&self) -> Result<(), PathError> {
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(PathError::InvalidSpeed(self.speed));
        }
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(PathError::InvalidTileSize(self.tile_size));
        }
        Ok(())
    }
}

/// Where a follower is in its lifecycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FollowerState {
    /// No path, nothing to do.
    #[default]
    Idle,
    /// Walking toward `path[index]`.
    Following { path: Path, index: usize },
    /// Every waypoint reached; the next `step` reports arrival once.
    Arrived { path: Path },
}

/// What a single [`PathFollower::step`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FollowerStatus {
    /// No path assigned; position unchanged.
    Idle,
    /// Moved toward `waypoint` (possibly reaching it).
    Moving { waypoint: Point },
    /// One-shot signal: the previous path has been completed and cleared.
    Arrived,
}

/// Drives one agent along a path.
#[derive(Clone, Debug)]
pub struct PathFollower {
    position: PixelPos,
    config: FollowerConfig,
    state: FollowerState,
}

impl PathFollower {
    /// Create an idle follower at `position`.
    pub fn new(position: PixelPos, config: FollowerConfig) -> Result<Self, PathError> {
        config.validate()?;
        check_position(position)?;
        Ok(Self {
            position,
            config,
            state: FollowerState::Idle,
        })
    }

    /// Create an idle follower standing on the top-left pixel of `tile`.
    pub fn at_tile(tile: Point, config: FollowerConfig) -> Result<Self, PathError> {
        Self::new(PixelPos::from_tile(tile, config.tile_size), config)
    }

    /// Start following `path` from its first waypoint, discarding any
    /// progress on a previous path.
    pub fn assign(&mut self, path: Path) {
        log::debug!(
            "following new path {} -> {} ({} waypoints)",
            path.start(),
            path.goal(),
            path.len()
        );
        self.state = FollowerState::Following { path, index: 0 };
    }

    /// Like [`assign`](Self::assign) for raw waypoints. An empty list is
    /// rejected with [`PathError::EmptyPath`] and leaves the state untouched.
    pub fn assign_waypoints(&mut self, waypoints: Vec<Point>) -> Result<(), PathError> {
        let path = Path::new(waypoints)?;
        self.assign(path);
        Ok(())
    }

    /// Drop the current path and go idle immediately.
    pub fn cancel(&mut self) {
        if !self.is_idle() {
            log::debug!("path cancelled at {}", self.position);
        }
        self.state = FollowerState::Idle;
    }

    /// Advance one tick.
    pub fn step(&mut self) -> FollowerStatus {
        match std::mem::take(&mut self.state) {
            FollowerState::Idle => FollowerStatus::Idle,
            FollowerState::Arrived { path } => {
                log::info!("arrived at {}", path.goal());
                FollowerStatus::Arrived
            }
            FollowerState::Following { path, index } => {
                let (state, status) = self.advance(path, index);
                self.state = state;
                status
            }
        }
    }

    fn advance(&mut self, path: Path, mut index: usize) -> (FollowerState, FollowerStatus) {
        let tile_size = self.config.tile_size;

        // Waypoints the agent already stands on cost no movement.
        while index < path.len() && self.position == PixelPos::from_tile(path[index], tile_size)
        {
            index += 1;
        }
        if index == path.len() {
            let waypoint = path.goal();
            return (
                FollowerState::Arrived { path },
                FollowerStatus::Moving { waypoint },
            );
        }

        let waypoint = path[index];
        let target = PixelPos::from_tile(waypoint, tile_size);
        let speed = self.config.speed;
        self.position.x = approach(self.position.x, target.x, speed);
        self.position.y = approach(self.position.y, target.y, speed);
        log::trace!("toward {waypoint}: now at {}", self.position);

        if self.position == target {
            index += 1;
        }
        let state = if index == path.len() {
            FollowerState::Arrived { path }
        } else {
            FollowerState::Following { path, index }
        };
        (state, FollowerStatus::Moving { waypoint })
    }

    /// Current pixel position.
    #[inline]
    pub fn position(&self) -> PixelPos {
        self.position
    }

    /// Teleport the agent. Does not change the assigned path. A non-finite
    /// position is rejected and the agent stays where it was.
    pub fn set_position(&mut self, position: PixelPos) -> Result<(), PathError> {
        check_position(position)?;
        self.position = position;
        Ok(())
    }

    /// Tile under the agent's top-left pixel.
    pub fn tile(&self) -> Point {
        // tile_size is validated positive and finite on construction.
        let ts = self.config.tile_size;
        Point::new(
            (self.position.x / ts).floor() as i32,
            (self.position.y / ts).floor() as i32,
        )
    }

    #[inline]
    pub fn config(&self) -> FollowerConfig {
        self.config
    }

    #[inline]
    pub fn state(&self) -> &FollowerState {
        &self.state
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self.state, FollowerState::Idle)
    }

    /// The path being followed or just completed.
    pub fn path(&self) -> Option<&Path> {
        match &self.state {
            FollowerState::Idle => None,
            FollowerState::Following { path, .. } | FollowerState::Arrived { path } => Some(path),
        }
    }

    /// `(next waypoint index, waypoint count)`, or `None` when idle.
    pub fn progress(&self) -> Option<(usize, usize)> {
        match &self.state {
            FollowerState::Idle => None,
            FollowerState::Following { path, index } => Some((*index, path.len())),
            FollowerState::Arrived { path } => Some((path.len(), path.len())),
        }
    }

    /// Waypoints not reached yet.
    pub fn remaining(&self) -> &[Point] {
        match &self.state {
            FollowerState::Following { path, index } => &path[*index..],
            _ => &[],
        }
    }
}

fn check_position(position: PixelPos) -> Result<(), PathError> {
    if position.x.is_finite() && position.y.is_finite() {
        Ok(())
    } else {
        Err(PathError::InvalidPosition(position))
    }
}

/// Move `cur` toward `target` by at most `speed`, snapping when close enough.
///
/// Far from the origin a step can be smaller than the gap between adjacent
/// `f32` values; the move then rounds back to `cur` and we snap instead.
#[inline]
fn approach(cur: f32, target: f32, speed: f32) -> f32 {
    let d = target - cur;
    if d.abs() <= speed {
        return target;
    }
    let next = cur + speed.copysign(d);
    if next == cur { target } else { next }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let cfg: FollowerConfig = serde_json::from_str(r#"{"speed": 2.5}"#).unwrap();
        assert_eq!(cfg.speed, 2.5);
        assert_eq!(cfg.tile_size, 8.0);
        let json = serde_json::to_string(&FollowerConfig::default()).unwrap();
        let back: FollowerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, FollowerConfig::default());
    }
}
