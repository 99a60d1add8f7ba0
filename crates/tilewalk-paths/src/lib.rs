//! Pathfinding and path following for tile-based games.
//!
//! Two pieces, usable independently:
//!
//! - **Search**: A\* over a 4-connected grid ([`find_path`],
//!   [`PathSearch::find_path`]) against any [`PassabilityOracle`].
//! - **Following**: [`PathFollower`] moves an agent's pixel position along a
//!   [`Path`] one tick at a time and reports arrival.
//!
//! A search that finds no route returns `Ok(None)`. Errors ([`PathError`])
//! are reserved for API misuse such as malformed bounds or an empty path.
//!
//! ```
//! use tilewalk_core::Point;
//! use tilewalk_paths::{FollowerConfig, FollowerStatus, PassMap, PathFollower, find_path};
//!
//! let map = PassMap::from_ascii(
//!     "
//!     ....
//!     .##.
//!     ....
//!     ",
//! )?;
//! let path = find_path(Point::new(0, 1), Point::new(3, 1), map.bounds(), &map)?
//!     .expect("route exists");
//! assert_eq!(path.cost(), 5);
//!
//! let mut agent = PathFollower::at_tile(path.start(), FollowerConfig::default())?;
//! agent.assign(path);
//! while agent.step() != FollowerStatus::Arrived {}
//! assert_eq!(agent.tile(), Point::new(3, 1));
//! # Ok::<(), tilewalk_paths::PathError>(())
//! ```

mod astar;
mod distance;
mod error;
mod follower;
mod neighbors;
mod passmap;
mod path;
mod search;
mod traits;

pub use astar::find_path;
pub use distance::manhattan;
pub use error::PathError;
pub use follower::{FollowerConfig, FollowerState, FollowerStatus, PathFollower};
pub use neighbors::Neighbors;
pub use passmap::{BLOCKED_CHAR, PassMap};
pub use path::Path;
pub use search::PathSearch;
pub use traits::PassabilityOracle;
