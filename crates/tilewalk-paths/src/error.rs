use tilewalk_core::{Bounds, PixelPos, Point};

/// Misuse of the pathfinding API by the calling layer.
///
/// "No route exists" is not an error: searches report it as `Ok(None)`.
/// Every variant here is a programmer error that should be fixed at the
/// call site, not retried.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PathError {
    /// Grid width or height is zero or negative.
    #[error("invalid grid bounds {0}: width and height must be positive")]
    InvalidBounds(Bounds),

    /// A search endpoint has a negative component.
    #[error("tile coordinate {0} is negative")]
    NegativeCoord(Point),

    /// A path was built from an empty waypoint list.
    #[error("path must contain at least one waypoint")]
    EmptyPath,

    #[error("follower speed must be positive and finite, got {0}")]
    InvalidSpeed(f32),

    #[error("tile size must be positive and finite, got {0}")]
    InvalidTileSize(f32),

    /// A follower was placed at a NaN or infinite pixel position.
    #[error("follower position {0} is not finite")]
    InvalidPosition(PixelPos),

    /// Tile data does not cover the declared bounds exactly.
    #[error("map {bounds} needs {expected} tiles, got {actual}")]
    MapSizeMismatch {
        bounds: Bounds,
        expected: usize,
        actual: usize,
    },

    /// A row of an ASCII map differs in width from the first row.
    #[error("map row {row} is {actual} tiles wide, expected {expected}")]
    RaggedMap {
        row: usize,
        expected: usize,
        actual: usize,
    },
}
