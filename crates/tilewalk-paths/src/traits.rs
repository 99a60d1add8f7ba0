use tilewalk_core::Point;

/// Answers whether a tile may be occupied or traversed.
///
/// Searches borrow the oracle immutably for their whole duration and only
/// query in-bounds tiles, so an implementation never sees coordinates
/// outside the grid it was searched against.
pub trait PassabilityOracle {
    /// Whether the tile at `p` is walkable.
    fn is_passable(&self, p: Point) -> bool;
}

impl<F> PassabilityOracle for F
where
    F: Fn(Point) -> bool,
{
    #[inline]
    fn is_passable(&self, p: Point) -> bool {
        self(p)
    }
}
