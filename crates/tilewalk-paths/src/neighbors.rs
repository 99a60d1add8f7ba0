use tilewalk_core::Point;

/// Cached neighbor computation helper.
///
/// Enumerates the 4-directional neighbors of a grid point in the fixed
/// order up, down, left, right, filtered by a predicate. The buffer is
/// reused between calls so expansion does not allocate.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p` for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for n in p.cardinal_neighbors() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order_and_filters() {
        let mut nb = Neighbors::new();
        let all = nb.cardinal(Point::new(1, 1), |_| true).to_vec();
        assert_eq!(
            all,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );

        let in_corner = nb.cardinal(Point::new(0, 0), |n| n.is_non_negative());
        assert_eq!(in_corner, &[Point::new(0, 1), Point::new(1, 0)]);
    }
}
