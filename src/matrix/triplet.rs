//! Coordinate-form matrix entries.

/// A single `(row, col, value)` entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet<T> {
    pub row: usize,
    pub col: usize,
    pub value: T,
}

impl<T> Triplet<T> {
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Row-major sort key: row first, then column.
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

/// Sort entries row-major, the order compressed-row construction expects.
pub fn sort_row_major<T>(triplets: &mut [Triplet<T>]) {
    triplets.sort_unstable_by_key(Triplet::key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_order() {
        let mut t = vec![
            Triplet::new(1, 0, 3.0),
            Triplet::new(0, 2, 2.0),
            Triplet::new(1, 1, 4.0),
            Triplet::new(0, 0, 1.0),
        ];
        sort_row_major(&mut t);
        let keys: Vec<_> = t.iter().map(Triplet::key).collect();
        assert_eq!(keys, vec![(0, 0), (0, 2), (1, 0), (1, 1)]);
        assert_eq!(t[3].value, 4.0);
    }
}
