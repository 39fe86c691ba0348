/// A position on the board, as (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

#[rustfmt::skip]
const MOORE: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// `None` when the shifted cell would leave the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.col.checked_add(dx)?, self.row.checked_add(dy)?))
    }

    /// The eight surrounding cells, skipping any that overflow.
    pub fn moore(self) -> impl Iterator<Item = Cell> {
        MOORE.iter().filter_map(move |&(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moore_has_eight_distinct_neighbors() {
        let c = Cell::new(3, 4);
        let mut n: Vec<Cell> = c.moore().collect();
        n.sort();
        n.dedup();
        assert_eq!(n.len(), 8);
        assert!(!n.contains(&c));
        assert!(n
            .iter()
            .all(|m| (m.col - c.col).abs() <= 1 && (m.row - c.row).abs() <= 1));
    }

    #[test]
    fn moore_skips_overflow() {
        let corner = Cell::new(i32::MAX, i32::MIN);
        assert_eq!(corner.moore().count(), 3);
    }
}
