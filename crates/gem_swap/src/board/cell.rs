use std::fmt::{self, Display, Formatter};

/// A (column, row) position on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

impl Cell {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Moves by a signed step, `None` when the result would be negative.
    pub const fn offset(self, dcol: i32, drow: i32) -> Option<Self> {
        let Some(col) = self.col.checked_add_signed(dcol) else {
            return None;
        };
        let Some(row) = self.row.checked_add_signed(drow) else {
            return None;
        };
        Some(Self { col, row })
    }

    pub const fn is_within(self, columns: u32, rows: u32) -> bool {
        self.col < columns && self.row < rows
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_in_the_non_negative_quadrant() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.offset(-1, 0), None, "column would go negative");
        assert_eq!(origin.offset(0, -1), None, "row would go negative");
        assert_eq!(
            origin.offset(1, 0),
            Some(Cell::new(1, 0)),
            "one step right from the origin"
        );
        assert_eq!(
            Cell::new(3, 2).offset(0, -1),
            Some(Cell::new(3, 1)),
            "one step up"
        );
    }

    #[test]
    fn within_excludes_the_far_edges() {
        assert!(Cell::new(7, 4).is_within(8, 5), "last cell of an 8x5 board");
        assert!(!Cell::new(8, 4).is_within(8, 5), "column past the right edge");
        assert!(!Cell::new(7, 5).is_within(8, 5), "row past the bottom edge");
    }
}
