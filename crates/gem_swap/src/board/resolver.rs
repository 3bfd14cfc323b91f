use thiserror::Error;

use super::cell::Cell;

/// Two distinct, orthogonally adjacent cells that may trade places.
///
/// Only [`resolve_swap`] builds one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapRequest {
    start: Cell,
    destination: Cell,
}

impl SwapRequest {
    pub const fn start(&self) -> Cell {
        self.start
    }

    pub const fn destination(&self) -> Cell {
        self.destination
    }
}

/// Why a finished drag does not swap anything.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRejection {
    #[error("Released on the starting cell")]
    Tap,

    #[error("Diagonal drag ({dcol}, {drow}) is not a swap direction")]
    Diagonal { dcol: i32, drow: i32 },

    #[error("Swap destination is outside the board")]
    OutOfBounds,
}

impl SwapRejection {
    /// Taps and diagonals are gesture problems, not position problems.
    pub const fn is_invalid_gesture(self) -> bool {
        matches!(self, Self::Tap | Self::Diagonal { .. })
    }
}

/// Turns a drag from `start` to `end` into a one-cell swap.
///
/// The displacement is reduced to its sign on each axis, so dragging three
/// cells to the right still swaps with the right-hand neighbour only.
pub fn resolve_swap(
    start: Cell,
    end: Cell,
    columns: u32,
    rows: u32,
) -> Result<SwapRequest, SwapRejection> {
    if start == end {
        return Err(SwapRejection::Tap);
    }

    let dcol = step(start.col, end.col);
    let drow = step(start.row, end.row);
    if dcol != 0 && drow != 0 {
        return Err(SwapRejection::Diagonal { dcol, drow });
    }

    let destination = start
        .offset(dcol, drow)
        .filter(|cell| cell.is_within(columns, rows))
        .ok_or(SwapRejection::OutOfBounds)?;

    Ok(SwapRequest { start, destination })
}

fn step(from: u32, to: u32) -> i32 {
    match to.cmp(&from) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLUMNS: u32 = 8;
    const ROWS: u32 = 5;

    fn resolve(start: (u32, u32), end: (u32, u32)) -> Result<SwapRequest, SwapRejection> {
        resolve_swap(
            Cell::new(start.0, start.1),
            Cell::new(end.0, end.1),
            COLUMNS,
            ROWS,
        )
    }

    #[test]
    fn release_on_the_start_cell_is_a_tap() {
        assert_eq!(resolve((3, 3), (3, 3)), Err(SwapRejection::Tap), "tap");
    }

    #[test]
    fn one_step_right_swaps_with_the_neighbour() {
        let request = resolve((2, 2), (3, 2)).expect("orthogonal step");
        assert_eq!(request.start(), Cell::new(2, 2), "start is kept");
        assert_eq!(request.destination(), Cell::new(3, 2), "right neighbour");
    }

    #[test]
    fn long_drags_collapse_to_a_single_step() {
        let cases = [
            ((4, 2), (7, 2), (5, 2)),
            ((4, 2), (0, 2), (3, 2)),
            ((4, 2), (4, 4), (4, 3)),
            ((4, 2), (4, 0), (4, 1)),
        ];
        for (start, end, expected) in cases {
            let request = resolve(start, end).expect("orthogonal drag");
            assert_eq!(
                request.destination(),
                Cell::new(expected.0, expected.1),
                "drag {start:?} -> {end:?}"
            );
        }
    }

    #[test]
    fn any_diagonal_is_rejected() {
        for end in [(1, 1), (5, 4), (3, 0), (0, 4)] {
            assert!(
                matches!(resolve((2, 2), end), Err(SwapRejection::Diagonal { .. })),
                "drag to {end:?} is diagonal"
            );
        }
        assert_eq!(
            resolve((0, 0), (1, 1)),
            Err(SwapRejection::Diagonal { dcol: 1, drow: 1 }),
            "diagonal from the corner"
        );
    }

    #[test]
    fn destination_past_the_edge_is_rejected() {
        assert_eq!(
            resolve((7, 4), (8, 4)),
            Err(SwapRejection::OutOfBounds),
            "right of the last column"
        );
        assert_eq!(
            resolve((7, 4), (7, 9)),
            Err(SwapRejection::OutOfBounds),
            "below the last row"
        );
    }

    #[test]
    fn rejection_taxonomy() {
        assert!(SwapRejection::Tap.is_invalid_gesture(), "tap");
        assert!(
            SwapRejection::Diagonal { dcol: 1, drow: -1 }.is_invalid_gesture(),
            "diagonal"
        );
        assert!(!SwapRejection::OutOfBounds.is_invalid_gesture(), "bounds");
    }
}
