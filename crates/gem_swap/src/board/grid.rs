use std::sync::Arc;

use bevy::prelude::*;
use strum::{Display, EnumIter, IntoEnumIterator};
use thiserror::Error;

use super::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PieceKind {
    #[default]
    Red,
    Blue,
    Green,
}

impl PieceKind {
    pub fn color(self) -> Color {
        match self {
            Self::Red => Color::srgb_u8(0xFF, 0x41, 0x36),
            Self::Blue => Color::srgb_u8(0x00, 0x74, 0xD9),
            Self::Green => Color::srgb_u8(0x2E, 0xCC, 0x40),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must have at least one row and one column")]
    Empty,

    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Cell {cell} is outside the grid")]
    OutOfBounds { cell: Cell },

    #[error("Cannot swap cell {cell} with itself")]
    SameCell { cell: Cell },
}

/// Rows of piece kinds, all rows the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<PieceKind>>,
    columns: u32,
}

impl Grid {
    pub fn from_rows(rows: Vec<Vec<PieceKind>>) -> Result<Self, GridError> {
        let expected = rows.first().map_or(0, Vec::len);
        if expected == 0 {
            return Err(GridError::Empty);
        }
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != expected)
        {
            return Err(GridError::RaggedRows {
                row,
                expected,
                actual: cells.len(),
            });
        }

        Ok(Self {
            columns: expected as u32,
            rows,
        })
    }

    /// Fills every cell with a uniformly chosen piece kind.
    pub fn random(columns: u32, rows: u32, rng: &mut fastrand::Rng) -> Result<Self, GridError> {
        let rows = (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| rng.choice(PieceKind::iter()).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self::from_rows(rows)
    }

    pub const fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.is_within(self.columns(), self.rows())
    }

    pub fn get(&self, cell: Cell) -> Option<PieceKind> {
        self.rows
            .get(cell.row as usize)?
            .get(cell.col as usize)
            .copied()
    }

    /// Cells in row-major order with their pieces.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, PieceKind)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, kind)| (Cell::new(col as u32, row as u32), *kind))
        })
    }

    fn swapped(&self, a: Cell, b: Cell) -> Result<Self, GridError> {
        for cell in [a, b] {
            if !self.contains(cell) {
                return Err(GridError::OutOfBounds { cell });
            }
        }
        if a == b {
            return Err(GridError::SameCell { cell: a });
        }

        let (Some(kind_a), Some(kind_b)) = (self.get(a), self.get(b)) else {
            return Err(GridError::OutOfBounds { cell: a });
        };

        let mut next = self.clone();
        next.put(a, kind_b);
        next.put(b, kind_a);
        Ok(next)
    }

    fn put(&mut self, cell: Cell, kind: PieceKind) {
        if let Some(slot) = self
            .rows
            .get_mut(cell.row as usize)
            .and_then(|cells| cells.get_mut(cell.col as usize))
        {
            *slot = kind;
        }
    }
}

/// The published grid. Every committed swap replaces the whole snapshot, so a
/// reader either sees the grid before the swap or after it, never half of it.
#[derive(Debug, Clone)]
pub struct GridState {
    current: Arc<Grid>,
    version: u64,
}

impl GridState {
    pub fn new(grid: Grid) -> Self {
        Self {
            current: Arc::new(grid),
            version: 0,
        }
    }

    pub fn read(&self) -> Arc<Grid> {
        Arc::clone(&self.current)
    }

    /// Number of swaps committed so far.
    pub const fn version(&self) -> u64 {
        self.version
    }

    pub fn commit_swap(&mut self, a: Cell, b: Cell) -> Result<(), GridError> {
        let next = self.current.swapped(a, b)?;
        self.current = Arc::new(next);
        self.version += 1;
        Ok(())
    }
}
