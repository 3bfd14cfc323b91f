use bevy::prelude::*;

use super::cell::Cell;

/// Maps a screen position to the cell under it.
///
/// `bounds` is the board's on-screen rectangle with y pointing down, so
/// `bounds.min` is the top-left corner. The min edges are inside, the max
/// edges are outside.
pub fn cell_at(position: Vec2, bounds: Rect, cell_size: f32) -> Option<Cell> {
    if !position.is_finite() || cell_size.is_nan() || cell_size <= 0.0 {
        return None;
    }
    if position.x < bounds.min.x
        || position.y < bounds.min.y
        || position.x >= bounds.max.x
        || position.y >= bounds.max.y
    {
        return None;
    }

    let local = (position - bounds.min) / cell_size;
    Some(Cell::new(local.x.floor() as u32, local.y.floor() as u32))
}

/// Where the board sits on screen and how big it is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    bounds: Rect,
    cell_size: f32,
    columns: u32,
    rows: u32,
}

impl BoardLayout {
    /// Layout with its top-left corner at `origin`; the bounds cover exactly
    /// `columns × rows` cells.
    pub fn new(origin: Vec2, cell_size: f32, columns: u32, rows: u32) -> Self {
        let size = Vec2::new(columns as f32, rows as f32) * cell_size;
        Self {
            bounds: Rect::from_corners(origin, origin + size),
            cell_size,
            columns,
            rows,
        }
    }

    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    pub const fn columns(&self) -> u32 {
        self.columns
    }

    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Board extent in pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.columns as f32, self.rows as f32) * self.cell_size
    }

    /// Replaces the on-screen rectangle supplied by the rendering layer.
    pub const fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn cell_at(&self, position: Vec2) -> Option<Cell> {
        cell_at(position, self.bounds, self.cell_size)
            .filter(|cell| cell.is_within(self.columns, self.rows))
    }

    /// Center of `cell` in board space (origin at the top-left corner, y down).
    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        (Vec2::new(cell.col as f32, cell.row as f32) + 0.5) * self.cell_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardLayout {
        BoardLayout::new(Vec2::new(10.0, 20.0), 32.0, 8, 5)
    }

    #[test]
    fn maps_interior_positions_by_floor() {
        let layout = board();
        assert_eq!(
            layout.cell_at(Vec2::new(10.0, 20.0)),
            Some(Cell::new(0, 0)),
            "top-left corner is inside"
        );
        assert_eq!(
            layout.cell_at(Vec2::new(10.0 + 32.0 * 2.5, 20.0 + 32.0 * 1.9)),
            Some(Cell::new(2, 1)),
            "interior point"
        );
        assert_eq!(
            layout.cell_at(Vec2::new(10.0 + 255.9, 20.0 + 159.9)),
            Some(Cell::new(7, 4)),
            "just inside the bottom-right corner"
        );
    }

    #[test]
    fn far_edges_and_outside_positions_map_to_nothing() {
        let layout = board();
        let bounds = layout.bounds();
        assert_eq!(
            layout.cell_at(Vec2::new(bounds.max.x, 40.0)),
            None,
            "right edge is outside"
        );
        assert_eq!(
            layout.cell_at(Vec2::new(40.0, bounds.max.y)),
            None,
            "bottom edge is outside"
        );
        assert_eq!(
            layout.cell_at(Vec2::new(9.9, 40.0)),
            None,
            "left of the board"
        );
        assert_eq!(
            layout.cell_at(Vec2::new(40.0, 19.9)),
            None,
            "above the board"
        );
        assert_eq!(
            layout.cell_at(Vec2::new(f32::NAN, 40.0)),
            None,
            "non-finite input"
        );
    }

    #[test]
    fn every_interior_sample_lands_on_the_grid() {
        let layout = board();
        let bounds = layout.bounds();
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..1_000 {
            let position = Vec2::new(
                bounds.min.x + rng.f32() * bounds.width(),
                bounds.min.y + rng.f32() * bounds.height(),
            );
            let Some(cell) = layout.cell_at(position) else {
                continue;
            };
            assert!(cell.is_within(8, 5), "{position} mapped to {cell}");
        }
    }

    #[test]
    fn oversized_bounds_do_not_leak_cells_past_the_grid() {
        let mut layout = board();
        layout.set_bounds(Rect::new(0.0, 0.0, 1_000.0, 1_000.0));
        assert_eq!(
            layout.cell_at(Vec2::new(900.0, 10.0)),
            None,
            "column 28 does not exist"
        );
    }

    #[test]
    fn zero_cell_size_maps_nothing() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert_eq!(cell_at(Vec2::splat(5.0), bounds, 0.0), None, "degenerate size");
    }

    #[test]
    fn centers_sit_half_a_cell_in() {
        let layout = board();
        assert_eq!(
            layout.cell_center(Cell::new(2, 2)),
            Vec2::new(80.0, 80.0),
            "center of (2, 2)"
        );
        assert_eq!(
            layout.cell_center(Cell::new(3, 2)) - layout.cell_center(Cell::new(2, 2)),
            Vec2::new(32.0, 0.0),
            "neighbours are one cell apart"
        );
    }
}
