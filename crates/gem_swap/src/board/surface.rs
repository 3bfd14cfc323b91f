use bevy::prelude::*;

use super::cell::Cell;

/// Where piece offsets go. Implemented by the rendering layer; calls are
/// fire-and-forget.
///
/// Offsets are in board space: x to the right, y down.
pub trait VisualSurface {
    fn set_offset(&mut self, cell: Cell, offset: Vec2);

    fn reset_offset(&mut self, cell: Cell);
}

