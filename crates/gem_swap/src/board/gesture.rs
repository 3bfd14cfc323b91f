use bevy::log::debug;

use super::cell::Cell;
use super::resolver::{SwapRejection, SwapRequest, resolve_swap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    #[default]
    Idle,
    Dragging {
        start: Cell,
        current: Cell,
    },
    /// A swap animation is in flight; no new gesture may begin.
    Resolving,
}

/// Tracks one drag at a time, from pointer-down to the end of its swap.
#[derive(Debug, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
}

impl GestureTracker {
    pub const fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub const fn is_resolving(&self) -> bool {
        matches!(self.phase, GesturePhase::Resolving)
    }

    /// Starts a drag on `cell`. Returns `false` when a gesture is already live.
    pub fn press(&mut self, cell: Cell) -> bool {
        if self.phase != GesturePhase::Idle {
            return false;
        }
        self.phase = GesturePhase::Dragging {
            start: cell,
            current: cell,
        };
        debug!("Drag started on {cell}");
        true
    }

    /// Follows the pointer while dragging. Returns `false` outside a drag.
    pub fn drag(&mut self, cell: Cell) -> bool {
        let GesturePhase::Dragging { current, .. } = &mut self.phase else {
            return false;
        };
        *current = cell;
        true
    }

    /// Ends the drag. `end` is the release cell, `None` if released off the board.
    ///
    /// A valid swap moves the tracker to [`GesturePhase::Resolving`]; anything
    /// else drops it back to idle. `None` means no drag was in progress.
    pub fn release(
        &mut self,
        end: Option<Cell>,
        columns: u32,
        rows: u32,
    ) -> Option<Result<SwapRequest, SwapRejection>> {
        let GesturePhase::Dragging { start, current } = self.phase else {
            return None;
        };

        let resolution = match end {
            Some(end) => resolve_swap(start, end, columns, rows),
            None => Err(SwapRejection::OutOfBounds),
        };
        match resolution {
            Ok(request) => {
                self.phase = GesturePhase::Resolving;
                debug!(
                    "Swap {} <-> {} is resolving",
                    request.start(),
                    request.destination()
                );
            }
            Err(rejection) => {
                self.phase = GesturePhase::Idle;
                debug!("Drag from {start} (last at {current}) dropped: {rejection}");
            }
        }
        Some(resolution)
    }

    /// The swap animation finished; accept gestures again.
    pub fn complete(&mut self) {
        if self.is_resolving() {
            self.phase = GesturePhase::Idle;
        }
    }

    /// Abandons a drag in progress. An in-flight swap is left alone.
    pub fn cancel(&mut self) {
        if matches!(self.phase, GesturePhase::Dragging { .. }) {
            self.phase = GesturePhase::Idle;
        }
    }
}
