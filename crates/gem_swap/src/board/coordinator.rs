use std::sync::Arc;
use std::time::Duration;

use bevy::prelude::*;

use super::animation::SwapAnimation;
use super::cell::Cell;
use super::gesture::{GesturePhase, GestureTracker};
use super::grid::{Grid, GridError, GridState};
use super::mapper::BoardLayout;
use super::resolver::{SwapRejection, SwapRequest};
use super::surface::VisualSurface;

/// What a pointer event did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Ignored,
    DragStarted(Cell),
    DragMoved(Cell),
    SwapStarted(SwapRequest),
    Rejected(SwapRejection),
}

/// What advancing the clock did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Animating,
    Committed(SwapRequest),
    Aborted(GridError),
}

/// The interactive board: owns the grid, the gesture and the swap in flight.
///
/// Pointer positions are in screen space with y down, matching the layout's
/// bounds. The grid only changes when a swap animation completes.
#[derive(Resource, Debug)]
pub struct SwapBoard {
    layout: BoardLayout,
    grid: GridState,
    tracker: GestureTracker,
    animation: Option<SwapAnimation>,
    swap_duration: Duration,
    attached: bool,
}

impl SwapBoard {
    /// A detached board with its top-left corner at `origin`; call
    /// [`SwapBoard::attach`] to start taking input.
    ///
    /// The layout always has the grid's dimensions, so any cell the pointer
    /// can reach is a cell the grid can swap.
    pub fn new(grid: Grid, origin: Vec2, cell_size: f32, swap_duration: Duration) -> Self {
        let layout = BoardLayout::new(origin, cell_size, grid.columns(), grid.rows());
        Self {
            layout,
            grid: GridState::new(grid),
            tracker: GestureTracker::default(),
            animation: None,
            swap_duration,
            attached: false,
        }
    }

    pub fn grid(&self) -> Arc<Grid> {
        self.grid.read()
    }

    pub const fn grid_version(&self) -> u64 {
        self.grid.version()
    }

    pub const fn phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    pub const fn is_resolving(&self) -> bool {
        self.tracker.is_resolving()
    }

    pub const fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    pub const fn set_bounds(&mut self, bounds: Rect) {
        self.layout.set_bounds(bounds);
    }

    pub fn attach(&mut self) {
        if !self.attached {
            debug!("Board attached");
        }
        self.attached = true;
    }

    /// Stops listening for pointer input.
    ///
    /// A drag in progress is dropped. A swap in flight is finished on the spot so
    /// the surface is left without offsets and the grid matches what was shown.
    pub fn detach(&mut self, surface: &mut impl VisualSurface) -> TickOutcome {
        self.attached = false;
        self.tracker.cancel();
        let outcome = match self.animation.take() {
            Some(animation) => self.finish(animation.request(), surface),
            None => TickOutcome::Idle,
        };
        debug!("Board detached");
        outcome
    }

    pub fn pointer_down(&mut self, position: Vec2) -> PointerOutcome {
        if !self.attached {
            return PointerOutcome::Ignored;
        }
        let Some(cell) = self.layout.cell_at(position) else {
            return PointerOutcome::Ignored;
        };
        if self.tracker.press(cell) {
            PointerOutcome::DragStarted(cell)
        } else {
            PointerOutcome::Ignored
        }
    }

    /// Positions off the board are ignored; the drag keeps its last cell.
    pub fn pointer_move(&mut self, position: Vec2) -> PointerOutcome {
        if !self.attached {
            return PointerOutcome::Ignored;
        }
        let Some(cell) = self.layout.cell_at(position) else {
            return PointerOutcome::Ignored;
        };
        if self.tracker.drag(cell) {
            PointerOutcome::DragMoved(cell)
        } else {
            PointerOutcome::Ignored
        }
    }

    /// `None` is a release somewhere the pointer position is unknown.
    pub fn pointer_up(&mut self, position: Option<Vec2>) -> PointerOutcome {
        if !self.attached {
            return PointerOutcome::Ignored;
        }
        let end = position.and_then(|position| self.layout.cell_at(position));
        let Some(resolution) = self
            .tracker
            .release(end, self.layout.columns(), self.layout.rows())
        else {
            return PointerOutcome::Ignored;
        };

        match resolution {
            Ok(request) => {
                let travel = self.layout.cell_center(request.destination())
                    - self.layout.cell_center(request.start());
                self.animation = Some(SwapAnimation::new(request, travel, self.swap_duration));
                PointerOutcome::SwapStarted(request)
            }
            Err(rejection) => PointerOutcome::Rejected(rejection),
        }
    }

    /// Moves the swap in flight forward by `delta`, committing it once done.
    pub fn tick(&mut self, delta: Duration, surface: &mut impl VisualSurface) -> TickOutcome {
        let Some(animation) = self.animation.as_mut() else {
            return TickOutcome::Idle;
        };

        let finished = animation.tick(delta);
        let request = animation.request();
        if !finished {
            let (start_offset, destination_offset) = animation.offsets();
            surface.set_offset(request.start(), start_offset);
            surface.set_offset(request.destination(), destination_offset);
            return TickOutcome::Animating;
        }

        self.animation = None;
        self.finish(request, surface)
    }

    fn finish(&mut self, request: SwapRequest, surface: &mut impl VisualSurface) -> TickOutcome {
        surface.reset_offset(request.start());
        surface.reset_offset(request.destination());
        let outcome = match self
            .grid
            .commit_swap(request.start(), request.destination())
        {
            Ok(()) => {
                info!(
                    "Swapped {} and {}",
                    request.start(),
                    request.destination()
                );
                TickOutcome::Committed(request)
            }
            Err(err) => {
                error!("Swap aborted: {err}");
                TickOutcome::Aborted(err)
            }
        };
        self.tracker.complete();
        outcome
    }
}
