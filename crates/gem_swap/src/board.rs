use bevy::prelude::*;

mod animation;
mod cell;
mod coordinator;
mod gesture;
mod grid;
mod mapper;
mod resolver;
mod surface;
mod systems;

pub use animation::{SwapAnimation, ease_in_out_quad};
pub use cell::Cell;
pub use coordinator::{PointerOutcome, SwapBoard, TickOutcome};
pub use gesture::{GesturePhase, GestureTracker};
pub use grid::{Grid, GridError, GridState, PieceKind};
pub use mapper::{BoardLayout, cell_at};
pub use resolver::{SwapRejection, SwapRequest, resolve_swap};
pub use surface::VisualSurface;
pub use systems::{PieceHandles, PieceHome, PieceQuery, PieceTransforms};

use systems::{advance_swap_animation, apply_pointer_input, handle_lifecycle, init_board};

/// Pointer input in window coordinates (y down).
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down(Vec2),
    Move(Vec2),
    /// `None` when the release happened where no position is known.
    Up(Option<Vec2>),
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardLifecycle {
    Attach,
    Detach,
}

/// Sent once the grid has taken a swap.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapCommitted(pub SwapRequest);

/// Lifecycle, animation and pointer handling, in that order.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub struct BoardSet;

pub struct SwapBoardPlugin;

impl Plugin for SwapBoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<crate::config::BoardConfig>()
            .init_resource::<PieceHandles>()
            .add_event::<PointerInput>()
            .add_event::<BoardLifecycle>()
            .add_event::<SwapCommitted>()
            .add_systems(
                Startup,
                init_board.run_if(not(resource_exists::<SwapBoard>)),
            )
            .add_systems(
                Update,
                // A finished swap must commit before any pointer event of the
                // same frame is looked at.
                (handle_lifecycle, advance_swap_animation, apply_pointer_input)
                    .chain()
                    .in_set(BoardSet)
                    .run_if(resource_exists::<SwapBoard>),
            );
    }
}
