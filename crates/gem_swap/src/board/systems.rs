use bevy::prelude::*;
use bevy::utils::HashMap;

use super::cell::Cell;
use super::coordinator::{PointerOutcome, SwapBoard, TickOutcome};
use super::grid::Grid;
use super::surface::VisualSurface;
use super::{BoardLifecycle, PointerInput, SwapCommitted};
use crate::config::BoardConfig;

/// Piece entity per cell, filled in by whoever draws the board.
#[derive(Resource, Default, Debug)]
pub struct PieceHandles(HashMap<Cell, Entity>);

impl PieceHandles {
    pub fn insert(&mut self, cell: Cell, entity: Entity) {
        self.0.insert(cell, entity);
    }

    pub fn get(&self, cell: Cell) -> Option<Entity> {
        self.0.get(&cell).copied()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// World-space resting position of a piece.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PieceHome(pub Vec2);

pub type PieceQuery<'w, 's> = Query<'w, 's, (&'static mut Transform, &'static PieceHome)>;

/// Applies board-space offsets to piece transforms.
///
/// Borrowed for a single system run only.
pub struct PieceTransforms<'a, 'w, 's> {
    handles: &'a PieceHandles,
    pieces: &'a mut PieceQuery<'w, 's>,
}

impl<'a, 'w, 's> PieceTransforms<'a, 'w, 's> {
    pub fn new(handles: &'a PieceHandles, pieces: &'a mut PieceQuery<'w, 's>) -> Self {
        Self { handles, pieces }
    }

    fn place(&mut self, cell: Cell, offset: Vec2) {
        let Some(entity) = self.handles.get(cell) else {
            warn!("No piece drawn at {cell}");
            return;
        };
        let Ok((mut transform, home)) = self.pieces.get_mut(entity) else {
            warn!("Piece {entity:?} at {cell} has no transform");
            return;
        };
        // Board space is y-down, world space is y-up.
        let translation = home.0 + Vec2::new(offset.x, -offset.y);
        transform.translation = translation.extend(transform.translation.z);
    }
}

impl VisualSurface for PieceTransforms<'_, '_, '_> {
    fn set_offset(&mut self, cell: Cell, offset: Vec2) {
        self.place(cell, offset);
    }

    fn reset_offset(&mut self, cell: Cell) {
        self.place(cell, Vec2::ZERO);
    }
}

pub(super) fn init_board(mut commands: Commands, config: Res<BoardConfig>) {
    let mut rng = fastrand::Rng::new();
    let grid = match Grid::random(config.columns, config.rows, &mut rng) {
        Ok(grid) => grid,
        Err(err) => {
            error!("Could not build the board: {err}");
            return;
        }
    };

    let mut board = SwapBoard::new(grid, Vec2::ZERO, config.cell_size, config.swap_duration);
    board.attach();
    info!("Board of {}x{} ready", config.columns, config.rows);
    commands.insert_resource(board);
}

pub(super) fn handle_lifecycle(
    mut events: EventReader<BoardLifecycle>,
    mut board: ResMut<SwapBoard>,
    handles: Res<PieceHandles>,
    mut pieces: PieceQuery,
    mut committed: EventWriter<SwapCommitted>,
) {
    for event in events.read() {
        match event {
            BoardLifecycle::Attach => board.attach(),
            BoardLifecycle::Detach => {
                let mut surface = PieceTransforms::new(&handles, &mut pieces);
                if let TickOutcome::Committed(request) = board.detach(&mut surface) {
                    committed.send(SwapCommitted(request));
                }
            }
        }
    }
}

pub(super) fn advance_swap_animation(
    time: Res<Time>,
    mut board: ResMut<SwapBoard>,
    handles: Res<PieceHandles>,
    mut pieces: PieceQuery,
    mut committed: EventWriter<SwapCommitted>,
) {
    if !board.is_resolving() {
        return;
    }
    let mut surface = PieceTransforms::new(&handles, &mut pieces);
    if let TickOutcome::Committed(request) = board.tick(time.delta(), &mut surface) {
        committed.send(SwapCommitted(request));
    }
}

pub(super) fn apply_pointer_input(
    mut events: EventReader<PointerInput>,
    mut board: ResMut<SwapBoard>,
) {
    for event in events.read() {
        let outcome = match *event {
            PointerInput::Down(position) => board.pointer_down(position),
            PointerInput::Move(position) => board.pointer_move(position),
            PointerInput::Up(position) => board.pointer_up(position),
        };
        match outcome {
            PointerOutcome::Rejected(rejection) if rejection.is_invalid_gesture() => {
                trace!("Gesture dropped: {rejection}");
            }
            PointerOutcome::Rejected(rejection) => debug!("Swap dropped: {rejection}"),
            _ => {}
        }
    }
}
