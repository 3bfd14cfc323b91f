use bevy::prelude::*;
use bevy::utils::HashMap;
use bevy::window::PrimaryWindow;
use bits_helpers::input::{PointerPhase, pointer_samples};
use strum::IntoEnumIterator;

use crate::board::{
    BoardLayout, BoardSet, Cell, PieceHandles, PieceHome, PieceKind, PointerInput, SwapBoard,
    SwapCommitted,
};

const CELL_COLOR: Color = Color::srgb(0.16, 0.16, 0.2);
/// Share of a cell covered by its piece.
const PIECE_SCALE: f32 = 0.9;

/// Draws the board with meshes and feeds window pointer input to it.
pub struct BoardRenderPlugin;

impl Plugin for BoardRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostStartup,
            (load_glyphs, spawn_board_visuals)
                .chain()
                .run_if(resource_exists::<SwapBoard>),
        )
        .add_systems(
            Update,
            (
                (sync_board_bounds, collect_pointer_input).before(BoardSet),
                sync_piece_glyphs
                    .after(BoardSet)
                    .run_if(resource_exists::<PieceGlyphs>),
            )
                .run_if(resource_exists::<SwapBoard>),
        );
    }
}

#[derive(Clone)]
struct Glyph {
    mesh: Handle<Mesh>,
    material: Handle<ColorMaterial>,
}

#[derive(Resource)]
struct PieceGlyphs(HashMap<PieceKind, Glyph>);

fn load_glyphs(
    mut commands: Commands,
    board: Res<SwapBoard>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let half = board.layout().cell_size() * PIECE_SCALE / 2.0;
    let glyphs = PieceKind::iter()
        .map(|kind| {
            let mesh = match kind {
                PieceKind::Red => meshes.add(Triangle2d::new(
                    Vec2::new(0.0, half),
                    Vec2::new(-half, -half),
                    Vec2::new(half, -half),
                )),
                PieceKind::Blue => meshes.add(Circle::new(half)),
                PieceKind::Green => meshes.add(Rectangle::new(half * 2.0, half * 2.0)),
            };
            let glyph = Glyph {
                mesh,
                material: materials.add(kind.color()),
            };
            (kind, glyph)
        })
        .collect();
    commands.insert_resource(PieceGlyphs(glyphs));
}

/// World position of a cell center. The camera looks at the board's center.
fn home_of(layout: &BoardLayout, cell: Cell) -> Vec2 {
    let center = layout.cell_center(cell);
    let half_board = layout.size() / 2.0;
    Vec2::new(center.x - half_board.x, half_board.y - center.y)
}

fn spawn_board_visuals(
    mut commands: Commands,
    board: Res<SwapBoard>,
    glyphs: Res<PieceGlyphs>,
    mut handles: ResMut<PieceHandles>,
) {
    let layout = board.layout();
    let cell_size = layout.cell_size();
    handles.clear();

    for (cell, kind) in board.grid().iter() {
        let home = home_of(layout, cell);
        commands.spawn((
            Sprite::from_color(CELL_COLOR, Vec2::splat(cell_size - 2.0)),
            Transform::from_translation(home.extend(0.0)),
        ));

        let Some(glyph) = glyphs.0.get(&kind) else {
            error!("No glyph for {kind}");
            continue;
        };
        let piece = commands
            .spawn((
                Mesh2d(glyph.mesh.clone()),
                MeshMaterial2d(glyph.material.clone()),
                Transform::from_translation(home.extend(1.0)),
                PieceHome(home),
            ))
            .insert(Name::new(format!("{kind} {cell}")))
            .id();
        handles.insert(cell, piece);
    }
}

/// Keeps the on-screen rectangle in step with the window, board centred.
fn sync_board_bounds(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut board: ResMut<SwapBoard>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let size = board.layout().size();
    let origin = (window.size() - size) / 2.0;
    let bounds = Rect::from_corners(origin, origin + size);
    if board.layout().bounds() != bounds {
        board.set_bounds(bounds);
    }
}

fn collect_pointer_input(
    windows: Query<&Window, With<PrimaryWindow>>,
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    mut pointer: EventWriter<PointerInput>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    for sample in pointer_samples(&buttons, &touches, window) {
        let input = match (sample.phase, sample.position) {
            (PointerPhase::Pressed, Some(position)) => PointerInput::Down(position),
            (PointerPhase::Held, Some(position)) => PointerInput::Move(position),
            (PointerPhase::Released, position) => PointerInput::Up(position),
            (PointerPhase::Pressed | PointerPhase::Held, None) => continue,
        };
        pointer.send(input);
    }
}

/// Gives the two swapped pieces the look of their new kind. Their offsets
/// were just reset, so without this they would snap back visually.
fn sync_piece_glyphs(
    mut committed: EventReader<SwapCommitted>,
    board: Res<SwapBoard>,
    glyphs: Res<PieceGlyphs>,
    handles: Res<PieceHandles>,
    mut pieces: Query<(&mut Mesh2d, &mut MeshMaterial2d<ColorMaterial>)>,
) {
    let grid = board.grid();
    for SwapCommitted(request) in committed.read() {
        for cell in [request.start(), request.destination()] {
            let (Some(kind), Some(entity)) = (grid.get(cell), handles.get(cell)) else {
                warn!("Could not find the piece at {cell}");
                continue;
            };
            let Some(glyph) = glyphs.0.get(&kind) else {
                continue;
            };
            let Ok((mut mesh, mut material)) = pieces.get_mut(entity) else {
                warn!("Piece {entity:?} at {cell} has no mesh");
                continue;
            };
            mesh.0 = glyph.mesh.clone();
            material.0 = glyph.material.clone();
        }
    }
}
