use bevy::prelude::*;

pub mod board;
pub mod config;
mod render;

pub use board::{BoardLifecycle, PointerInput, SwapBoard, SwapBoardPlugin, SwapCommitted};
pub use config::BoardConfig;
pub use render::BoardRenderPlugin;

const LOG_FILTER: &str = "wgpu=error,naga=warn,gem_swap=debug";

pub fn run() {
    bits_helpers::get_default_app(env!("CARGO_PKG_NAME"), LOG_FILTER)
        .add_plugins(SwapBoardPlugin)
        .add_plugins(BoardRenderPlugin)
        .add_systems(Startup, setup)
        .run();
}

fn setup(mut commands: Commands) {
    commands.spawn(Camera2d);
}
