use std::time::Duration;

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct BoardConfig {
    pub columns: u32,
    pub rows: u32,
    /// Side of one square cell, in pixels.
    pub cell_size: f32,
    pub swap_duration: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: 8,
            rows: 5,
            cell_size: 32.0,
            swap_duration: Duration::from_millis(500),
        }
    }
}
