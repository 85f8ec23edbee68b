//! Handler für Viewport- und Map-Status.

use crate::app::AppState;

/// Übernimmt die aktuelle Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Hält das Map-Ready-Signal der Engine fest.
pub fn mark_map_ready(state: &mut AppState) {
    if !state.view.map_ready {
        state.view.map_ready = true;
        log::info!("Basiskarte geladen (Tile-Set vollständig)");
    }
}
