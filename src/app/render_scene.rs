//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Reine Projektion, nach jeder State-Änderung vollständig neu berechnet.
/// Selektions-Indexe, die nach einem Edit nicht mehr auflösen, werden hier
/// herausgefiltert: eine verwaiste Selektion verhält sich stromabwärts wie
/// eine leere.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let feature_count = state.features.len();
    let selection = &state.selection.selected_feature_indexes;

    let selected_feature_indexes = if selection.iter().all(|&i| i < feature_count) {
        // Üblicher Fall: alles gültig, O(1)-Arc-Clone
        selection.clone()
    } else {
        Arc::new(
            selection
                .iter()
                .copied()
                .filter(|&i| i < feature_count)
                .collect(),
        )
    };

    RenderScene {
        features: state.features.clone(),
        mode: state.editor.active_mode,
        selected_feature_indexes,
        viewport_size,
        tile_source: state.options.tile_source.clone(),
        options: state.options.clone(),
    }
}
