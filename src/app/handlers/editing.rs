//! Handler für Modus-Wechsel und Edit-Events der Engine.

use crate::app::AppState;
use crate::core::{EditorMode, FeatureCollection};
use crate::engine::{EditContext, EditKind};
use std::sync::Arc;

/// Wechselt den aktiven Interaktionsmodus.
///
/// Kein direkter Geometrie-Effekt; die Engine liest den neuen Modus beim
/// nächsten `configure` aus der Szene.
pub fn set_mode(state: &mut AppState, mode: EditorMode) {
    let previous = state.editor.active_mode;
    state.editor.active_mode = mode;
    if previous != mode {
        log::info!("Modus gewechselt: {previous:?} -> {mode:?}");
    }
}

/// Übernimmt ein Edit-Event der Engine.
///
/// Die gelieferte Collection ist autoritativ und ersetzt den Bestand als
/// Ganzes. Hat der Edit ein Feature hinzugefügt, wird die Selektion durch die
/// mitgelieferten Indexe ersetzt (frisch Gezeichnetes ist sofort selektiert);
/// sonst bleibt sie unverändert. Dadurch ungültig gewordene Indexe werden
/// nicht hier bereinigt, sondern bei der Szenen-Projektion gefiltert.
pub fn apply_edit(
    state: &mut AppState,
    collection: FeatureCollection,
    kind: EditKind,
    context: EditContext,
) {
    state.features = Arc::new(collection);

    if kind.adds_feature() {
        let ids = state.selection.ids_mut();
        ids.clear();
        ids.extend(context.feature_indexes.iter().copied());
        log::info!(
            "Feature hinzugefügt, Selektion: {:?}",
            context.feature_indexes
        );
    }
}

/// Setzt Feature-Collection und Selektion auf leer zurück ("Clear All").
pub fn clear_all(state: &mut AppState) {
    let removed = state.features.len();
    state.features = Arc::new(FeatureCollection::new());
    state.selection.ids_mut().clear();
    log::info!("Alle Features entfernt ({removed})");
}
