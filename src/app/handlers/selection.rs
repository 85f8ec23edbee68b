//! Handler für Selektions-Operationen.

use crate::app::AppState;

/// Selektiert genau das Feature unter `index`.
///
/// Ungültige Eingaben (kein Treffer oder Index außerhalb der Collection)
/// lassen die Selektion unverändert; das ist bewusst still, nie ein Fehler.
pub fn select_feature(state: &mut AppState, index: Option<usize>) {
    let Some(index) = index else {
        return;
    };
    if !state.features.resolves(index) {
        log::debug!(
            "Klick-Index {index} außerhalb der Collection ({} Features), Selektion unverändert",
            state.features.len()
        );
        return;
    }

    let ids = state.selection.ids_mut();
    ids.clear();
    ids.insert(index);
}

/// Variante mit Clear-Semantik: ungültige Eingaben leeren die Selektion.
///
/// Wird absichtlich nicht vom Klick-Pfad benutzt; Aufrufer, die
/// Clear-on-Invalid brauchen, rufen sie explizit auf.
pub fn select_or_clear(state: &mut AppState, index: Option<usize>) {
    match index {
        Some(index) if state.features.resolves(index) => {
            let ids = state.selection.ids_mut();
            ids.clear();
            ids.insert(index);
        }
        _ => state.selection.ids_mut().clear(),
    }
}
