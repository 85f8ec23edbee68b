use crate::core::EditorMode;

/// Zustand des aktuellen Interaktionsmodus
#[derive(Debug, Clone, Copy, Default)]
pub struct EditorModeState {
    /// Aktiver Modus (View, Draw*, Modify)
    pub active_mode: EditorMode,
}

impl EditorModeState {
    /// Erstellt den Standard-Moduszustand (View aktiv).
    pub fn new() -> Self {
        Self {
            active_mode: EditorMode::View,
        }
    }
}
