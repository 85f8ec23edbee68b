use crate::app::commands::CommandCatalog;
use crate::app::CommandLog;
use crate::core::FeatureCollection;
use crate::shared::EditorOptions;
use std::sync::Arc;

use super::{EditorModeState, SelectionState, ViewState};

/// Hauptzustand der Editor-Session
///
/// Einzige Quelle der Wahrheit für Feature-Collection, Selektion und Modus;
/// nur Command-Handler dürfen hier mutieren.
pub struct AppState {
    /// Aktuelle Feature-Collection (leer beim Start, wird als Ganzes ersetzt)
    pub features: Arc<FeatureCollection>,
    /// Selection-State
    pub selection: SelectionState,
    /// Modus-State
    pub editor: EditorModeState,
    /// View-State
    pub view: ViewState,
    /// Statischer Katalog der benannten Kommandos (bei Init gebunden)
    pub commands: CommandCatalog,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Radien, Tile-Quelle)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren Session-State
    pub fn new() -> Self {
        Self {
            features: Arc::new(FeatureCollection::new()),
            selection: SelectionState::new(),
            editor: EditorModeState::new(),
            view: ViewState::new(),
            commands: CommandCatalog::builtin(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
        }
    }

    /// Gibt die Anzahl der Features zurück (für UI-Anzeige)
    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Gibt die Anzahl der selektierten Features zurück (für UI-Anzeige)
    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
