use crate::core::{EditorMode, FeatureCollection};
use crate::engine::{EditContext, EditKind, EngineEvent};

/// Intents sind Eingaben aus UI/Engine ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Modus im Dropdown gewählt
    ModeSelected { mode: EditorMode },
    /// Engine meldet Hit-Test eines Viewport-Klicks (None = kein Treffer)
    FeatureClicked { index: Option<usize> },
    /// Engine meldet ein abgeschlossenes Edit-Event
    EditEmitted {
        collection: FeatureCollection,
        kind: EditKind,
        context: EditContext,
    },
    /// Kommando-Button im Aktions-Panel gedrückt
    CommandButtonPressed { name: String },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Engine meldet das sichtbare Tile-Set als fertig geladen
    TilesLoaded,
}

impl From<EngineEvent> for AppIntent {
    fn from(event: EngineEvent) -> Self {
        match event {
            EngineEvent::Edit {
                collection,
                kind,
                context,
            } => AppIntent::EditEmitted {
                collection,
                kind,
                context,
            },
            EngineEvent::FeatureClicked { index } => AppIntent::FeatureClicked { index },
            EngineEvent::TilesLoaded => AppIntent::TilesLoaded,
        }
    }
}
