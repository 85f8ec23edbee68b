use crate::core::{EditorMode, FeatureCollection};
use crate::engine::{EditContext, EditKind};

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Interaktionsmodus wechseln
    SetEditorMode { mode: EditorMode },
    /// Feature per Index selektieren (None = kein Treffer, No-op)
    SelectFeature { index: Option<usize> },
    /// Engine-Edit übernehmen: Collection als Ganzes ersetzen
    ApplyEdit {
        collection: FeatureCollection,
        kind: EditKind,
        context: EditContext,
    },
    /// Benanntes Kommando aus dem Katalog ausführen
    RunNamedCommand { name: String },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Map-Ready-Signal der Engine festhalten
    MarkMapReady,
}
