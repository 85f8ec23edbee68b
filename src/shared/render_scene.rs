//! Render-Szene als expliziter Übergabevertrag zwischen App und Engine.
//!
//! Lebt im shared-Modul, da `app` sie baut und `engine` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{EditorMode, FeatureCollection, TileSourceConfig};
use indexmap::IndexSet;
use std::sync::Arc;

/// Read-only Engine-Konfiguration für einen Frame.
///
/// Reine Projektion des Session-Zustands: keine eigene Zustandshaltung,
/// deterministisch aus dem `AppState` ableitbar.
#[derive(Clone)]
pub struct RenderScene {
    /// Aktuelle Feature-Collection (Arc für O(1)-Clone pro Frame)
    pub features: Arc<FeatureCollection>,
    /// Aktiver Interaktionsmodus (Behavior-Selector der Edit-Engine)
    pub mode: EditorMode,
    /// Selektierte Feature-Indexe, bereits auf gültige Indexe gefiltert
    pub selected_feature_indexes: Arc<IndexSet<usize>>,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Tile-Quelle der Basiskarte
    pub tile_source: TileSourceConfig,
    /// Laufzeit-Optionen für Farben, Radien, Linienstärken
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob Features zum Rendern vorhanden sind.
    pub fn has_features(&self) -> bool {
        !self.features.is_empty()
    }
}
