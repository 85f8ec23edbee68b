//! Ereignis-Vokabular der externen Engine.

use crate::core::FeatureCollection;

/// Edit-Taxonomie der Geometrie-Edit-Engine.
///
/// Die genaue Einteilung gehört der Engine; die Session interessiert nur, ob
/// ein Edit ein neues Feature erzeugt hat (→ Auto-Selektion).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Zeichnen abgeschlossen, neues Feature in der Collection
    AddFeature,
    /// Vertex zu bestehendem Feature hinzugefügt
    AddPosition,
    /// Vertex wird verschoben (während des Drags)
    MovePosition,
    /// Vertex-Verschiebung abgeschlossen
    FinishMovePosition,
    /// Vertex entfernt
    RemovePosition,
}

impl EditKind {
    /// Ob dieser Edit ein neues Feature zur Collection hinzugefügt hat.
    pub fn adds_feature(&self) -> bool {
        matches!(self, EditKind::AddFeature)
    }
}

/// Kontextdaten eines Edit-Events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditContext {
    /// Indexe der vom Edit betroffenen Features (bei `AddFeature`: die neuen)
    pub feature_indexes: Vec<usize>,
}

impl EditContext {
    /// Kontext für genau ein betroffenes Feature.
    pub fn single(index: usize) -> Self {
        Self {
            feature_indexes: vec![index],
        }
    }
}

/// Von der Engine an die Session gemeldetes Ereignis.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// User-Interaktion hat die Feature-Collection geändert.
    ///
    /// `collection` ist die vollständige, autoritative Ersatz-Collection.
    Edit {
        collection: FeatureCollection,
        kind: EditKind,
        context: EditContext,
    },
    /// Hit-Test eines Viewport-Klicks (None = kein Feature getroffen)
    FeatureClicked { index: Option<usize> },
    /// Sichtbares Tile-Set fertig geladen (Map-Ready-Signal)
    TilesLoaded,
}
