//! GeoJSON-Datenmodell der Editor-Session.
//!
//! `Feature` und `FeatureCollection` sind bewusst opake Payloads: die Session
//! speichert Geometrie und Properties unverändert und reicht sie an die
//! externe Render-/Edit-Engine weiter. Geometrie-Interpretation (Hit-Testing,
//! Vertex-Editing) findet ausschließlich in der Engine statt.

use serde::{Deserialize, Serialize};

/// Einzelnes GeoJSON-Feature (Punkt, LineString oder Polygon plus Properties).
///
/// Geometrie und Properties bleiben untypisiert (`serde_json::Value`), damit
/// die Session das Engine-Vokabular verlustfrei durchreichen kann.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    /// Geometrie-Objekt im GeoJSON-Format (z.B. `{"type": "Point", ...}`)
    pub geometry: serde_json::Value,
    /// Frei belegbare Properties des Features
    #[serde(default)]
    pub properties: serde_json::Value,
}

impl Feature {
    /// Erstellt ein Feature aus einem Geometrie-Objekt (Properties leer).
    pub fn new(geometry: serde_json::Value) -> Self {
        Self {
            geometry,
            properties: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Geordnete Menge aller Features der Session.
///
/// Die Einfüge-Reihenfolge ist zugleich Z-Order; der Index ist der einzige
/// stabile Identifikator (Selektion referenziert Features per Index).
/// Wird bei jedem Edit-Event als Ganzes ersetzt, nie in-place mutiert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    /// Features in Z-Order (Index 0 = unterstes Feature)
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Erstellt eine leere Collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gibt die Anzahl der Features zurück.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Gibt `true` zurück, wenn keine Features vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Prüft, ob `index` aktuell auf ein Feature auflöst.
    pub fn resolves(&self, index: usize) -> bool {
        index < self.features.len()
    }
}
