//! Konfiguration der externen Tile-Quelle.
//!
//! Das eigentliche Tile-Laden und -Rendern übernimmt die externe Map-Engine;
//! die Session hält nur das URL-Template und die numerischen Grenzen.

use serde::{Deserialize, Serialize};

/// Standard-Template der OpenStreetMap-Raster-Tiles.
pub const OSM_TILE_URL_TEMPLATE: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Pflicht-Attribution für OSM-Tiles.
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";
/// Kantenlänge eines Raster-Tiles in Pixeln.
pub const TILE_SIZE_PX: u32 = 256;
/// Minimale Zoomstufe der Tile-Pyramide.
pub const TILE_MIN_ZOOM: u8 = 0;
/// Maximale Zoomstufe der OSM-Tile-Pyramide.
pub const TILE_MAX_ZOOM: u8 = 19;

/// Tile-Quelle: URL-Template plus numerische Grenzen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSourceConfig {
    /// URL-Template mit `{z}`/`{x}`/`{y}`-Platzhaltern
    pub url_template: String,
    /// Minimale Zoomstufe
    pub min_zoom: u8,
    /// Maximale Zoomstufe
    pub max_zoom: u8,
    /// Tile-Kantenlänge in Pixeln
    pub tile_size: u32,
    /// Attributionstext (wird im Viewport angezeigt)
    pub attribution: String,
}

impl Default for TileSourceConfig {
    fn default() -> Self {
        Self {
            url_template: OSM_TILE_URL_TEMPLATE.to_string(),
            min_zoom: TILE_MIN_ZOOM,
            max_zoom: TILE_MAX_ZOOM,
            tile_size: TILE_SIZE_PX,
            attribution: OSM_ATTRIBUTION.to_string(),
        }
    }
}

impl TileSourceConfig {
    /// Expandiert das URL-Template für ein konkretes Tile.
    pub fn tile_url(&self, z: u8, x: u32, y: u32) -> String {
        self.url_template
            .replace("{z}", &z.to_string())
            .replace("{x}", &x.to_string())
            .replace("{y}", &y.to_string())
    }
}
