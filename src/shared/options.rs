//! Zentrale Konfiguration für den GeoJSON Map Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::TileSourceConfig;
use serde::{Deserialize, Serialize};

// ── Punkt-Rendering ─────────────────────────────────────────────────

/// Basis-Radius für Punkt-Features (Einheit der Engine, typ. Meter).
pub const POINT_RADIUS: f32 = 100.0;
/// Minimaler Punkt-Radius in Screen-Pixeln.
pub const POINT_RADIUS_MIN_PX: f32 = 2.0;
/// Maximaler Punkt-Radius in Screen-Pixeln.
pub const POINT_RADIUS_MAX_PX: f32 = 8.0;

// ── Linien/Flächen-Rendering ───────────────────────────────────────

/// Linienstärke für LineStrings und Polygon-Umrisse in Pixeln.
pub const LINE_WIDTH_PX: f32 = 3.0;
/// Füllfarbe für Polygone (RGBA).
pub const FILL_COLOR: [f32; 4] = [0.0, 0.6, 1.0, 0.3];
/// Linienfarbe (RGBA).
pub const LINE_COLOR: [f32; 4] = [0.0, 0.4, 0.8, 1.0];
/// Farbe selektierter Features (RGBA).
pub const SELECTED_COLOR: [f32; 4] = [1.0, 0.4, 0.0, 1.0];

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `geojson_map_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Punkte ──────────────────────────────────────────────────
    /// Basis-Radius für Punkt-Features
    pub point_radius: f32,
    /// Minimaler Punkt-Radius in Screen-Pixeln
    pub point_radius_min_px: f32,
    /// Maximaler Punkt-Radius in Screen-Pixeln
    pub point_radius_max_px: f32,

    // ── Linien & Flächen ────────────────────────────────────────
    /// Linienstärke in Pixeln
    pub line_width_px: f32,
    /// Füllfarbe für Polygone (RGBA)
    pub fill_color: [f32; 4],
    /// Linienfarbe (RGBA)
    pub line_color: [f32; 4],
    /// Farbe selektierter Features (RGBA)
    pub selected_color: [f32; 4],

    // ── Tile-Quelle ─────────────────────────────────────────────
    /// Tile-Quelle der Basiskarte (Default: OpenStreetMap)
    #[serde(default)]
    pub tile_source: TileSourceConfig,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            point_radius: POINT_RADIUS,
            point_radius_min_px: POINT_RADIUS_MIN_PX,
            point_radius_max_px: POINT_RADIUS_MAX_PX,

            line_width_px: LINE_WIDTH_PX,
            fill_color: FILL_COLOR,
            line_color: LINE_COLOR,
            selected_color: SELECTED_COLOR,

            tile_source: TileSourceConfig::default(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("geojson_map_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("geojson_map_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::EditorOptions;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/geojson_map_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }

    #[test]
    fn options_roundtrip_through_toml() {
        let mut opts = EditorOptions::default();
        opts.line_width_px = 5.0;
        opts.tile_source.max_zoom = 16;

        let content = toml::to_string_pretty(&opts).expect("TOML-Serialisierung");
        let back: EditorOptions = toml::from_str(&content).expect("TOML-Deserialisierung");
        assert_eq!(back, opts);
    }

    #[test]
    fn tile_source_is_optional_in_toml() {
        // Ältere Options-Dateien ohne [tile_source]-Block bleiben lesbar.
        let back: EditorOptions = toml::from_str(
            r#"
            point_radius = 100.0
            point_radius_min_px = 2.0
            point_radius_max_px = 8.0
            line_width_px = 3.0
            fill_color = [0.0, 0.6, 1.0, 0.3]
            line_color = [0.0, 0.4, 0.8, 1.0]
            selected_color = [1.0, 0.4, 0.0, 1.0]
            "#,
        )
        .expect("TOML ohne tile_source");
        assert_eq!(back.tile_source, Default::default());
    }
}
