//! Zentraler Map-Viewport.
//!
//! Das eigentliche Karten- und Geometrie-Rendering übernimmt die angebundene
//! Engine; dieses Panel reserviert die Fläche, meldet Größenänderungen und
//! reicht rohe Klicks an die Engine weiter (Hit-Testing ist Engine-Sache).

use crate::app::{AppIntent, AppState};
use crate::engine::MapEditEngine;

/// Rendert den Map-Viewport und gibt erzeugte Events zurück.
pub fn show_map_view(
    ctx: &egui::Context,
    state: &AppState,
    engine: &mut dyn MapEditEngine,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click());

            let viewport_size = [rect.width(), rect.height()];
            if viewport_size != state.view.viewport_size {
                events.push(AppIntent::ViewportResized {
                    size: viewport_size,
                });
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    engine.handle_click([pos.x - rect.left(), pos.y - rect.top()]);
                }
            }

            if state.features.is_empty() {
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Zeichenmodus wählen und auf die Karte klicken",
                    egui::FontId::proportional(18.0),
                    egui::Color32::GRAY,
                );
            }

            // Pflicht-Attribution der Tile-Quelle (unten rechts)
            ui.painter().text(
                rect.right_bottom() - egui::vec2(6.0, 4.0),
                egui::Align2::RIGHT_BOTTOM,
                &state.options.tile_source.attribution,
                egui::FontId::proportional(12.0),
                egui::Color32::DARK_GRAY,
            );
        });

    events
}
