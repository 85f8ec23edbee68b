//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Features: {}", state.feature_count()));

            ui.separator();

            let selected_count = state.selected_count();
            if selected_count > 0 {
                let example_index = state
                    .selection
                    .selected_feature_indexes
                    .iter()
                    .next()
                    .copied()
                    .unwrap_or_default();
                ui.label(format!(
                    "Selektiert: {} (z.B. #{})",
                    selected_count, example_index
                ));
            } else {
                ui.label("Selektiert: 0");
            }

            ui.separator();

            ui.label(format!("Modus: {}", state.editor.active_mode.label()));

            ui.separator();

            if state.view.map_ready {
                ui.label("Karte: geladen");
            } else {
                ui.label("Karte: lädt…");
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
