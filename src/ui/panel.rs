//! Aktions-Panel mit den benannten Kommandos.

use crate::app::{AppIntent, AppState};

/// Rendert das Aktions-Panel (ein Button je Katalog-Eintrag, in Katalog-Reihenfolge).
pub fn render_action_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("action_panel")
        .resizable(false)
        .default_width(140.0)
        .show(ctx, |ui| {
            ui.heading("Aktionen");
            ui.separator();

            ui.vertical(|ui| {
                for name in state.commands.names() {
                    if ui.button(name).clicked() {
                        events.push(AppIntent::CommandButtonPressed {
                            name: name.to_string(),
                        });
                    }
                }
            });
        });

    events
}
