//! Toolbar mit Modus-Dropdown.

use crate::app::{AppIntent, AppState};
use crate::core::EditorMode;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active = state.editor.active_mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Modus:");
            ui.separator();

            egui::ComboBox::from_id_salt("mode_select")
                .selected_text(active.label())
                .show_ui(ui, |ui| {
                    for mode in EditorMode::ALL {
                        if ui.selectable_label(active == mode, mode.label()).clicked()
                            && mode != active
                        {
                            events.push(AppIntent::ModeSelected { mode });
                        }
                    }
                });

            if active.is_drawing() {
                ui.separator();
                ui.label("Zeichnen: Klicks setzen Vertices, Doppelklick schließt ab");
            }
        });
    });

    events
}
