//! Mapping von UI-/Engine-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ModeSelected { mode } => vec![AppCommand::SetEditorMode { mode }],
        AppIntent::FeatureClicked { index } => {
            // Zeichenmodi unterstützen keine Klick-Selektion; Intent verfällt.
            if state.editor.active_mode.supports_selection() {
                vec![AppCommand::SelectFeature { index }]
            } else {
                Vec::new()
            }
        }
        AppIntent::EditEmitted {
            collection,
            kind,
            context,
        } => vec![AppCommand::ApplyEdit {
            collection,
            kind,
            context,
        }],
        AppIntent::CommandButtonPressed { name } => vec![AppCommand::RunNamedCommand { name }],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::TilesLoaded => vec![AppCommand::MarkMapReady],
    }
}
