//! Application Controller für zentrale Event-Verarbeitung.

use super::commands::CommandEffect;
use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-/Engine-Events auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Modus & Editing ===
            AppCommand::SetEditorMode { mode } => handlers::editing::set_mode(state, mode),
            AppCommand::ApplyEdit {
                collection,
                kind,
                context,
            } => handlers::editing::apply_edit(state, collection, kind, context),

            // === Selektion ===
            AppCommand::SelectFeature { index } => handlers::selection::select_feature(state, index),

            // === Benannte Kommandos ===
            AppCommand::RunNamedCommand { name } => {
                // Unbekannter Name ist ein Verdrahtungsfehler, kein User-Input.
                let effect = state
                    .commands
                    .lookup(&name)
                    .ok_or_else(|| anyhow::anyhow!("Unbekanntes Kommando: {name:?}"))?;
                match effect {
                    CommandEffect::ClearAll => handlers::editing::clear_all(state),
                }
            }

            // === Viewport & Map-Status ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::MarkMapReady => handlers::view::mark_map_ready(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
