//! No-op-Engine für Headless-Betrieb.

use super::{EngineEvent, MapEditEngine};
use crate::shared::RenderScene;

/// Engine-Stub ohne Rendering.
///
/// Hält die Anwendung lauffähig, wenn keine echte Map-Engine angebunden ist:
/// verwirft Szenen und Klicks, liefert keine Ereignisse. Der Viewport zeigt
/// dann nur Platzhalter und Attribution.
#[derive(Debug, Default)]
pub struct NullMapEngine;

impl NullMapEngine {
    /// Erstellt den Stub.
    pub fn new() -> Self {
        Self
    }
}

impl MapEditEngine for NullMapEngine {
    fn configure(&mut self, _scene: &RenderScene) {}

    fn handle_click(&mut self, screen_pos: [f32; 2]) {
        log::debug!(
            "Klick bei ({:.1}, {:.1}) verworfen: keine Engine angebunden",
            screen_pos[0],
            screen_pos[1]
        );
    }

    fn poll_events(&mut self) -> Vec<EngineEvent> {
        Vec::new()
    }
}
