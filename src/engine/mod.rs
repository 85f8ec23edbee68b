//! Schnittstelle zur externen Render-/Edit-Engine.
//!
//! Tile-Laden, Rendering, Hit-Testing und die Zeichen-/Modify-Statemachines
//! liegen vollständig hinter diesem Trait. Die Session schiebt pro Frame ihre
//! Projektion (`RenderScene`) hinein und holt Engine-Ereignisse ab.

pub mod events;
mod null;

pub use events::{EditContext, EditKind, EngineEvent};
pub use null::NullMapEngine;

use crate::shared::RenderScene;

/// Vertrag der externen Map-/Geometrie-Edit-Engine.
pub trait MapEditEngine {
    /// Übergibt die aktuelle Szene (Features, Modus, Selektion, Stil, Tiles).
    ///
    /// Wird nach jeder Intent-Verarbeitung erneut aufgerufen; die Engine darf
    /// die Szene als vollständigen, konsistenten Snapshot behandeln.
    fn configure(&mut self, scene: &RenderScene);

    /// Reicht einen rohen Viewport-Klick (Screen-Koordinaten) weiter.
    ///
    /// Hit-Testing ist Engine-Sache; ein Treffer kommt asynchron als
    /// [`EngineEvent::FeatureClicked`] zurück.
    fn handle_click(&mut self, screen_pos: [f32; 2]);

    /// Holt seit dem letzten Aufruf aufgelaufene Engine-Ereignisse ab.
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}
