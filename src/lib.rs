//! GeoJSON Map Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod engine;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandCatalog, CommandEffect, CommandLog,
    EditorModeState, SelectionState, ViewState,
};
pub use core::{EditorMode, Feature, FeatureCollection, TileSourceConfig};
pub use engine::{EditContext, EditKind, EngineEvent, MapEditEngine, NullMapEngine};
pub use shared::{EditorOptions, RenderScene};
