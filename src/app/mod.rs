//! Application-Layer: Controller, State, Events und Handler.

pub mod command_log;
pub mod commands;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
pub mod state;

pub use crate::core::{EditorMode, FeatureCollection};
pub use command_log::CommandLog;
pub use commands::{CommandCatalog, CommandEffect};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, EditorModeState, SelectionState, ViewState};
