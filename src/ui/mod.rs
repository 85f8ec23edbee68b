//! UI-Komponenten: Modus-Toolbar, Aktions-Panel, Status-Bar, Map-Viewport.

pub mod map_view;
pub mod panel;
pub mod status;
pub mod toolbar;

pub use map_view::show_map_view;
pub use panel::render_action_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
