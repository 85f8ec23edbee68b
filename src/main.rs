//! GeoJSON Map Editor.
//!
//! Interaktiver Editor für GeoJSON-Geometrie (Punkte, Linien, Polygone)
//! über einer OpenStreetMap-Basiskarte, gebaut mit egui/eframe.

use eframe::egui;
use geojson_map_editor::engine::{MapEditEngine, NullMapEngine};
use geojson_map_editor::{ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "GeoJSON Map Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("GeoJSON Map Editor"),
            ..Default::default()
        };

        eframe::run_native(
            "GeoJSON Map Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    engine: Box<dyn MapEditEngine>,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            engine: Box::new(NullMapEngine::new()),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = self.collect_ui_events(ctx);
        events.extend(self.engine.poll_events().into_iter().map(AppIntent::from));

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        // Engine-Konfiguration als reine Projektion des neuen Zustands
        let scene = self
            .controller
            .build_render_scene(&self.state, self.state.view.viewport_size);
        self.engine.configure(&scene);

        if has_meaningful_events {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_action_panel(ctx, &self.state));
        events.extend(ui::show_map_view(ctx, &self.state, self.engine.as_mut()));

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
