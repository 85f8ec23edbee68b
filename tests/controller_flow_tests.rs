use geojson_map_editor::{
    AppCommand, AppController, AppIntent, AppState, EditContext, EditKind, EditorMode, Feature,
    FeatureCollection,
};
use serde_json::json;
use std::sync::Arc;

fn point_feature(lon: f64, lat: f64) -> Feature {
    Feature::new(json!({"type": "Point", "coordinates": [lon, lat]}))
}

fn polygon_feature() -> Feature {
    Feature::new(json!({
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
    }))
}

fn collection_with(count: usize) -> FeatureCollection {
    let mut collection = FeatureCollection::new();
    for i in 0..count {
        collection.features.push(point_feature(i as f64, 0.0));
    }
    collection
}

fn state_with_features(count: usize) -> AppState {
    let mut state = AppState::new();
    state.features = Arc::new(collection_with(count));
    state
}

#[test]
fn test_mode_selected_roundtrips_for_every_mode() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert_eq!(state.editor.active_mode, EditorMode::View);

    for mode in EditorMode::ALL {
        controller
            .handle_intent(&mut state, AppIntent::ModeSelected { mode })
            .expect("ModeSelected sollte ohne Fehler durchlaufen");
        assert_eq!(state.editor.active_mode, mode);
    }

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(
        last,
        AppCommand::SetEditorMode {
            mode: EditorMode::Modify
        }
    ));
}

#[test]
fn test_add_edit_replaces_collection_and_selects_new_feature() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.editor.active_mode = EditorMode::DrawPolygon;

    // Engine meldet: Polygon fertig gezeichnet, Index 0
    let mut drawn = FeatureCollection::new();
    drawn.features.push(polygon_feature());

    controller
        .handle_intent(
            &mut state,
            AppIntent::EditEmitted {
                collection: drawn.clone(),
                kind: EditKind::AddFeature,
                context: EditContext::single(0),
            },
        )
        .expect("EditEmitted sollte ohne Fehler durchlaufen");

    assert_eq!(*state.features, drawn);
    assert_eq!(state.selected_count(), 1);
    assert!(state.selection.selected_feature_indexes.contains(&0));
}

#[test]
fn test_non_add_edit_leaves_selection_untouched() {
    let mut controller = AppController::new();
    let mut state = state_with_features(2);
    state.selection.ids_mut().insert(1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::EditEmitted {
                collection: collection_with(2),
                kind: EditKind::MovePosition,
                context: EditContext::default(),
            },
        )
        .expect("MovePosition-Edit sollte ohne Fehler durchlaufen");

    assert!(state.selection.selected_feature_indexes.contains(&1));
    assert_eq!(state.selected_count(), 1);
}

#[test]
fn test_feature_click_selects_in_view_mode() {
    let mut controller = AppController::new();
    let mut state = state_with_features(3);
    assert_eq!(state.editor.active_mode, EditorMode::View);

    controller
        .handle_intent(&mut state, AppIntent::FeatureClicked { index: Some(2) })
        .expect("FeatureClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.selected_count(), 1);
    assert!(state.selection.selected_feature_indexes.contains(&2));

    // Zweiter Klick ersetzt die Selektion (Einzelselektion)
    controller
        .handle_intent(&mut state, AppIntent::FeatureClicked { index: Some(0) })
        .expect("FeatureClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.selected_count(), 1);
    assert!(state.selection.selected_feature_indexes.contains(&0));
}

#[test]
fn test_feature_click_selects_in_modify_mode() {
    let mut controller = AppController::new();
    let mut state = state_with_features(2);
    state.editor.active_mode = EditorMode::Modify;

    controller
        .handle_intent(&mut state, AppIntent::FeatureClicked { index: Some(1) })
        .expect("FeatureClicked sollte ohne Fehler durchlaufen");

    assert!(state.selection.selected_feature_indexes.contains(&1));
}

#[test]
fn test_out_of_range_click_leaves_selection_unchanged() {
    let mut controller = AppController::new();
    let mut state = state_with_features(2);
    state.selection.ids_mut().insert(0);

    // Index 5 löst bei 2 Features nicht auf → stille Ablehnung, kein Fehler
    controller
        .handle_intent(&mut state, AppIntent::FeatureClicked { index: Some(5) })
        .expect("Ungültiger Index darf keinen Fehler erzeugen");

    assert_eq!(state.selected_count(), 1);
    assert!(state.selection.selected_feature_indexes.contains(&0));
}

#[test]
fn test_click_without_hit_leaves_selection_unchanged() {
    let mut controller = AppController::new();
    let mut state = state_with_features(2);
    state.selection.ids_mut().insert(1);

    controller
        .handle_intent(&mut state, AppIntent::FeatureClicked { index: None })
        .expect("Klick ohne Treffer sollte ohne Fehler durchlaufen");

    assert!(state.selection.selected_feature_indexes.contains(&1));
}

#[test]
fn test_clicks_in_drawing_modes_never_change_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_features(3);
    state.selection.ids_mut().insert(1);

    for mode in [
        EditorMode::DrawPoint,
        EditorMode::DrawLine,
        EditorMode::DrawPolygon,
    ] {
        state.editor.active_mode = mode;
        let log_len_before = state.command_log.len();

        controller
            .handle_intent(&mut state, AppIntent::FeatureClicked { index: Some(0) })
            .expect("Klick im Zeichenmodus sollte ohne Fehler durchlaufen");

        assert!(
            state.selection.selected_feature_indexes.contains(&1),
            "Modus {mode:?} darf die Selektion nicht ändern"
        );
        // Intent verfällt bereits im Mapping, es wird kein Command ausgeführt
        assert_eq!(state.command_log.len(), log_len_before);
    }
}

#[test]
fn test_clear_all_empties_features_and_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_features(2);
    state.selection.ids_mut().insert(0);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CommandButtonPressed {
                name: "Clear All".to_string(),
            },
        )
        .expect("Clear All sollte ohne Fehler durchlaufen");

    assert!(state.features.is_empty());
    assert!(state.selection.is_empty());
}

#[test]
fn test_clear_all_on_empty_session_is_harmless() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CommandButtonPressed {
                name: "Clear All".to_string(),
            },
        )
        .expect("Clear All auf leerer Session sollte ohne Fehler durchlaufen");

    assert!(state.features.is_empty());
    assert!(state.selection.is_empty());
}

#[test]
fn test_unknown_command_fails_and_leaves_state_unchanged() {
    let mut controller = AppController::new();
    let mut state = state_with_features(2);
    state.selection.ids_mut().insert(1);
    state.editor.active_mode = EditorMode::Modify;

    let result = controller.handle_intent(
        &mut state,
        AppIntent::CommandButtonPressed {
            name: "nonexistent".to_string(),
        },
    );

    let err = result.expect_err("Unbekanntes Kommando muss fehlschlagen");
    assert!(err.to_string().contains("nonexistent"));

    // Session-Zustand unverändert
    assert_eq!(state.feature_count(), 2);
    assert!(state.selection.selected_feature_indexes.contains(&1));
    assert_eq!(state.editor.active_mode, EditorMode::Modify);
}

#[test]
fn test_draw_polygon_then_clear_all_scenario() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Modus wählen
    controller
        .handle_intent(
            &mut state,
            AppIntent::ModeSelected {
                mode: EditorMode::DrawPolygon,
            },
        )
        .expect("ModeSelected sollte funktionieren");

    // Polygon zeichnen (Edit-Event der Engine)
    let mut drawn = FeatureCollection::new();
    drawn.features.push(polygon_feature());
    controller
        .handle_intent(
            &mut state,
            AppIntent::EditEmitted {
                collection: drawn,
                kind: EditKind::AddFeature,
                context: EditContext::single(0),
            },
        )
        .expect("EditEmitted sollte funktionieren");

    assert_eq!(state.feature_count(), 1);
    assert!(state.selection.selected_feature_indexes.contains(&0));

    // Clear All
    controller
        .handle_intent(
            &mut state,
            AppIntent::CommandButtonPressed {
                name: "Clear All".to_string(),
            },
        )
        .expect("Clear All sollte funktionieren");

    assert!(state.features.is_empty());
    assert!(state.selection.is_empty());
}

#[test]
fn test_stale_selection_is_filtered_in_render_scene() {
    let mut controller = AppController::new();
    let mut state = state_with_features(3);
    state.selection.ids_mut().insert(2);

    // Edit entfernt Features ohne neue Selektion zu nennen
    controller
        .handle_intent(
            &mut state,
            AppIntent::EditEmitted {
                collection: collection_with(1),
                kind: EditKind::RemovePosition,
                context: EditContext::default(),
            },
        )
        .expect("RemovePosition-Edit sollte funktionieren");

    // Session behält den verwaisten Index, die Projektion filtert ihn
    assert!(state.selection.selected_feature_indexes.contains(&2));
    let scene = controller.build_render_scene(&state, [1280.0, 720.0]);
    assert!(scene.selected_feature_indexes.is_empty());
}

#[test]
fn test_select_or_clear_clears_on_invalid_index() {
    use geojson_map_editor::app::handlers::selection;

    let mut state = state_with_features(2);
    state.selection.ids_mut().insert(1);

    // Explizit aufgerufene Clear-Variante leert bei ungültigem Index
    selection::select_or_clear(&mut state, Some(7));
    assert!(state.selection.is_empty());

    selection::select_or_clear(&mut state, Some(0));
    assert!(state.selection.selected_feature_indexes.contains(&0));

    selection::select_or_clear(&mut state, None);
    assert!(state.selection.is_empty());
}

#[test]
fn test_viewport_resize_and_tiles_loaded_update_view_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1024.0, 768.0],
            },
        )
        .expect("ViewportResized sollte funktionieren");
    assert_eq!(state.view.viewport_size, [1024.0, 768.0]);

    assert!(!state.view.map_ready);
    controller
        .handle_intent(&mut state, AppIntent::TilesLoaded)
        .expect("TilesLoaded sollte funktionieren");
    assert!(state.view.map_ready);
}

#[test]
fn test_command_log_records_executed_commands_in_order() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ModeSelected {
                mode: EditorMode::DrawPoint,
            },
        )
        .expect("ModeSelected sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::CommandButtonPressed {
                name: "Clear All".to_string(),
            },
        )
        .expect("Clear All sollte funktionieren");

    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 2);
    assert!(matches!(
        entries[0],
        AppCommand::SetEditorMode {
            mode: EditorMode::DrawPoint
        }
    ));
    assert!(matches!(entries[1], AppCommand::RunNamedCommand { .. }));
}
