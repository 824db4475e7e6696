use blockfall::core::{GameSnapshot, GameState, Settings, Theme};
use blockfall::store::SaveStore;
use blockfall::types::{GameAction, PieceKind};
use tempfile::tempdir;

fn played() -> GameState {
    let mut settings = Settings::default();
    settings.theme = Theme::Retro;
    settings.next_count = 3;
    GameState::new(2024, settings)
        .reduce(GameAction::Start)
        .reduce(GameAction::Hold)
        .reduce(GameAction::HardDrop)
        .reduce(GameAction::HardDrop)
}

#[test]
fn snapshot_json_shape() {
    let state = played();
    let json = serde_json::to_value(state.snapshot()).unwrap();

    let board = json["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    assert!(board.iter().all(|row| row.as_array().unwrap().len() == 10));

    let piece = &json["currentPiece"];
    assert!(piece["kind"].is_string());
    assert!(piece["rotation"].is_string());
    assert!(piece["x"].is_number());

    assert_eq!(json["holdPiece"], state.hold_piece().unwrap().as_str());
    assert_eq!(json["isStarted"], true);
    assert_eq!(json["isPaused"], false);
    assert_eq!(json["settings"]["theme"], "retro");
    assert_eq!(json["stats"]["piecesSpawned"], state.stats().pieces_spawned);
}

#[test]
fn board_ids_follow_piece_ids() {
    let state = played();
    let snap = state.snapshot();
    for (y, row) in snap.board.iter().enumerate() {
        for (x, &id) in row.iter().enumerate() {
            let cell = state.board().get(x as i8, y as i8).unwrap();
            assert_eq!(PieceKind::from_id(id), cell);
        }
    }
}

#[test]
fn save_load_restore_through_the_store() {
    let dir = tempdir().expect("Failed to create temp directory");
    let store = SaveStore::new(dir.path().join("save.json"));
    let state = played();

    store.save(&state.snapshot()).unwrap();
    let loaded: GameSnapshot = store.load().unwrap().unwrap();
    assert_eq!(loaded, state.snapshot());

    let restored = store.load_or_default(1);
    assert!(!restored.started());
    assert_eq!(restored.board().filled_count(), 0);
    assert_eq!(restored.stats().high_score, state.stats().score);
    assert_eq!(restored.settings().theme, Theme::Retro);
    assert_eq!(restored.settings().next_count, 3);
}
