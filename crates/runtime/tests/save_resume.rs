//! Save and resume a session built from the shipped scenario.

use std::path::Path;

use game_content::ContentFactory;
use game_core::{
    AccuseAction, Action, GameEngine, GameSnapshot, GameState, GameTime, MoveAction,
    ObserveAction, SessionParams, Target, WorldBuilder,
};
use runtime::{SaveService, SaveSummary};

fn manor_state(session_id: &str) -> GameState {
    let factory = ContentFactory::new(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/scenarios/manor"),
    );
    let spec = factory.load_scenario().expect("shipped scenario loads");
    let config = factory.load_config().expect("shipped config loads");
    WorldBuilder::new(&spec)
        .config(config)
        .build(SessionParams {
            session_id: session_id.into(),
            player_name: "Ada".into(),
            game_seed: 42,
        })
        .expect("shipped scenario is consistent")
}

#[test]
fn session_resumes_where_it_was_saved() {
    let dir = tempfile::tempdir().unwrap();
    let service = SaveService::new_file_based(dir.path()).unwrap();

    let mut state = manor_state("2026101808000000");
    let library = state.world.room_by_name("Library").unwrap();
    let bookshelf = state.entities.item_by_name("Bookshelf").unwrap();
    {
        let mut engine = GameEngine::new(&mut state);
        engine.execute(&Action::Move(MoveAction::new(library))).unwrap();
        engine
            .execute(&Action::Observe(ObserveAction::new(Target::Item(bookshelf))))
            .unwrap();
    }
    service.save(&GameSnapshot::capture(&state)).unwrap();

    let resumed = service
        .latest_resumable()
        .unwrap()
        .expect("unfinished session is resumable")
        .restore()
        .unwrap();

    assert_eq!(resumed, state);
    assert_eq!(resumed.current_room(), library);
    assert_eq!(resumed.clock.now(), GameTime::new(8, 30));
    assert!(resumed.entities.item(bookshelf).unwrap().observed);
}

#[test]
fn finished_sessions_are_listed_but_not_resumed() {
    let dir = tempfile::tempdir().unwrap();
    let service = SaveService::new_file_based(dir.path()).unwrap();

    let mut finished = manor_state("2026101809000000");
    let suspect = finished.entities.npc_by_name("Mrs. Pike").unwrap();
    let weapon = finished.entities.item_by_name("Rope").unwrap();
    GameEngine::new(&mut finished)
        .execute(&Action::Accuse(AccuseAction::new(suspect, weapon)))
        .unwrap();
    service.save(&GameSnapshot::capture(&finished)).unwrap();

    assert_eq!(
        service.list().unwrap(),
        vec![SaveSummary {
            id: "2026101809000000".into(),
            ended: true
        }]
    );
    assert!(service.latest_resumable().unwrap().is_none());
}
