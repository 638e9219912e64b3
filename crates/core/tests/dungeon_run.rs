//! End-to-end run through a composed level, driving only the public API the
//! way a front end would: feed directions, resolve questions, read events.

use game_core::level::{DoorSpawn, EnemySpawn, ItemSpawn};
use game_core::{
    ActorKind, EnemyKind, Game, ItemKind, LevelData, Pos, TurnOutcome, Visibility, WorldEvent,
};

/// Two rooms joined by a door on a single corridor row:
///
/// ```text
/// ########
/// #@ i+ e#      @ player   i dagger   + door   e skeleton
/// ########
/// ```
fn corridor_level() -> LevelData {
    let width = 10;
    let height = 5;
    let mut blocked = vec![true; width * height];
    for x in 1..(width - 1) {
        blocked[2 * width + x] = false;
    }
    LevelData {
        width,
        height,
        blocked,
        player: Pos { x: 1, y: 2 },
        doors: vec![DoorSpawn { pos: Pos { x: 4, y: 2 }, strength: 1 }],
        enemies: vec![EnemySpawn { kind: EnemyKind::Skeleton, pos: Pos { x: 7, y: 2 } }],
        boss: None,
        items: vec![ItemSpawn { kind: ItemKind::Dagger, pos: Pos { x: 3, y: 2 } }],
        hazards: Vec::new(),
    }
}

#[test]
fn fight_through_the_corridor() {
    let mut game = Game::new(&corridor_level(), 1).expect("level loads");
    let player = game.state().player_id;
    let door = game.state().doors[0];
    let skeleton = game.state().enemies[0];

    // The closed door hides the far room at spawn.
    assert!(game.state().fog.is_visible(Pos { x: 4, y: 2 }));
    assert!(!game.state().fog.is_visible(Pos { x: 6, y: 2 }));

    // Step east, then grab the dagger (a blocked move that spends it).
    assert_eq!(game.process_turn(1, 0), TurnOutcome::Advanced { player_moved: true });
    assert_eq!(game.process_turn(1, 0), TurnOutcome::Advanced { player_moved: false });
    assert_eq!(game.state().actors[player].damage_value, 2);

    // Onto the dagger tile, then into the door: one basic question.
    assert_eq!(game.process_turn(1, 0), TurnOutcome::Advanced { player_moved: true });
    assert_eq!(game.process_turn(1, 0), TurnOutcome::Advanced { player_moved: false });
    assert_eq!(game.pending_target(), Some(door));
    game.resolve_correct().expect("door question pending");
    assert!(!game.state().actors[door].alive());

    // With the door open, the next successful step relights the far room
    // and wakes the skeleton, which starts walking toward the player.
    assert_eq!(game.process_turn(1, 0), TurnOutcome::Advanced { player_moved: true });
    assert!(game.state().fog.is_visible(Pos { x: 6, y: 2 }));
    assert_eq!(game.state().actors[skeleton].target_pos, Pos { x: 6, y: 2 });

    // Player keeps advancing; the skeleton's counter-step reaches the
    // player's claimed tile and opens the fight.
    assert_eq!(game.process_turn(1, 0), TurnOutcome::Advanced { player_moved: true });
    assert_eq!(game.pending_target(), Some(skeleton));

    // Dagger damage: the two-heart skeleton dies to one correct answer.
    game.resolve_correct().expect("skeleton question pending");
    assert!(!game.state().actors[skeleton].alive());
    assert!(game.log().contains(&WorldEvent::EnemySlain { enemy: skeleton }));

    // The corpse no longer blocks the corridor.
    assert_eq!(game.process_turn(1, 0), TurnOutcome::Advanced { player_moved: true });
    assert_eq!(game.process_turn(1, 0), TurnOutcome::Advanced { player_moved: true });
}

#[test]
fn explored_tiles_survive_walking_away() {
    let mut game = Game::new(&corridor_level(), 1).expect("level loads");

    // Open the door and light the far room.
    for _ in 0..3 {
        game.process_turn(1, 0);
    }
    game.process_turn(1, 0);
    game.resolve_correct().expect("door question pending");
    game.process_turn(1, 0);
    let far = Pos { x: 6, y: 2 };
    assert_eq!(game.state().fog.state_at(far), Visibility::Visible);

    // Retreat west; the far room dims but is never forgotten.
    game.process_turn(-1, 0);
    game.process_turn(-1, 0);
    let state = game.state().fog.state_at(far);
    assert_ne!(state, Visibility::Unseen);
}

#[test]
fn dead_actors_stay_in_their_containers() {
    let mut game = Game::new(&corridor_level(), 1).expect("level loads");
    let door = game.state().doors[0];

    for _ in 0..3 {
        game.process_turn(1, 0);
    }
    game.process_turn(1, 0);
    game.resolve_correct().expect("door question pending");

    assert!(!game.state().actors[door].alive());
    assert_eq!(game.state().doors.len(), 1, "slot survives until level reload");
    assert_eq!(game.state().actors[door].kind, ActorKind::Door);
}
