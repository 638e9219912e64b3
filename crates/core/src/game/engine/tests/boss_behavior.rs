use super::support::*;
use crate::level::BossSpawn;

#[test]
fn boss_charges_five_turns_then_acts_on_the_sixth() {
    let mut level = room(24, 16);
    level.player = Pos { x: 3, y: 8 };
    level.boss = Some(BossSpawn { kind: BossKind::StoneGolem, pos: Pos { x: 16, y: 6 } });
    let mut game = Game::new(&level, 2).expect("level loads");
    let boss = game.state().boss.expect("boss spawned");
    let start = game.state().actors[boss].target_pos;

    // Oscillate so every player turn succeeds.
    let mut dir = 1;
    let mut step = |game: &mut Game| {
        assert_eq!(game.process_turn(dir, 0), TurnOutcome::Advanced { player_moved: true });
        dir = -dir;
    };

    for _ in 0..5 {
        step(&mut game);
        assert_eq!(game.state().actors[boss].target_pos, start, "still priming");
    }

    step(&mut game);
    let after_first_act = game.state().actors[boss].target_pos;
    assert_ne!(after_first_act, start, "acts once primed");

    // The cycle repeats: five more idle turns, then another burst.
    for _ in 0..5 {
        step(&mut game);
        assert_eq!(game.state().actors[boss].target_pos, after_first_act);
    }
    step(&mut game);
    assert_ne!(game.state().actors[boss].target_pos, after_first_act);
}

#[test]
fn boss_burst_covers_its_full_speed_budget() {
    let mut level = room(24, 16);
    level.player = Pos { x: 3, y: 6 };
    level.boss = Some(BossSpawn { kind: BossKind::StoneGolem, pos: Pos { x: 18, y: 6 } });
    let mut game = Game::new(&level, 2).expect("level loads");
    let boss = game.state().boss.expect("boss spawned");

    let mut dir = 1;
    for _ in 0..6 {
        game.process_turn(dir, 0);
        dir = -dir;
    }

    // Same row, clear line: four full tiles west in one acting turn.
    assert_eq!(game.state().actors[boss].target_pos, Pos { x: 14, y: 6 });
}

#[test]
fn walking_into_the_boss_queues_three_questions() {
    let mut level = room(24, 16);
    level.player = Pos { x: 8, y: 7 };
    level.boss = Some(BossSpawn { kind: BossKind::StoneGolem, pos: Pos { x: 9, y: 6 } });
    let mut game = Game::new(&level, 3).expect("level loads");
    let boss = game.state().boss.expect("boss spawned");
    let player = game.state().player_id;

    // (9, 7) is inside the 4x4 footprint rooted at (9, 6).
    let outcome = game.process_turn(1, 0);
    assert_eq!(outcome, TurnOutcome::Advanced { player_moved: false });
    assert_eq!(game.pending_target(), Some(boss));

    game.resolve_correct().expect("round one pending");
    assert_eq!(game.state().actors[boss].hp, 5);
    assert_eq!(game.pending_target(), Some(boss), "second round re-triggers");

    game.resolve_wrong().expect("round two pending");
    assert_eq!(game.state().actors[boss].hp, 6, "boss recovers on a miss");
    assert_eq!(game.state().actors[player].hp, 3, "boss misses cost double");
    assert_eq!(game.pending_target(), Some(boss), "third round re-triggers");

    game.resolve_correct().expect("round three pending");
    assert_eq!(game.pending_target(), None, "queue exhausted");

    assert_eq!(
        count(&game, |e| matches!(
            e,
            WorldEvent::QuestionTriggered { problem: ProblemSpec::Leveled { boss: true, level: 3 }, .. }
        )),
        3
    );
}

#[test]
fn killing_blow_ends_the_encounter_early_with_boss_defeated() {
    let mut level = room(24, 16);
    level.player = Pos { x: 8, y: 7 };
    level.boss = Some(BossSpawn { kind: BossKind::StoneGolem, pos: Pos { x: 9, y: 6 } });
    let mut game = Game::new(&level, 3).expect("level loads");
    let boss = game.state().boss.expect("boss spawned");

    game.process_turn(1, 0);
    game.state.actors[boss].hp = 1;
    game.resolve_correct().expect("pending");

    assert!(!game.state().actors[boss].alive());
    assert_eq!(game.pending_target(), None, "remaining rounds are discarded");
    assert_eq!(count(&game, |e| matches!(e, WorldEvent::BossDefeated { .. })), 1);

    // A dead boss neither blocks nor reacts.
    let outcome = game.process_turn(1, 0);
    assert_eq!(outcome, TurnOutcome::Advanced { player_moved: true });
}
