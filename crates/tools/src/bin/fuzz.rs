//! Random-walk harness: drive a fully stocked level with random steps and
//! random answers, checking world invariants after every turn.

use anyhow::Result;
use clap::Parser;
use game_core::level::{BossSpawn, DoorSpawn, EnemySpawn, ItemSpawn};
use game_core::{
    ActorKind, BossKind, EnemyKind, Game, ItemKind, LevelData, Pos, TurnOutcome, WorldEvent,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    turns: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

/// A room with one of everything, so the walk can hit every interaction.
fn stocked_level() -> LevelData {
    let width = 20;
    let height = 14;
    let mut blocked = vec![false; width * height];
    for x in 0..width {
        blocked[x] = true;
        blocked[(height - 1) * width + x] = true;
    }
    for y in 0..height {
        blocked[y * width] = true;
        blocked[y * width + (width - 1)] = true;
    }
    LevelData {
        width,
        height,
        blocked,
        player: Pos { x: 3, y: 3 },
        doors: vec![DoorSpawn { pos: Pos { x: 8, y: 3 }, strength: 2 }],
        enemies: vec![
            EnemySpawn { kind: EnemyKind::Rat, pos: Pos { x: 6, y: 9 } },
            EnemySpawn { kind: EnemyKind::Skeleton, pos: Pos { x: 12, y: 4 } },
        ],
        boss: Some(BossSpawn { kind: BossKind::StoneGolem, pos: Pos { x: 14, y: 8 } }),
        items: vec![
            ItemSpawn { kind: ItemKind::HealthPotion, pos: Pos { x: 4, y: 7 } },
            ItemSpawn { kind: ItemKind::Dagger, pos: Pos { x: 10, y: 11 } },
        ],
        hazards: vec![Pos { x: 5, y: 5 }, Pos { x: 11, y: 8 }],
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("fuzzing seed {} for up to {} turns...", args.seed, args.turns);
    let mut game =
        Game::new(&stocked_level(), 1).map_err(|e| anyhow::anyhow!("level rejected: {e}"))?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    const STEPS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

    for _ in 0..args.turns {
        let (dx, dy) = choose(&mut rng, &STEPS);
        let outcome = game.process_turn(dx, dy);
        assert_ne!(outcome, TurnOutcome::Suspended, "stepped while a question was pending");

        while game.pending_target().is_some() {
            // Bias toward correct so the walk makes progress.
            let correct = rng.next_u64() % 4 != 0;
            let resolved = if correct { game.resolve_correct() } else { game.resolve_wrong() };
            resolved.map_err(|e| anyhow::anyhow!("resolution failed: {e:?}"))?;
        }

        let state = game.state();
        for (_, actor) in &state.actors {
            if matches!(actor.kind, ActorKind::Hazard(_)) || actor.hp <= 0 {
                continue;
            }
            assert!(
                state.terrain.in_bounds(actor.target_pos),
                "live actor claimed an off-map tile"
            );
            if actor.footprint == 1 {
                assert!(
                    !state.terrain.is_blocked(actor.target_pos),
                    "live actor claimed a wall tile"
                );
            }
        }

        if game.log().contains(&WorldEvent::GameOver) {
            println!("run ended in game over after {} turns", game.turn());
            break;
        }
    }

    println!("fuzzing completed, {} turns, hash 0x{:016x}", game.turn(), game.snapshot_hash());
    Ok(())
}
