//! Headless runner: load a level from json, feed it a scripted move string,
//! auto-resolve every question with a fixed policy, and print the event log
//! plus the final snapshot hash.

use std::fs;

use anyhow::{Context, Result, bail};
use clap::Parser;
use game_core::{Game, LevelData, TurnOutcome};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the level JSON file
    #[arg(short, long)]
    level: String,
    /// Scripted steps, one letter each: U, D, L, R
    #[arg(short, long, default_value = "")]
    moves: String,
    /// How to resolve every triggered question
    #[arg(short, long, value_enum, default_value_t = AnswerPolicy::Correct)]
    answer: AnswerPolicy,
    /// Dungeon depth used for question scaling
    #[arg(long, default_value_t = 1)]
    depth: u8,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum AnswerPolicy {
    Correct,
    Wrong,
    Cancel,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let level_data = fs::read_to_string(&args.level)
        .with_context(|| format!("failed to read level file: {}", args.level))?;
    let level: LevelData =
        serde_json::from_str(&level_data).context("failed to deserialize level JSON")?;
    let mut game =
        Game::new(&level, args.depth).map_err(|e| anyhow::anyhow!("level rejected: {e}"))?;

    for (index, step) in args.moves.chars().enumerate() {
        let (dx, dy) = match step.to_ascii_uppercase() {
            'U' => (0, -1),
            'D' => (0, 1),
            'L' => (-1, 0),
            'R' => (1, 0),
            other => bail!("move {index}: unknown step '{other}' (expected U, D, L, or R)"),
        };

        let outcome = game.process_turn(dx, dy);
        if outcome == TurnOutcome::Suspended {
            bail!("move {index}: input arrived while a question was still pending");
        }

        while game.pending_target().is_some() {
            let resolved = match args.answer {
                AnswerPolicy::Correct => game.resolve_correct(),
                AnswerPolicy::Wrong => game.resolve_wrong(),
                AnswerPolicy::Cancel => game.resolve_cancel(),
            };
            resolved.map_err(|e| anyhow::anyhow!("resolution failed: {e:?}"))?;
        }
    }

    for event in game.log() {
        println!("{event:?}");
    }
    println!("turns: {}", game.turn());
    println!("snapshot hash: 0x{:016x}", game.snapshot_hash());

    Ok(())
}
