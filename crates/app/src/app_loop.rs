//! Frame-level glue between keyboard input and the turn engine. Kept free
//! of any drawing so the whole loop is testable with plain key lists.

use game_core::{ActorId, Game, WorldEvent};

use macroquad::prelude::KeyCode;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::mathgen::{self, Question};

/// A rejected step to animate: the actor shakes toward the blocked tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BumpFx {
    pub actor: ActorId,
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AppMode {
    Exploring,
    /// Gameplay suspended; the overlay shows `question` for `target`.
    Asking { target: ActorId, question: Question },
    GameOver,
}

pub struct AppState {
    pub mode: AppMode,
    rng: ChaCha8Rng,
    /// Engine log entries before this index were already consumed.
    log_cursor: usize,
    /// Bump that happened this frame, if any; drives the wiggle animation.
    pub bump_this_frame: Option<BumpFx>,
}

impl AppState {
    pub fn new(seed: u64) -> Self {
        Self {
            mode: AppMode::Exploring,
            rng: ChaCha8Rng::seed_from_u64(seed),
            log_cursor: 0,
            bump_this_frame: None,
        }
    }

    /// Process one frame's input and sync the mode with the engine log.
    pub fn tick(&mut self, game: &mut Game, keys_pressed: &[KeyCode]) {
        self.bump_this_frame = None;

        match &self.mode {
            AppMode::Exploring => {
                if let Some((dx, dy)) = step_direction(keys_pressed) {
                    game.process_turn(dx, dy);
                }
            }
            AppMode::Asking { question, .. } => {
                if let Some(picked) = option_choice(keys_pressed) {
                    let correct = question.is_correct(picked);
                    // Close the overlay first; a continuing boss round will
                    // reopen it through the event drain below.
                    self.mode = AppMode::Exploring;
                    let result =
                        if correct { game.resolve_correct() } else { game.resolve_wrong() };
                    debug_assert!(result.is_ok(), "overlay open without a pending encounter");
                } else if keys_pressed.contains(&KeyCode::Escape) {
                    self.mode = AppMode::Exploring;
                    let result = game.resolve_cancel();
                    debug_assert!(result.is_ok(), "overlay open without a pending encounter");
                }
            }
            AppMode::GameOver => {}
        }

        self.drain_events(game);
    }

    fn drain_events(&mut self, game: &mut Game) {
        while self.log_cursor < game.log().len() {
            let event = game.log()[self.log_cursor];
            self.log_cursor += 1;
            match event {
                WorldEvent::QuestionTriggered { target, problem } => {
                    let question = mathgen::generate(&mut self.rng, &problem);
                    self.mode = AppMode::Asking { target, question };
                }
                WorldEvent::Bumped { actor, dx, dy } => {
                    self.bump_this_frame = Some(BumpFx { actor, dx, dy });
                }
                WorldEvent::GameOver => {
                    self.mode = AppMode::GameOver;
                }
                _ => {}
            }
        }
    }
}

/// One tile of movement per key press; vertical wins when both axes are
/// held, matching the engine's single-axis steps.
fn step_direction(keys_pressed: &[KeyCode]) -> Option<(i32, i32)> {
    let pressed = |key| keys_pressed.contains(&key);
    if pressed(KeyCode::Up) || pressed(KeyCode::W) {
        Some((0, -1))
    } else if pressed(KeyCode::Down) || pressed(KeyCode::S) {
        Some((0, 1))
    } else if pressed(KeyCode::Left) || pressed(KeyCode::A) {
        Some((-1, 0))
    } else if pressed(KeyCode::Right) || pressed(KeyCode::D) {
        Some((1, 0))
    } else {
        None
    }
}

fn option_choice(keys_pressed: &[KeyCode]) -> Option<usize> {
    const OPTION_KEYS: [KeyCode; 4] =
        [KeyCode::Key1, KeyCode::Key2, KeyCode::Key3, KeyCode::Key4];
    OPTION_KEYS.iter().position(|key| keys_pressed.contains(key))
}
