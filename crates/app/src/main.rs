use game_core::Game;
use std::time::{SystemTime, UNIX_EPOCH};

use macroquad::prelude::*;

use app::animation;
use app::app_loop::{AppState, BumpFx};
use app::demo_level;

mod frame_input;
mod ui_render;

fn window_conf() -> Conf {
    Conf {
        window_title: "Just Go".to_owned(),
        window_width: 960,
        window_height: 540,
        ..Default::default()
    }
}

fn runtime_seed() -> u64 {
    let nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |since| since.as_nanos());
    (nanos as u64) ^ ((nanos >> 64) as u64) ^ u64::from(std::process::id()).rotate_left(17)
}

#[macroquad::main(window_conf)]
async fn main() {
    let level = match demo_level::demo() {
        Ok(level) => level,
        Err(err) => {
            eprintln!("demo level: {err}");
            return;
        }
    };
    let mut game = match Game::new(&level, 1) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("level rejected: {err}");
            return;
        }
    };
    let mut app_state = AppState::new(runtime_seed());

    let mut last_turn = game.turn();
    let mut move_started = get_time();
    let mut active_bump: Option<BumpFx> = None;
    let mut wiggle_started = f64::NEG_INFINITY;

    loop {
        let input = frame_input::capture_frame_input();
        app_state.tick(&mut game, &input.keys_pressed);

        if game.turn() != last_turn {
            last_turn = game.turn();
            move_started = get_time();
        }
        if let Some(bump) = app_state.bump_this_frame {
            active_bump = Some(bump);
            wiggle_started = get_time();
        }

        let move_elapsed = (get_time() - move_started) as f32;
        let wiggle_elapsed = (get_time() - wiggle_started) as f32;
        if move_elapsed >= animation::MOVE_DURATION {
            // Interpolation is spent; snap logical positions onto targets.
            let ids: Vec<_> = game.state().actors.keys().collect();
            for id in ids {
                game.settle(id);
            }
        }

        clear_background(BLACK);
        ui_render::draw_frame(&game, &app_state, active_bump, move_elapsed, wiggle_elapsed);
        next_frame().await
    }
}
