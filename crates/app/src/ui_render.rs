//! Rendering for the dungeon view, the HUD, and the question overlay.

use game_core::{ActorKind, Game, HazardPhase, Pos, Visibility};

use macroquad::prelude::*;

use app::animation;
use app::app_loop::{AppMode, AppState, BumpFx};
use app::mathgen::Question;

const TILE: f32 = 28.0;
const MARGIN: f32 = 16.0;
const HUD_HEIGHT: f32 = 40.0;

const FLOOR_LIT: Color = Color { r: 0.22, g: 0.20, b: 0.18, a: 1.0 };
const FLOOR_DIM: Color = Color { r: 0.09, g: 0.08, b: 0.08, a: 1.0 };
const WALL_LIT: Color = Color { r: 0.45, g: 0.40, b: 0.34, a: 1.0 };
const WALL_DIM: Color = Color { r: 0.18, g: 0.16, b: 0.14, a: 1.0 };
const OVERLAY_SHADE: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 0.75 };

pub fn draw_frame(
    game: &Game,
    app_state: &AppState,
    active_bump: Option<BumpFx>,
    move_elapsed: f32,
    wiggle_elapsed: f32,
) {
    draw_tiles(game);
    draw_actors(game, active_bump, move_elapsed, wiggle_elapsed);
    draw_hud(game);

    match &app_state.mode {
        AppMode::Asking { question, .. } => draw_question_overlay(question),
        AppMode::GameOver => draw_game_over_overlay(),
        AppMode::Exploring => {}
    }
}

fn draw_tiles(game: &Game) {
    let state = game.state();
    for y in 0..state.terrain.height() as i32 {
        for x in 0..state.terrain.width() as i32 {
            let pos = Pos { x, y };
            let wall = state.terrain.is_blocked(pos);
            let color = match state.fog.state_at(pos) {
                Visibility::Unseen => continue,
                Visibility::Explored => {
                    if wall {
                        WALL_DIM
                    } else {
                        FLOOR_DIM
                    }
                }
                Visibility::Visible => {
                    if wall {
                        WALL_LIT
                    } else {
                        FLOOR_LIT
                    }
                }
            };
            let (sx, sy) = screen_pos(x as f32, y as f32);
            draw_rectangle(sx, sy, TILE - 1.0, TILE - 1.0, color);
        }
    }
}

fn draw_actors(
    game: &Game,
    active_bump: Option<BumpFx>,
    move_elapsed: f32,
    wiggle_elapsed: f32,
) {
    let state = game.state();
    for (id, actor) in &state.actors {
        let Some((glyph, color)) = glyph_for(actor.kind, actor.hp > 0) else {
            continue;
        };
        if state.fog.state_at(actor.target_pos) != Visibility::Visible {
            continue;
        }

        let mut fx =
            animation::move_offset(actor.pos.x as f32, actor.target_pos.x as f32, move_elapsed);
        let mut fy =
            animation::move_offset(actor.pos.y as f32, actor.target_pos.y as f32, move_elapsed);
        if let Some(bump) = active_bump
            && bump.actor == id
            && wiggle_elapsed < animation::WIGGLE_DURATION
        {
            let offset = animation::wiggle_offset(wiggle_elapsed);
            fx += bump.dx as f32 * offset;
            fy += bump.dy as f32 * offset;
        }

        let size = TILE * actor.footprint as f32;
        let (sx, sy) = screen_pos(fx, fy);
        draw_text(glyph, sx + size * 0.2, sy + size * 0.8, size, color);
    }
}

fn glyph_for(kind: ActorKind, alive: bool) -> Option<(&'static str, Color)> {
    match kind {
        // Hazards have no hearts; they render by phase instead.
        ActorKind::Hazard(HazardPhase::Off) => None,
        ActorKind::Hazard(HazardPhase::Priming) => Some(("^", DARKGRAY)),
        ActorKind::Hazard(HazardPhase::Active) => Some(("^", RED)),
        _ if !alive => None,
        ActorKind::Player => Some(("@", YELLOW)),
        ActorKind::Door => Some(("+", ORANGE)),
        ActorKind::Enemy(_) => Some(("e", RED)),
        ActorKind::Boss(_) => Some(("B", PURPLE)),
        ActorKind::Item(_) => Some(("i", GREEN)),
    }
}

fn draw_hud(game: &Game) {
    let state = game.state();
    let player = &state.actors[state.player_id];
    let hearts: String = (0..player.max_hp)
        .map(|i| if i < player.hp { 'o' } else { '.' })
        .collect();
    let line = format!(
        "hp [{hearts}]  dmg {}  turn {}  {}",
        player.damage_value,
        game.turn(),
        app::format_snapshot_hash(game.snapshot_hash()),
    );
    draw_text(&line, MARGIN, screen_height() - HUD_HEIGHT * 0.4, 20.0, WHITE);
}

fn draw_question_overlay(question: &Question) {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), OVERLAY_SHADE);
    let cx = screen_width() * 0.5;
    let mut y = screen_height() * 0.35;

    draw_centered(&question.prompt, cx, y, 36.0, WHITE);
    y += 50.0;
    for (i, option) in question.options.iter().enumerate() {
        draw_centered(&format!("{}) {option}", i + 1), cx, y, 28.0, SKYBLUE);
        y += 34.0;
    }
    y += 10.0;
    draw_centered("press 1-4 to answer, esc to back away", cx, y, 18.0, GRAY);
}

fn draw_game_over_overlay() {
    draw_rectangle(0.0, 0.0, screen_width(), screen_height(), OVERLAY_SHADE);
    draw_centered("GAME OVER", screen_width() * 0.5, screen_height() * 0.5, 48.0, RED);
}

fn draw_centered(text: &str, cx: f32, y: f32, font_size: f32, color: Color) {
    let measured = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, cx - measured.width * 0.5, y, font_size, color);
}

fn screen_pos(tile_x: f32, tile_y: f32) -> (f32, f32) {
    (MARGIN + tile_x * TILE, MARGIN + tile_y * TILE)
}
