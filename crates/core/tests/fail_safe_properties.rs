//! Property suites for the fail-safe query contracts and input rejection.

use game_core::{Game, LevelData, Pos, TerrainGrid, TurnOutcome, VisibilityField};
use proptest::prelude::*;

fn bordered_room(width: usize, height: usize) -> LevelData {
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
        player: Pos { x: 2, y: 2 },
        doors: Vec::new(),
        enemies: Vec::new(),
        boss: None,
        items: Vec::new(),
        hazards: Vec::new(),
    }
}

proptest! {
    #[test]
    fn any_out_of_range_terrain_query_is_blocked(x in any::<i32>(), y in any::<i32>()) {
        let terrain = TerrainGrid::new(16, 12, vec![false; 16 * 12]);
        let pos = Pos { x, y };
        let outside = x < 0 || y < 0 || x >= 16 || y >= 12;
        if outside {
            prop_assert!(terrain.is_blocked(pos));
        } else {
            prop_assert!(!terrain.is_blocked(pos));
        }
    }

    #[test]
    fn any_out_of_range_visibility_query_is_dark(x in any::<i32>(), y in any::<i32>()) {
        let mut fog = VisibilityField::new(16, 12);
        let terrain = TerrainGrid::new(16, 12, vec![false; 16 * 12]);
        fog.recompute(Pos { x: 8, y: 6 }, &terrain, &[], 8);

        if x < 0 || y < 0 || x >= 16 || y >= 12 {
            let pos = Pos { x, y };
            prop_assert!(!fog.is_visible(pos));
        }
    }

    #[test]
    fn every_visible_tile_lies_within_the_view_disc(
        lx in 1i32..15, ly in 1i32..11, radius in 1i32..7,
    ) {
        let mut fog = VisibilityField::new(16, 12);
        let terrain = TerrainGrid::new(16, 12, vec![false; 16 * 12]);
        let light = Pos { x: lx, y: ly };
        fog.recompute(light, &terrain, &[], radius);

        for y in 0..12 {
            for x in 0..16 {
                if fog.is_visible(Pos { x, y }) {
                    let dx = x - lx;
                    let dy = y - ly;
                    prop_assert!(dx * dx + dy * dy <= radius * radius);
                }
            }
        }
    }

    #[test]
    fn zero_delta_never_consumes_a_turn(px in 2i32..10, py in 2i32..8) {
        let mut level = bordered_room(12, 10);
        level.player = Pos { x: px, y: py };
        let mut game = Game::new(&level, 1).expect("level loads");
        let before = game.snapshot_hash();

        prop_assert_eq!(game.process_turn(0, 0), TurnOutcome::Rejected);
        prop_assert_eq!(game.turn(), 0);
        prop_assert_eq!(game.snapshot_hash(), before);
    }
}
