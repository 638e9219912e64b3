//! The built-in level, drawn as an ascii map and parsed at startup. Tools
//! load levels from json files instead; this keeps the game playable with
//! nothing on disk.

use game_core::level::{BossSpawn, DoorSpawn, EnemySpawn, ItemSpawn};
use game_core::{BossKind, EnemyKind, ItemKind, LevelData, Pos};

/// Three rooms: a starting cell with a potion, a trapped corridor patrolled
/// by enemies, and a boss chamber behind the second door.
const DEMO_MAP: &str = "\
##############################
#........#.........#.........#
#..@.....+....r....#.........#
#........#..^......+...BB....#
#...p....#.....d...#...BB....#
#........#..^..s...#.........#
#........#.........#.........#
##############################";

const DEMO_DOOR_STRENGTH: i32 = 2;

pub fn demo() -> Result<LevelData, String> {
    parse_map(DEMO_MAP)
}

/// Build a level from an ascii sketch. `#` wall, `.` floor, `@` player,
/// `+` door, `r`/`s`/`c` enemies, `p`/`d` items, `^` hazard, `B` boss
/// footprint (any cell of it; the top-left becomes the root).
pub fn parse_map(text: &str) -> Result<LevelData, String> {
    let rows: Vec<&str> = text.lines().collect();
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.chars().count());
    if width == 0 || height == 0 {
        return Err("map is empty".to_string());
    }

    let mut blocked = vec![false; width * height];
    let mut player = None;
    let mut doors = Vec::new();
    let mut enemies = Vec::new();
    let mut items = Vec::new();
    let mut hazards = Vec::new();
    let mut boss_root: Option<Pos> = None;

    for (y, row) in rows.iter().enumerate() {
        if row.chars().count() != width {
            return Err(format!("row {y} is not {width} cells wide"));
        }
        for (x, cell) in row.chars().enumerate() {
            let pos = Pos { x: x as i32, y: y as i32 };
            match cell {
                '#' => blocked[y * width + x] = true,
                '.' => {}
                '@' => {
                    if player.replace(pos).is_some() {
                        return Err("more than one player start".to_string());
                    }
                }
                '+' => doors.push(DoorSpawn { pos, strength: DEMO_DOOR_STRENGTH }),
                'r' => enemies.push(EnemySpawn { kind: EnemyKind::Rat, pos }),
                's' => enemies.push(EnemySpawn { kind: EnemyKind::Skeleton, pos }),
                'c' => enemies.push(EnemySpawn { kind: EnemyKind::Cultist, pos }),
                'p' => items.push(ItemSpawn { kind: ItemKind::HealthPotion, pos }),
                'd' => items.push(ItemSpawn { kind: ItemKind::Dagger, pos }),
                '^' => hazards.push(pos),
                'B' => {
                    // First (topmost-leftmost) cell of the block is the root.
                    if boss_root.is_none() {
                        boss_root = Some(pos);
                    }
                }
                other => return Err(format!("unknown map cell '{other}' at {x},{y}")),
            }
        }
    }

    let player = player.ok_or_else(|| "map has no player start".to_string())?;
    let boss = boss_root.map(|pos| BossSpawn { kind: BossKind::StoneGolem, pos });
    Ok(LevelData { width, height, blocked, player, doors, enemies, boss, items, hazards })
}
