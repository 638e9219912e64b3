//! Normalized level input: terrain flags plus typed spawn points. This is
//! the boundary with the excluded map loader; the core consumes only this
//! structure and validates it once, at load.

use serde::Deserialize;

use crate::content::boss_stats;
use crate::terrain::TerrainGrid;
use crate::types::{BossKind, EnemyKind, ItemKind, LevelError, Pos};

#[derive(Clone, Debug, Deserialize)]
pub struct DoorSpawn {
    pub pos: Pos,
    /// Questions to answer before the door opens.
    #[serde(default = "default_door_strength")]
    pub strength: i32,
}

fn default_door_strength() -> i32 {
    1
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnemySpawn {
    pub kind: EnemyKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BossSpawn {
    pub kind: BossKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ItemSpawn {
    pub kind: ItemKind,
    pub pos: Pos,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LevelData {
    pub width: usize,
    pub height: usize,
    /// Row-major, `true` = impassable.
    pub blocked: Vec<bool>,
    pub player: Pos,
    #[serde(default)]
    pub doors: Vec<DoorSpawn>,
    #[serde(default)]
    pub enemies: Vec<EnemySpawn>,
    #[serde(default)]
    pub boss: Option<BossSpawn>,
    #[serde(default)]
    pub items: Vec<ItemSpawn>,
    #[serde(default)]
    pub hazards: Vec<Pos>,
}

impl LevelData {
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.blocked.len() != self.width * self.height {
            return Err(LevelError::SizeMismatch {
                width: self.width,
                height: self.height,
                actual: self.blocked.len(),
            });
        }
        let terrain = TerrainGrid::new(self.width, self.height, self.blocked.clone());

        self.check_spawn(&terrain, "player", self.player)?;
        for door in &self.doors {
            self.check_spawn(&terrain, "door", door.pos)?;
            if door.strength <= 0 {
                return Err(LevelError::DoorWithoutStrength { x: door.pos.x, y: door.pos.y });
            }
        }
        for enemy in &self.enemies {
            self.check_spawn(&terrain, "enemy", enemy.pos)?;
        }
        for item in &self.items {
            self.check_spawn(&terrain, "item", item.pos)?;
        }
        for &hazard in &self.hazards {
            self.check_spawn(&terrain, "hazard", hazard)?;
        }
        if let Some(boss) = &self.boss {
            let size = boss_stats(boss.kind).size;
            for oy in 0..size {
                for ox in 0..size {
                    self.check_spawn(&terrain, "boss", boss.pos.offset(ox, oy))?;
                }
            }
        }
        Ok(())
    }

    pub fn terrain(&self) -> TerrainGrid {
        TerrainGrid::new(self.width, self.height, self.blocked.clone())
    }

    fn check_spawn(
        &self,
        terrain: &TerrainGrid,
        what: &'static str,
        pos: Pos,
    ) -> Result<(), LevelError> {
        if !terrain.in_bounds(pos) {
            return Err(LevelError::SpawnOutOfBounds { what, x: pos.x, y: pos.y });
        }
        if terrain.is_blocked(pos) {
            return Err(LevelError::SpawnBlocked { what, x: pos.x, y: pos.y });
        }
        Ok(())
    }
}
