use slotmap::SlotMap;

use crate::game::visibility::VisibilityField;
use crate::terrain::TerrainGrid;
use crate::types::{ActorId, ActorKind, Facing, Pos};

/// The unit of simulation. Shared positional/health fields live here; the
/// per-kind constants stay in `content`.
#[derive(Clone, Debug)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    /// Tile currently occupied (post-resolution).
    pub pos: Pos,
    /// Tile being moved toward this turn; equals `pos` when idle.
    pub target_pos: Pos,
    /// Edge length of the square footprint, 1 for everything but bosses.
    pub footprint: i32,
    pub hp: i32,
    pub max_hp: i32,
    /// Damage inflicted on a correct answer; items can raise it.
    pub damage_value: i32,
    pub facing: Facing,
    /// Boss-only charge counter; unused (zero) for other kinds.
    pub prime_counter: u32,
}

impl Actor {
    pub fn alive(&self) -> bool {
        self.hp > 0
    }

    /// True once a started move's interpolation has been consumed and the
    /// grid positions agree again.
    pub fn settled(&self) -> bool {
        self.pos == self.target_pos
    }

    /// Snap the logical position onto the committed target. Called when the
    /// renderer finishes easing, and defensively at the top of every move
    /// decision so collision never reasons from a mid-interpolation state.
    pub fn settle(&mut self) {
        self.pos = self.target_pos;
    }

    pub fn damage(&mut self, amount: i32) {
        self.hp -= amount;
    }

    pub fn heal(&mut self, amount: i32) {
        self.hp += amount;
    }
}

/// Stable per-level containers. Dead actors stay in place (skipped by
/// collision and AI) until the whole state is dropped on level reload.
pub struct GameState {
    pub terrain: TerrainGrid,
    pub fog: VisibilityField,
    pub actors: SlotMap<ActorId, Actor>,
    pub player_id: ActorId,
    pub doors: Vec<ActorId>,
    pub enemies: Vec<ActorId>,
    pub items: Vec<ActorId>,
    pub hazards: Vec<ActorId>,
    pub boss: Option<ActorId>,
}

impl GameState {
    /// Everything the player can bump into: doors, enemies, items, and the
    /// boss while it lives. Hazards are walked over, never collided with.
    pub fn player_obstacles(&self) -> Vec<ActorId> {
        let mut ids: Vec<ActorId> =
            self.doors.iter().chain(&self.enemies).chain(&self.items).copied().collect();
        if let Some(boss) = self.boss
            && self.actors[boss].alive()
        {
            ids.push(boss);
        }
        ids
    }

    /// What enemies and the boss collide with on their own moves: doors,
    /// each other, and the player.
    pub fn reaction_obstacles(&self) -> Vec<ActorId> {
        let mut ids: Vec<ActorId> =
            self.doors.iter().chain(&self.enemies).copied().collect();
        if let Some(boss) = self.boss {
            ids.push(boss);
        }
        ids.push(self.player_id);
        ids
    }

    /// Closed doors are the only dynamic sight blockers.
    pub fn closed_doors(&self) -> Vec<ActorId> {
        self.doors.iter().copied().filter(|&id| self.actors[id].alive()).collect()
    }
}
