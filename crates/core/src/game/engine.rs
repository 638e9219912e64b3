//! The turn engine. `Game` owns the loaded world and runs the strict
//! per-turn sequence: player move attempt, hazard cycling, hazard trigger
//! check, then (only if the player changed tile) visibility recompute and
//! enemy/boss reactions.

use slotmap::SlotMap;

use crate::content::{
    self, BASIC_ARITHMETIC_MAX, BOSS_ENCOUNTER_ROUNDS, PLAYER_BASE_DAMAGE, PLAYER_MAX_HP,
    VIEW_RADIUS,
};
use crate::game::movement;
use crate::game::visibility::VisibilityField;
use crate::level::LevelData;
use crate::state::{Actor, GameState};
use crate::types::{
    ActorId, ActorKind, Facing, GameError, HazardPhase, LevelError, Pos, ProblemSpec, TurnOutcome,
    WorldEvent,
};

mod encounters;
mod reactions;
mod turn;


/// A suspended question exchange. Gameplay input is ignored while one is
/// open; the UI resolves it through `resolve_correct` / `resolve_wrong`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Encounter {
    target: ActorId,
    rounds_left: u32,
}

pub struct Game {
    level_index: u8,
    turn: u64,
    state: GameState,
    log: Vec<WorldEvent>,
    pending: Option<Encounter>,
}

impl Game {
    /// Build a world from validated level input. The initial visibility pass
    /// runs here so the player does not start in the dark.
    pub fn new(level: &LevelData, level_index: u8) -> Result<Self, LevelError> {
        level.validate()?;

        let terrain = level.terrain();
        let mut actors: SlotMap<ActorId, Actor> = SlotMap::with_key();
        let mut spawn = |kind: ActorKind, pos: Pos, hp: i32, footprint: i32| {
            let id = actors.insert(Actor {
                id: ActorId::default(),
                kind,
                pos,
                target_pos: pos,
                footprint,
                hp,
                max_hp: hp,
                damage_value: PLAYER_BASE_DAMAGE,
                facing: Facing::default(),
                prime_counter: 0,
            });
            actors[id].id = id;
            id
        };

        let player_id = spawn(ActorKind::Player, level.player, PLAYER_MAX_HP, 1);
        let doors: Vec<ActorId> =
            level.doors.iter().map(|d| spawn(ActorKind::Door, d.pos, d.strength, 1)).collect();
        let enemies: Vec<ActorId> = level
            .enemies
            .iter()
            .map(|e| spawn(ActorKind::Enemy(e.kind), e.pos, content::enemy_stats(e.kind).max_hp, 1))
            .collect();
        let items: Vec<ActorId> =
            level.items.iter().map(|i| spawn(ActorKind::Item(i.kind), i.pos, 1, 1)).collect();
        // Hazards carry no hearts; they cycle and sting but never block.
        let hazards: Vec<ActorId> = level
            .hazards
            .iter()
            .map(|&pos| spawn(ActorKind::Hazard(HazardPhase::Off), pos, 0, 1))
            .collect();
        let boss = level.boss.as_ref().map(|b| {
            let stats = content::boss_stats(b.kind);
            spawn(ActorKind::Boss(b.kind), b.pos, stats.max_hp, stats.size)
        });

        let mut state = GameState {
            fog: VisibilityField::new(terrain.width(), terrain.height()),
            terrain,
            actors,
            player_id,
            doors,
            enemies,
            items,
            hazards,
            boss,
        };
        let door_tiles: Vec<Pos> =
            state.closed_doors().iter().map(|&id| state.actors[id].pos).collect();
        state.fog.recompute(level.player, &state.terrain, &door_tiles, VIEW_RADIUS);

        Ok(Self { level_index, turn: 0, state, log: Vec::new(), pending: None })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn log(&self) -> &[WorldEvent] {
        &self.log
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    /// Target of the open encounter, if gameplay is suspended.
    pub fn pending_target(&self) -> Option<ActorId> {
        self.pending.map(|enc| enc.target)
    }

    /// Called by the presentation layer when an actor's move interpolation
    /// finishes. Purely cosmetic bookkeeping; the engine re-settles on its
    /// own before every decision.
    pub fn settle(&mut self, id: ActorId) {
        if let Some(actor) = self.state.actors.get_mut(id) {
            actor.settle();
        }
    }

    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.turn);
        hasher.write_u8(self.level_index);
        for (_, actor) in &self.state.actors {
            hasher.write_i32(actor.target_pos.x);
            hasher.write_i32(actor.target_pos.y);
            hasher.write_i32(actor.hp);
            hasher.write_i32(actor.damage_value);
        }
        hasher.finish()
    }

    fn player(&self) -> &Actor {
        &self.state.actors[self.state.player_id]
    }

    fn problem_for(&self, target: ActorId) -> ProblemSpec {
        match self.state.actors[target].kind {
            ActorKind::Enemy(_) => {
                ProblemSpec::Leveled { level: self.level_index, boss: false }
            }
            ActorKind::Boss(_) => ProblemSpec::Leveled { level: self.level_index, boss: true },
            // Doors and hazards ask plain arithmetic regardless of depth.
            _ => ProblemSpec::BasicArithmetic { max: BASIC_ARITHMETIC_MAX },
        }
    }

    fn rounds_for(&self, target: ActorId) -> u32 {
        if self.state.actors[target].kind.is_boss() { BOSS_ENCOUNTER_ROUNDS } else { 1 }
    }
}
