//! Shared fixtures for the `game` test suites: a minimal world with
//! re-blockable terrain and direct spawn helpers, so tests do not need a
//! full level file for every scenario.

use slotmap::SlotMap;

use crate::state::Actor;
use crate::terrain::TerrainGrid;
use crate::types::{ActorId, ActorKind, Facing, Pos};

pub(crate) struct TestWorld {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    pub terrain: TerrainGrid,
    pub actors: SlotMap<ActorId, Actor>,
}

impl TestWorld {
    pub(crate) fn block(&mut self, pos: Pos) {
        self.blocked[(pos.y as usize) * self.width + (pos.x as usize)] = true;
        self.terrain = TerrainGrid::new(self.width, self.height, self.blocked.clone());
    }

    pub(crate) fn spawn(&mut self, kind: ActorKind, pos: Pos, hp: i32) -> ActorId {
        self.spawn_sized(kind, pos, hp, 1)
    }

    pub(crate) fn spawn_sized(
        &mut self,
        kind: ActorKind,
        pos: Pos,
        hp: i32,
        footprint: i32,
    ) -> ActorId {
        let id = self.actors.insert(Actor {
            id: ActorId::default(),
            kind,
            pos,
            target_pos: pos,
            footprint,
            hp,
            max_hp: hp,
            damage_value: 1,
            facing: Facing::default(),
            prime_counter: 0,
        });
        self.actors[id].id = id;
        id
    }
}

/// Open floor with no walls at all; tests add walls as needed.
pub(crate) fn bare_world(width: usize, height: usize) -> TestWorld {
    let blocked = vec![false; width * height];
    TestWorld {
        width,
        height,
        blocked: blocked.clone(),
        terrain: TerrainGrid::new(width, height, blocked),
        actors: SlotMap::with_key(),
    }
}
