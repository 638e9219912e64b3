//! Enemy and boss reactions: LOS-gated greedy pursuit of the player.

use super::*;
use crate::game::movement;

impl Game {
    /// All solid actors that can break an enemy's sight line. The line's own
    /// endpoints are exempted inside `line_of_sight`.
    fn sight_blockers(&self) -> Vec<ActorId> {
        let mut blockers: Vec<ActorId> =
            self.state.doors.iter().chain(&self.state.enemies).copied().collect();
        if let Some(boss) = self.state.boss {
            blockers.push(boss);
        }
        blockers
    }

    pub(super) fn react_enemies(&mut self) {
        let blockers = self.sight_blockers();
        let obstacles = self.state.reaction_obstacles();
        for index in 0..self.state.enemies.len() {
            let enemy = self.state.enemies[index];
            if !self.state.actors[enemy].alive() {
                continue;
            }
            if !movement::line_of_sight(
                &self.state.actors,
                &self.state.terrain,
                enemy,
                self.state.player_id,
                &blockers,
            ) {
                continue;
            }
            let speed = match self.state.actors[enemy].kind {
                ActorKind::Enemy(kind) => content::enemy_stats(kind).speed,
                _ => 1,
            };
            let hits = movement::move_towards(
                &mut self.state.actors,
                &self.state.terrain,
                enemy,
                self.state.player_id,
                &obstacles,
                speed,
                &mut self.log,
            );
            self.dispatch_reaction_hits(enemy, &hits);
        }
    }

    pub(super) fn react_boss(&mut self) {
        let Some(boss) = self.state.boss else {
            return;
        };
        if !self.state.actors[boss].alive() {
            return;
        }

        let ActorKind::Boss(kind) = self.state.actors[boss].kind else {
            return;
        };
        let stats = content::boss_stats(kind);

        // Priming gate: charge for `prime_threshold` turns, act on the next.
        let counter = self.state.actors[boss].prime_counter;
        if counter < stats.prime_threshold {
            self.state.actors[boss].prime_counter = counter + 1;
            tracing::debug!(priming = counter + 1, threshold = stats.prime_threshold, "boss charging");
            return;
        }
        self.state.actors[boss].prime_counter = 0;

        let blockers = self.sight_blockers();
        if !movement::line_of_sight(
            &self.state.actors,
            &self.state.terrain,
            boss,
            self.state.player_id,
            &blockers,
        ) {
            return;
        }
        let obstacles = self.state.reaction_obstacles();
        let hits = movement::move_towards(
            &mut self.state.actors,
            &self.state.terrain,
            boss,
            self.state.player_id,
            &obstacles,
            stats.speed,
            &mut self.log,
        );
        self.dispatch_reaction_hits(boss, &hits);
    }

    /// An enemy running into the player opens an encounter aimed at that
    /// enemy. Bumps against doors or other enemies stay silent.
    fn dispatch_reaction_hits(&mut self, mover: ActorId, hits: &[ActorId]) {
        if hits.contains(&self.state.player_id) {
            self.open_encounter(mover);
        }
    }
}
