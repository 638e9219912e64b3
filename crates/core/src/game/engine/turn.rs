//! The per-turn sequence and hazard handling.

use super::*;
use crate::game::movement::MoveResult;

impl Game {
    /// Run one turn from a unit direction. Hazards cycle whether or not the
    /// player's move lands; the rest of the world reacts only when it does.
    pub fn process_turn(&mut self, dx: i32, dy: i32) -> TurnOutcome {
        if self.pending.is_some() {
            return TurnOutcome::Suspended;
        }
        if dx == 0 && dy == 0 {
            return TurnOutcome::Rejected;
        }

        let obstacles = self.state.player_obstacles();
        let result = movement::attempt_move(
            &mut self.state.actors,
            &self.state.terrain,
            self.state.player_id,
            dx,
            dy,
            &obstacles,
            &mut self.log,
        );
        let player_moved = result.moved();
        if let MoveResult::BlockedByActor(obstructor) = result {
            self.handle_player_collision(obstructor);
        }

        self.cycle_hazards();
        self.check_hazard_trigger();

        if player_moved {
            let light = self.player().target_pos;
            let door_tiles: Vec<Pos> =
                self.state.closed_doors().iter().map(|&id| self.state.actors[id].pos).collect();
            self.state.fog.recompute(light, &self.state.terrain, &door_tiles, VIEW_RADIUS);

            self.react_enemies();
            self.react_boss();
        }

        self.turn += 1;
        TurnOutcome::Advanced { player_moved }
    }

    /// Every trap advances Off -> Priming -> Active -> Off exactly once per
    /// turn, keeping hazards on a cadence independent of player progress.
    fn cycle_hazards(&mut self) {
        for &id in &self.state.hazards {
            let actor = &mut self.state.actors[id];
            if let ActorKind::Hazard(phase) = actor.kind {
                actor.kind = ActorKind::Hazard(phase.next());
            }
        }
    }

    /// Fire at most one active trap sharing the player's claimed tile.
    fn check_hazard_trigger(&mut self) {
        let player_tile = self.player().target_pos;
        let sprung = self.state.hazards.iter().copied().find(|&id| {
            matches!(self.state.actors[id].kind, ActorKind::Hazard(HazardPhase::Active))
                && self.state.actors[id].pos == player_tile
        });
        if let Some(hazard) = sprung {
            self.log.push(WorldEvent::HazardSprung { hazard });
            self.open_encounter(hazard);
        }
    }
}
