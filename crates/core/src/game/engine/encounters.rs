//! Encounter dispatch and resolution. A collision or sprung trap opens a
//! question aimed at some actor; gameplay suspends until the UI answers
//! through `resolve_correct` / `resolve_wrong` (or abandons via
//! `resolve_cancel`). Bosses queue several rounds per encounter.

use super::*;
use crate::content::WRONG_ANSWER_HEAL;
use crate::types::ItemKind;

impl Game {
    /// Player walked into something solid. Items apply on contact; anything
    /// else opens a question.
    pub(super) fn handle_player_collision(&mut self, obstructor: ActorId) {
        match self.state.actors[obstructor].kind {
            ActorKind::Item(kind) => self.pick_up(obstructor, kind),
            ActorKind::Door | ActorKind::Enemy(_) | ActorKind::Boss(_) => {
                self.open_encounter(obstructor);
            }
            // Hazards and the player never appear in the obstacle list.
            ActorKind::Hazard(_) | ActorKind::Player => {}
        }
    }

    /// The pickup is the *blocked* move: the item tile opens up next turn
    /// once the item is spent.
    fn pick_up(&mut self, item: ActorId, kind: ItemKind) {
        let value = content::item_value(kind);
        let player = self.state.player_id;
        match kind {
            ItemKind::HealthPotion => {
                self.state.actors[player].heal(value);
                let hp = self.state.actors[player].hp;
                tracing::debug!(hp, "potion drunk");
                self.log.push(WorldEvent::PlayerHealed { hp });
            }
            ItemKind::Dagger => {
                self.state.actors[player].damage_value += value;
                let damage = self.state.actors[player].damage_value;
                tracing::debug!(damage, "weapon claimed");
                self.log.push(WorldEvent::DamageRaised { damage });
            }
        }
        self.state.actors[item].hp = 0;
        self.log.push(WorldEvent::ItemPickedUp { item, kind });
    }

    /// Open (or replace) the pending encounter. A later trigger within the
    /// same turn supersedes an earlier one, mirroring a question screen that
    /// only ever shows the latest challenge.
    pub(super) fn open_encounter(&mut self, target: ActorId) {
        let problem = self.problem_for(target);
        self.pending = Some(Encounter { target, rounds_left: self.rounds_for(target) });
        self.log.push(WorldEvent::QuestionTriggered { target, problem });
    }

    /// Correct answer: the target takes the player's current damage value.
    pub fn resolve_correct(&mut self) -> Result<(), GameError> {
        let enc = self.pending.ok_or(GameError::NoPendingEncounter)?;
        let dealt = self.player().damage_value;
        let target = &mut self.state.actors[enc.target];
        target.damage(dealt);
        self.log.push(WorldEvent::TargetDamaged { target: enc.target, hp: target.hp });
        self.continue_battle();
        Ok(())
    }

    /// Wrong answer: the target recovers a point and the player bleeds for
    /// it (double against a boss).
    pub fn resolve_wrong(&mut self) -> Result<(), GameError> {
        let enc = self.pending.ok_or(GameError::NoPendingEncounter)?;
        self.state.actors[enc.target].heal(WRONG_ANSWER_HEAL);

        let cost = match self.state.actors[enc.target].kind {
            ActorKind::Boss(kind) => content::boss_stats(kind).wrong_answer_cost,
            _ => 1,
        };
        let player = self.state.player_id;
        self.state.actors[player].damage(cost);
        self.log.push(WorldEvent::PlayerDamaged { hp: self.state.actors[player].hp });
        self.continue_battle();
        Ok(())
    }

    /// Close the encounter with no health changes on either side.
    pub fn resolve_cancel(&mut self) -> Result<(), GameError> {
        if self.pending.take().is_none() {
            return Err(GameError::NoPendingEncounter);
        }
        Ok(())
    }

    /// Shared post-answer flow: dead target or dead player closes the
    /// encounter; otherwise the remaining rounds decide between re-asking
    /// and closing.
    fn continue_battle(&mut self) {
        let Some(mut enc) = self.pending.take() else {
            return;
        };
        enc.rounds_left = enc.rounds_left.saturating_sub(1);

        if !self.state.actors[enc.target].alive() {
            match self.state.actors[enc.target].kind {
                ActorKind::Door => self.log.push(WorldEvent::DoorOpened { door: enc.target }),
                ActorKind::Enemy(_) => self.log.push(WorldEvent::EnemySlain { enemy: enc.target }),
                ActorKind::Boss(_) => self.log.push(WorldEvent::BossDefeated { boss: enc.target }),
                _ => {}
            }
            return;
        }

        if !self.player().alive() {
            self.log.push(WorldEvent::GameOver);
            return;
        }

        if enc.rounds_left > 0 {
            let problem = self.problem_for(enc.target);
            self.log.push(WorldEvent::QuestionTriggered { target: enc.target, problem });
            self.pending = Some(enc);
        }
    }
}
