//! Immutable per-kind stat tables. Variant data lives here so actor structs
//! stay plain positional/health records.

use crate::types::{BossKind, EnemyKind, ItemKind};

pub const PLAYER_MAX_HP: i32 = 5;
pub const PLAYER_BASE_DAMAGE: i32 = 1;

/// How far the player's light reaches, in tiles.
pub const VIEW_RADIUS: i32 = 8;

/// Questions asked per boss encounter; everything else asks one.
pub const BOSS_ENCOUNTER_ROUNDS: u32 = 3;

/// Hp a target regains when the player answers wrong.
pub const WRONG_ANSWER_HEAL: i32 = 1;

pub const BASIC_ARITHMETIC_MAX: u32 = 10;

pub struct EnemyStats {
    pub max_hp: i32,
    pub speed: u32,
}

pub fn enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Rat => EnemyStats { max_hp: 1, speed: 1 },
        EnemyKind::Skeleton => EnemyStats { max_hp: 2, speed: 1 },
        EnemyKind::Cultist => EnemyStats { max_hp: 3, speed: 1 },
    }
}

pub struct BossStats {
    pub max_hp: i32,
    /// Footprint edge length in tiles; bosses occupy size x size.
    pub size: i32,
    pub speed: u32,
    /// Idle "charging" turns before each acting turn.
    pub prime_threshold: u32,
    /// Player hp lost per wrong answer against this boss.
    pub wrong_answer_cost: i32,
}

pub fn boss_stats(kind: BossKind) -> BossStats {
    match kind {
        BossKind::StoneGolem => {
            BossStats { max_hp: 6, size: 4, speed: 4, prime_threshold: 5, wrong_answer_cost: 2 }
        }
        BossKind::PitFiend => {
            BossStats { max_hp: 8, size: 3, speed: 3, prime_threshold: 4, wrong_answer_cost: 2 }
        }
    }
}

/// Heal amount for potions, damage bonus for weapons.
pub fn item_value(kind: ItemKind) -> i32 {
    match kind {
        ItemKind::HealthPotion => 2,
        ItemKind::Dagger => 1,
    }
}
