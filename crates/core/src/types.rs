use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct ActorId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Pos {
        Pos { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Rat,
    Skeleton,
    Cultist,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BossKind {
    StoneGolem,
    PitFiend,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    HealthPotion,
    Dagger,
}

/// Off -> Priming -> Active -> Off, advanced exactly once per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HazardPhase {
    Off,
    Priming,
    Active,
}

impl HazardPhase {
    pub fn next(self) -> HazardPhase {
        match self {
            HazardPhase::Off => HazardPhase::Priming,
            HazardPhase::Priming => HazardPhase::Active,
            HazardPhase::Active => HazardPhase::Off,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActorKind {
    Player,
    Door,
    Enemy(EnemyKind),
    Boss(BossKind),
    Item(ItemKind),
    Hazard(HazardPhase),
}

impl ActorKind {
    pub fn is_boss(&self) -> bool {
        matches!(self, ActorKind::Boss(_))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    #[default]
    East,
    West,
}

/// Per-tile fog-of-war state. `Explored` never regresses to `Unseen`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Visibility {
    #[default]
    Unseen,
    Explored,
    Visible,
}

/// Opaque content token handed to the question UI. The core selects the
/// class; generating and grading the actual question happens outside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProblemSpec {
    BasicArithmetic { max: u32 },
    Leveled { level: u8, boss: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorldEvent {
    Stepped { actor: ActorId, from: Pos, to: Pos },
    /// Rejected move; drives the cosmetic wiggle, never logical state.
    Bumped { actor: ActorId, dx: i32, dy: i32 },
    QuestionTriggered { target: ActorId, problem: ProblemSpec },
    HazardSprung { hazard: ActorId },
    ItemPickedUp { item: ActorId, kind: ItemKind },
    PlayerHealed { hp: i32 },
    DamageRaised { damage: i32 },
    TargetDamaged { target: ActorId, hp: i32 },
    PlayerDamaged { hp: i32 },
    DoorOpened { door: ActorId },
    EnemySlain { enemy: ActorId },
    BossDefeated { boss: ActorId },
    GameOver,
}

/// Result of submitting one direction of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The turn ran to completion; `player_moved` tells whether the world
    /// reacted (enemies, boss, visibility) or only hazards cycled.
    Advanced { player_moved: bool },
    /// An encounter is pending resolution; input was ignored.
    Suspended,
    /// Zero-delta input; no turn was consumed, nothing cycled.
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Encounter resolution arrived with nothing pending. State is untouched;
    /// this indicates a caller bug in the suspend/resume contract.
    NoPendingEncounter,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("terrain flags length {actual} does not match {width}x{height}")]
    SizeMismatch { width: usize, height: usize, actual: usize },
    #[error("{what} spawn at ({x}, {y}) is outside the grid")]
    SpawnOutOfBounds { what: &'static str, x: i32, y: i32 },
    #[error("{what} spawn at ({x}, {y}) sits on a blocked tile")]
    SpawnBlocked { what: &'static str, x: i32, y: i32 },
    #[error("door at ({x}, {y}) must have positive strength")]
    DoorWithoutStrength { x: i32, y: i32 },
}
