pub mod content;
pub mod game;
pub mod level;
pub mod state;
pub mod terrain;
pub mod types;

pub use game::Game;
pub use game::visibility::VisibilityField;
pub use level::{BossSpawn, DoorSpawn, EnemySpawn, ItemSpawn, LevelData};
pub use state::{Actor, GameState};
pub use terrain::TerrainGrid;
pub use types::*;
