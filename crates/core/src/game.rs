//! Simulation modules: movement/collision, fog-of-war, and the turn engine.

pub(crate) mod movement;
pub mod visibility;

mod engine;

#[cfg(test)]
pub(crate) mod test_support;

pub use engine::Game;
