//! Persistence boundary of the game service.

mod memory;

pub use memory::MemoryStore;

use std::sync::Arc;

use thiserror::Error;

use crate::{game::Game, mines::MineLayout};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("game {0} is already stored")]
    Duplicate(String),
    #[error("game {0} is not stored")]
    Missing(String),
}

/// A game together with its hidden mine layout.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub game: Game,
    pub mines: MineLayout,
}

/// Storage backend for game snapshots. Implementations do not serialize
/// concurrent moves on the same game; callers must.
pub trait GameStore: Send + Sync {
    /// Stores a freshly created game and its mines in one step.
    fn create(&self, record: &GameRecord) -> Result<(), StoreError>;

    fn load(&self, game_id: &str) -> Result<Option<GameRecord>, StoreError>;

    /// Replaces the snapshot of an existing game. The mine layout is kept.
    fn save(&self, game: &Game) -> Result<(), StoreError>;
}

pub type SharedStore = Arc<dyn GameStore>;
