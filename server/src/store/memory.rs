use std::time::{Duration, Instant};

use dashmap::{DashMap, Entry};
use tracing::{debug, info, instrument};

use super::{GameRecord, GameStore, StoreError};
use crate::game::Game;

struct StoredGame {
    record: GameRecord,
    last_activity: Instant,
}

impl StoredGame {
    fn should_cleanup(&self, completed_timeout: Duration, active_timeout: Duration) -> bool {
        let timeout = if self.record.game.completed {
            completed_timeout
        } else {
            active_timeout
        };

        self.last_activity.elapsed() > timeout
    }
}

/// Process-local store. Games live until the cleanup task purges them.
#[derive(Default)]
pub struct MemoryStore {
    games: DashMap<String, StoredGame>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.games.contains_key(game_id)
    }

    /// Drops completed games idle for longer than `completed_timeout` and
    /// unfinished ones idle for longer than `active_timeout`. Returns the ids
    /// that were removed.
    #[instrument(level = "trace", skip(self))]
    pub fn purge_inactive(
        &self,
        completed_timeout: Duration,
        active_timeout: Duration,
    ) -> Vec<String> {
        let mut removed = Vec::new();
        self.games.retain(|game_id, stored| {
            if stored.should_cleanup(completed_timeout, active_timeout) {
                debug!("Cleaned up game: {}", game_id);
                removed.push(game_id.clone());
                false
            } else {
                true
            }
        });

        if !removed.is_empty() {
            info!("Cleaned up {} inactive games", removed.len());
        }
        removed
    }
}

impl GameStore for MemoryStore {
    fn create(&self, record: &GameRecord) -> Result<(), StoreError> {
        match self.games.entry(record.game.id.clone()) {
            Entry::Occupied(entry) => Err(StoreError::Duplicate(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(StoredGame {
                    record: record.clone(),
                    last_activity: Instant::now(),
                });
                Ok(())
            }
        }
    }

    fn load(&self, game_id: &str) -> Result<Option<GameRecord>, StoreError> {
        Ok(self.games.get(game_id).map(|stored| stored.record.clone()))
    }

    fn save(&self, game: &Game) -> Result<(), StoreError> {
        let mut stored = self
            .games
            .get_mut(&game.id)
            .ok_or_else(|| StoreError::Missing(game.id.clone()))?;

        stored.record.game = game.clone();
        stored.last_activity = Instant::now();
        Ok(())
    }
}
