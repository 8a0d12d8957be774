use std::sync::Arc;

use tokio::time;
use tracing::{debug, info};

use crate::{config::CleanupConfig, routes::MoveLocks, store::MemoryStore};

pub async fn start_cleanup_task(store: Arc<MemoryStore>, locks: MoveLocks, config: CleanupConfig) {
    let mut interval = time::interval(config.interval);

    info!(
        "Started game cleanup task: checking every {}s, completed timeout: {}s, active timeout: {}s",
        config.interval.as_secs(),
        config.completed_timeout.as_secs(),
        config.active_timeout.as_secs()
    );

    loop {
        interval.tick().await;
        cleanup_games(&store, &locks, &config);
    }
}

fn cleanup_games(store: &MemoryStore, locks: &MoveLocks, config: &CleanupConfig) {
    let removed = store.purge_inactive(config.completed_timeout, config.active_timeout);

    // Skip locks that are held; the next pass picks them up.
    locks.retain(|game_id, lock| {
        let stale = !store.contains(game_id) && Arc::strong_count(lock) == 1;
        if stale {
            debug!("Dropped move lock for game: {}", game_id);
        }
        !stale
    });

    if !removed.is_empty() {
        debug!("{} games remain after cleanup", store.len());
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::Mutex;

    use super::*;
    use crate::{
        board::Pos,
        game::Game,
        mines::MineLayout,
        store::{GameRecord, GameStore},
    };

    #[test]
    fn removes_expired_games_and_their_locks() {
        let store = Arc::new(MemoryStore::new());
        let locks = MoveLocks::default();
        store
            .create(&GameRecord {
                game: Game::new("old".to_string(), 2, 2, 1),
                mines: MineLayout::from_positions([Pos::new(0, 0)]),
            })
            .unwrap();
        locks.insert("old".to_string(), Arc::new(Mutex::new(())));
        locks.insert("gone".to_string(), Arc::new(Mutex::new(())));

        let config = CleanupConfig {
            interval: Duration::from_secs(1),
            completed_timeout: Duration::ZERO,
            active_timeout: Duration::from_secs(3600),
        };

        cleanup_games(&store, &locks, &config);
        assert!(store.contains("old"));
        assert!(locks.contains_key("old"));
        assert!(!locks.contains_key("gone"));

        let config = CleanupConfig {
            active_timeout: Duration::ZERO,
            ..config
        };
        std::thread::sleep(Duration::from_millis(5));
        cleanup_games(&store, &locks, &config);
        assert!(store.is_empty());
        assert!(locks.is_empty());
    }
}
