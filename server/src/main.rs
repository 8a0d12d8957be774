use std::sync::Arc;

use minesweeper_server::{
    build_rocket,
    cleanup::start_cleanup_task,
    config::CleanupConfig,
    cors::create_cors,
    rate_limit::RateLimiter,
    routes::MoveLocks,
    store::{MemoryStore, SharedStore},
};
use rocket::{
    Build, Rocket,
    fairing::{Fairing, Info, Kind},
};
use tracing::{info, warn};

struct CleanupFairing {
    store: Arc<MemoryStore>,
    config: CleanupConfig,
}

#[rocket::async_trait]
impl Fairing for CleanupFairing {
    fn info(&self) -> Info {
        Info {
            name: "Cleanup Task",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        if let Some(locks) = rocket.state::<MoveLocks>() {
            info!("Starting cleanup task for stored games");
            let store = self.store.clone();
            let locks = locks.clone();
            let config = self.config;
            tokio::spawn(async move {
                start_cleanup_task(store, locks, config).await;
            });
        } else {
            warn!("Failed to get move locks for cleanup task");
        }
        Ok(rocket)
    }
}

#[rocket::launch]
fn rocket() -> Rocket<Build> {
    tracing_subscriber::fmt::init();
    info!("Starting Minesweeper game server");

    let store = Arc::new(MemoryStore::new());
    let shared: SharedStore = store.clone();
    let rate_limiter = RateLimiter::from_env();

    info!("Initialized in-memory game store and rate limiter");

    let rocket = build_rocket(shared, rate_limiter)
        .attach(create_cors())
        .attach(CleanupFairing {
            store,
            config: CleanupConfig::from_env(),
        });

    info!("Endpoints: POST /api/new, POST /api/turn");

    rocket
}
