pub mod board;
pub mod cleanup;
pub mod config;
pub mod cors;
pub mod error;
pub mod game;
pub mod mines;
pub mod rate_limit;
pub mod reveal;
pub mod routes;
pub mod service;
pub mod store;

use rocket::{Build, Rocket, catchers, routes};

use crate::{
    rate_limit::RateLimiter,
    routes::{MoveLocks, default_catcher, make_turn, new_game},
    store::SharedStore,
};

/// Assembles the HTTP application around a store. CORS and the cleanup task
/// are attached by the binary.
pub fn build_rocket(store: SharedStore, rate_limiter: RateLimiter) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .manage(rate_limiter)
        .manage(MoveLocks::default())
        .mount("/", routes![new_game, make_turn])
        .register("/", catchers![default_catcher])
}
