use std::sync::Arc;

use dashmap::DashMap;
use minesweeper_common::models::{ErrorResponse, GameInfo, NewGameRequest, TurnRequest};
use rocket::{Request, State, catch, http::Status, post, serde::json::Json};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::{
    error::GameError,
    rate_limit::{ClientIp, CreationPermit},
    service,
    store::SharedStore,
};

/// One lock per game id so moves on the same game run one at a time.
pub type MoveLocks = Arc<DashMap<String, Arc<Mutex<()>>>>;

#[post("/api/new", data = "<request>")]
#[instrument(level = "trace", skip(store, _permit), fields(client_ip = %client_ip.0, width = request.width, height = request.height, mines_count = request.mines_count))]
pub fn new_game(
    request: Json<NewGameRequest>,
    store: &State<SharedStore>,
    client_ip: ClientIp,
    _permit: CreationPermit,
) -> Result<Json<GameInfo>, GameError> {
    info!(
        "Game creation request from {}: {}x{} with {} mines",
        client_ip.0, request.width, request.height, request.mines_count
    );

    let game = service::create_game(
        store.inner().as_ref(),
        &mut rand::rng(),
        request.width,
        request.height,
        request.mines_count,
    )?;

    Ok(Json(game.to_info()))
}

#[post("/api/turn", data = "<request>")]
#[instrument(level = "trace", skip(store, locks), fields(game_id = %request.game_id, col = request.col, row = request.row))]
pub async fn make_turn(
    request: Json<TurnRequest>,
    store: &State<SharedStore>,
    locks: &State<MoveLocks>,
) -> Result<Json<GameInfo>, GameError> {
    debug!(
        "Player revealing cell at ({}, {}) in game {}",
        request.col, request.row, request.game_id
    );

    let lock = locks.entry(request.game_id.clone()).or_default().clone();
    let _guard = lock.lock().await;

    let game = service::make_turn(
        store.inner().as_ref(),
        &request.game_id,
        request.col,
        request.row,
    )?;

    Ok(Json(game.to_info()))
}

/// Renders every unhandled error status as an `ErrorResponse` body.
#[catch(default)]
pub fn default_catcher(status: Status, _: &Request<'_>) -> (Status, Json<ErrorResponse>) {
    let error = status.reason().unwrap_or("unknown error").to_string();
    (status, Json(ErrorResponse { error }))
}
