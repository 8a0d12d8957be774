//! Create and move operations, driven through a [`GameStore`].

use rand::Rng;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    board::Pos,
    error::{GameError, Result},
    game::{Game, GameStatus},
    mines::MineLayout,
    store::{GameRecord, GameStore},
};

/// Creates a game with a fresh random mine layout and stores it.
#[instrument(level = "trace", skip(store, rng))]
pub fn create_game<R: Rng + ?Sized>(
    store: &dyn GameStore,
    rng: &mut R,
    width: usize,
    height: usize,
    mine_count: usize,
) -> Result<Game> {
    let mines = MineLayout::generate(width, height, mine_count, rng)?;
    let game = Game::new(Uuid::new_v4().to_string(), width, height, mine_count);

    store.create(&GameRecord {
        game: game.clone(),
        mines,
    })?;

    info!(
        "Created game {}: {}x{} with {} mines",
        game.id, width, height, mine_count
    );
    Ok(game)
}

/// Loads a game, applies one reveal and persists the result. Nothing is
/// written when the move is rejected.
#[instrument(level = "trace", skip(store))]
pub fn make_turn(store: &dyn GameStore, game_id: &str, col: usize, row: usize) -> Result<Game> {
    let GameRecord { mut game, mines } = store
        .load(game_id)?
        .ok_or_else(|| GameError::NotFound(game_id.to_string()))?;

    let status = match game.apply_move(&mines, Pos { col, row }) {
        Ok(status) => status,
        Err(e) => {
            warn!("Rejected move ({}, {}) in game {}: {}", col, row, game_id, e);
            return Err(e);
        }
    };

    store.save(&game)?;

    match status {
        GameStatus::Lost => info!("Game {} lost at ({}, {})", game_id, col, row),
        GameStatus::Won => info!("Game {} won", game_id),
        GameStatus::Active => {}
    }

    Ok(game)
}
