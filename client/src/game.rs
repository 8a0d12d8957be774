use minesweeper_common::models::{
    EXPLODED_MINE, GameInfo, HIDDEN, MINE, NewGameRequest, TurnRequest,
};
use tracing::info;

use crate::{ClientError, MinesweeperClient, Result};

/// Read-only helpers over a game snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    info: GameInfo,
}

impl GameView {
    pub fn new(info: GameInfo) -> Self {
        Self { info }
    }

    pub fn info(&self) -> &GameInfo {
        &self.info
    }

    pub fn game_id(&self) -> &str {
        &self.info.game_id
    }

    /// Get the cell at the specified position
    pub fn cell(&self, col: usize, row: usize) -> Option<&str> {
        self.info.field.get(row)?.get(col).map(String::as_str)
    }

    pub fn hidden_count(&self) -> usize {
        self.count(HIDDEN)
    }

    pub fn mine_count_shown(&self) -> usize {
        self.count(MINE) + self.count(EXPLODED_MINE)
    }

    fn count(&self, symbol: &str) -> usize {
        self.info
            .field
            .iter()
            .flatten()
            .filter(|cell| *cell == symbol)
            .count()
    }

    /// Check if the game is in a completed state (won or lost)
    pub fn is_game_over(&self) -> bool {
        self.info.completed
    }

    pub fn is_lost(&self) -> bool {
        self.count(EXPLODED_MINE) > 0
    }

    /// Check if the player has won
    pub fn is_won(&self) -> bool {
        self.info.completed && !self.is_lost()
    }

    /// Positions of every still hidden cell as `(col, row)`.
    pub fn hidden_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.info.field.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| *cell == HIDDEN)
                .map(move |(col, _)| (col, row))
        })
    }
}

/// High-level client that tracks the latest snapshot of one game
pub struct MinesweeperGame {
    client: MinesweeperClient,
    state: Option<GameView>,
}

impl MinesweeperGame {
    pub fn new(server_url: &str) -> Result<Self> {
        Ok(Self {
            client: MinesweeperClient::new(server_url)?,
            state: None,
        })
    }

    /// Start a new game with the specified parameters
    pub async fn start_game(&mut self, request: NewGameRequest) -> Result<&GameView> {
        info!(
            "Starting new game: {}x{} with {} mines",
            request.width, request.height, request.mines_count
        );

        let info = self.client.new_game(&request).await?;
        info!("Created game with ID: {}", info.game_id);

        Ok(self.state.insert(GameView::new(info)))
    }

    /// Reveal a cell of the current game
    pub async fn reveal(&mut self, col: usize, row: usize) -> Result<&GameView> {
        let game_id = self
            .state
            .as_ref()
            .ok_or(ClientError::NoGame)?
            .game_id()
            .to_string();

        let info = self
            .client
            .turn(&TurnRequest { game_id, col, row })
            .await?;

        if info.completed {
            info!("Game {} is over", info.game_id);
        }

        Ok(self.state.insert(GameView::new(info)))
    }

    pub fn state(&self) -> Option<&GameView> {
        self.state.as_ref()
    }
}
