//! Minesweeper Client Library
//!
//! Async HTTP client for the minesweeper game server.
//!
//! ## Usage
//!
//! ### High-Level Interface (Recommended)
//!
//! `MinesweeperGame` keeps the latest snapshot of one game and offers helpers
//! to inspect it:
//!
//! ```rust,no_run
//! use minesweeper_client::{MinesweeperGame, NewGameRequest};
//!
//! #[tokio::main]
//! async fn main() -> minesweeper_client::Result<()> {
//!     let mut game = MinesweeperGame::new("http://localhost:8000")?;
//!
//!     game.start_game(NewGameRequest { width: 8, height: 8, mines_count: 10 }).await?;
//!     let view = game.reveal(0, 0).await?;
//!
//!     println!("Game over: {}, Won: {}", view.is_game_over(), view.is_won());
//!     Ok(())
//! }
//! ```
//!
//! ### Low-Level Interface
//!
//! `MinesweeperClient` maps one-to-one onto the server endpoints:
//!
//! ```rust,no_run
//! use minesweeper_client::{MinesweeperClient, NewGameRequest, TurnRequest};
//!
//! #[tokio::main]
//! async fn main() -> minesweeper_client::Result<()> {
//!     let client = MinesweeperClient::new("http://localhost:8000")?;
//!     let game = client.new_game(&NewGameRequest::default()).await?;
//!
//!     let game = client
//!         .turn(&TurnRequest { game_id: game.game_id, col: 0, row: 0 })
//!         .await?;
//!     println!("{:?}", game.field);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod game;

pub use client::MinesweeperClient;
pub use error::ClientError;
pub use game::{GameView, MinesweeperGame};

// Re-export common types for convenience
pub use minesweeper_common::models::*;

pub type Result<T> = std::result::Result<T, ClientError>;
