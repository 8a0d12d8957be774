use minesweeper_common::models::{ErrorResponse, GameInfo, NewGameRequest, TurnRequest};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

use crate::{ClientError, Result};

/// HTTP client for minesweeper server API
pub struct MinesweeperClient {
    client: Client,
    base_url: Url,
}

impl MinesweeperClient {
    /// Create a new client connecting to the specified server URL
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        let client = Client::new();

        Ok(Self { client, base_url })
    }

    /// Create a new game with the specified parameters
    pub async fn new_game(&self, request: &NewGameRequest) -> Result<GameInfo> {
        let url = self.base_url.join("/api/new")?;
        debug!("POST {}", url);

        let response = self.client.post(url).json(request).send().await?;
        parse_game(response).await
    }

    /// Reveal one cell of an existing game
    pub async fn turn(&self, request: &TurnRequest) -> Result<GameInfo> {
        let url = self.base_url.join("/api/turn")?;
        debug!("POST {} ({}, {})", url, request.col, request.row);

        let response = self.client.post(url).json(request).send().await?;
        parse_game(response).await
    }
}

async fn parse_game(response: Response) -> Result<GameInfo> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    // Fall back to the status text when the body is not an ErrorResponse
    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
    };

    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}
