use minesweeper_common::models::ErrorResponse;
use rocket::{
    Request, Response,
    http::Status,
    response::{self, Responder},
    serde::json::Json,
};
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid game configuration: {0}")]
    InvalidConfiguration(String),
    #[error("game {0} not found")]
    NotFound(String),
    #[error("cell ({col}, {row}) cannot be revealed")]
    InvalidMove { col: usize, row: usize },
    #[error("storage failure: {0}")]
    Storage(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    pub fn status(&self) -> Status {
        match self {
            Self::InvalidConfiguration(_) | Self::InvalidMove { .. } => Status::BadRequest,
            Self::NotFound(_) => Status::NotFound,
            Self::Storage(_) => Status::InternalServerError,
        }
    }
}

impl<'r> Responder<'r, 'static> for GameError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("Request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        Response::build_from(body.respond_to(request)?)
            .status(status)
            .ok()
    }
}
