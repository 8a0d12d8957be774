use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid server url: {0}")]
    Url(#[from] url::ParseError),
    #[error("server responded {status}: {message}")]
    Api { status: u16, message: String },
    #[error("no game in progress, call start_game() first")]
    NoGame,
}
