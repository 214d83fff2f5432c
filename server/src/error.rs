use std::io;

use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("io error {0}")]
    Io(#[from] io::Error),
    #[error("serde error {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let msg = self.to_string();
        let status_code = match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Serde(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status_code.is_server_error() {
            warn!(%msg, "Request failed");
        }
        (status_code, msg).into_response()
    }
}
