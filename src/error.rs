use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ArticleServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("WalkDir error: {0}")]
    WalkDir(#[from] walkdir::Error),
    #[error("no HTML file found in static directory: {}", .0.display())]
    NoHtmlFound(PathBuf),
    #[error("{0} parameter is missing")]
    MissingParameter(&'static str),
    #[error("Search task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ArticleServerError>;

impl IntoResponse for ArticleServerError {
    fn into_response(self) -> Response {
        match self {
            ArticleServerError::MissingParameter(_) => {
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            other => {
                error!(error = %other, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()).into_response()
            }
        }
    }
}
