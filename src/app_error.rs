use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use thiserror::Error;

use crate::domain::MulticallError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Too many calls in one batch: {0}, limit is {1}")]
    TooManyCalls(usize, usize),

    #[error(transparent)]
    Multicall(#[from] MulticallError),
}

#[derive(Serialize)]
pub struct ErrorBody {
    code: u16,
    message: String,
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::TooManyCalls(_, _) => StatusCode::BAD_REQUEST,
            AppError::Multicall(err) => match err {
                MulticallError::Encoding(_) => StatusCode::BAD_REQUEST,
                MulticallError::Connection(_)
                | MulticallError::Simulation(_)
                | MulticallError::Decoding(_) => StatusCode::BAD_GATEWAY,
                MulticallError::UnsupportedChain(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (
            status,
            Json(ErrorBody {
                code: status.as_u16(),
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}
