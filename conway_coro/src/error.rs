// error.rs - Request errors and how they reach the browser

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use conway::ParseCellError;
use thiserror::Error;

use crate::pace::PaceError;

/// Every rejected request ends up here. Both kinds are the caller's fault,
/// so both are a 400 with a plain text body.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Pace(#[from] PaceError),
    #[error(transparent)]
    MalformedCell(#[from] ParseCellError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}
