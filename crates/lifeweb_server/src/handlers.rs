//! HTTP handlers.

use crate::SharedState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use lifeweb_core::{Grid, LifeError};

/// Engine failure surfaced as a 500.
#[derive(Debug)]
pub struct ApiError(LifeError);

impl From<LifeError> for ApiError {
    fn from(err: LifeError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Failed to compute next generation");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

/// GET /nextstate: advance one generation and return its cells as rows of booleans.
pub async fn next_state(State(state): State<SharedState>) -> Result<Json<Grid>, ApiError> {
    let grid = {
        let mut session = state.lock_session();
        session.advance_generation()?.clone()
    };
    Ok(Json(grid))
}
