mod handlers;

use axum::{routing::post, Router};

use crate::core::state::AppState;

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/status", post(handlers::exam_status))
        .route("/board", post(handlers::exam_board))
        .route("/calendar", post(handlers::exam_calendar))
}

#[cfg(test)]
mod tests;
