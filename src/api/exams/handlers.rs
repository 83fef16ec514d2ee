use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use time::PrimitiveDateTime;
use validator::Validate;

use crate::api::errors::ApiError;
use crate::core::metrics;
use crate::core::state::AppState;
use crate::core::time::{format_primitive, primitive_now_utc};
use crate::schemas::exam::{
    ExamBoardRequest, ExamBoardResponse, ExamCalendarRequest, ExamStatusRequest,
    ExamStatusResponse,
};
use crate::services::{build_board, calendar_month, evaluate, next_exam, CalendarMonth};

/// The only place the wall clock is read on behalf of the engine.
fn resolve_now(requested: Option<PrimitiveDateTime>) -> PrimitiveDateTime {
    requested.unwrap_or_else(primitive_now_utc)
}

pub(super) async fn exam_status(
    State(state): State<AppState>,
    payload: Result<Json<ExamStatusRequest>, JsonRejection>,
) -> Result<Json<ExamStatusResponse>, ApiError> {
    let Json(payload) = payload?;
    let now = resolve_now(payload.now);

    let status = evaluate(&payload.subject, now, state.display_offset());
    metrics::record_classification(status.state);

    Ok(Json(ExamStatusResponse {
        status,
        evaluated_at: format_primitive(now),
        poll_interval_seconds: state.settings().exam().poll_interval_seconds,
    }))
}

pub(super) async fn exam_board(
    State(state): State<AppState>,
    payload: Result<Json<ExamBoardRequest>, JsonRejection>,
) -> Result<Json<ExamBoardResponse>, ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;
    let now = resolve_now(payload.now);
    let offset = state.display_offset();

    let board = build_board(&payload.subjects, now, offset);
    for column in [&board.not_available, &board.in_progress, &board.completed] {
        for status in column {
            metrics::record_classification(status.state);
        }
    }
    let next_exam = next_exam(&payload.subjects, now, offset);

    tracing::info!(
        subjects = payload.subjects.len(),
        in_progress = board.in_progress.len(),
        "Served exam board"
    );

    Ok(Json(ExamBoardResponse {
        board,
        next_exam,
        evaluated_at: format_primitive(now),
        poll_interval_seconds: state.settings().exam().poll_interval_seconds,
    }))
}

pub(super) async fn exam_calendar(
    State(state): State<AppState>,
    payload: Result<Json<ExamCalendarRequest>, JsonRejection>,
) -> Result<Json<CalendarMonth>, ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let month =
        calendar_month(&payload.subjects, payload.year, payload.month, state.display_offset())?;

    Ok(Json(month))
}
