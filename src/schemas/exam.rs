use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use validator::Validate;

use crate::core::time::deserialize_option_datetime_flexible;
use crate::models::Subject;
use crate::services::{ExamBoard, ExamStatus};

#[derive(Debug, Deserialize)]
pub(crate) struct ExamStatusRequest {
    pub(crate) subject: Subject,
    /// Evaluation instant; the server clock is read when absent.
    #[serde(default, deserialize_with = "deserialize_option_datetime_flexible")]
    pub(crate) now: Option<PrimitiveDateTime>,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ExamBoardRequest {
    #[validate(length(max = 1000, message = "at most 1000 subjects per request"))]
    pub(crate) subjects: Vec<Subject>,
    #[serde(default, deserialize_with = "deserialize_option_datetime_flexible")]
    pub(crate) now: Option<PrimitiveDateTime>,
}

#[derive(Debug, Deserialize, Validate)]
pub(crate) struct ExamCalendarRequest {
    #[validate(length(max = 1000, message = "at most 1000 subjects per request"))]
    pub(crate) subjects: Vec<Subject>,
    #[validate(range(min = 1970, max = 9999, message = "year must be between 1970 and 9999"))]
    pub(crate) year: i32,
    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub(crate) month: u8,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExamStatusResponse {
    #[serde(flatten)]
    pub(crate) status: ExamStatus,
    pub(crate) evaluated_at: String,
    pub(crate) poll_interval_seconds: u64,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExamBoardResponse {
    #[serde(flatten)]
    pub(crate) board: ExamBoard,
    pub(crate) next_exam: Option<ExamStatus>,
    pub(crate) evaluated_at: String,
    pub(crate) poll_interval_seconds: u64,
}
