use serde::Serialize;
use time::{PrimitiveDateTime, UtcOffset};

use crate::core::time::format_primitive;
use crate::models::{ExamState, Subject, SubjectId};
use crate::services::availability::{classify, effective_window};
use crate::services::presentation::{format_remaining, format_window_at};

/// Everything a dashboard card needs to render one subject at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExamStatus {
    pub subject_id: SubjectId,
    pub name: String,
    pub code: String,
    pub state: ExamState,
    /// Whether the student may open the exam right now.
    pub writable: bool,
    pub remaining_seconds: Option<i64>,
    pub countdown: String,
    pub window: String,
    /// Normalized window boundaries, RFC 3339 UTC.
    pub starts_at: Option<String>,
    pub ends_at: Option<String>,
}

pub fn evaluate(subject: &Subject, now: PrimitiveDateTime, offset: UtcOffset) -> ExamStatus {
    let classification = classify(subject, now);
    tracing::debug!(
        subject_id = %subject.id,
        state = %classification.state,
        "Classified exam availability"
    );

    let window = if subject.is_scheduled { effective_window(subject) } else { None };

    ExamStatus {
        subject_id: subject.id.clone(),
        name: subject.name.clone(),
        code: subject.code.clone(),
        state: classification.state,
        writable: classification.state.is_writable(),
        remaining_seconds: classification.remaining.map(|d| d.whole_seconds().max(0)),
        countdown: format_remaining(classification.state, classification.remaining),
        window: format_window_at(subject, offset),
        starts_at: window.map(|w| format_primitive(w.start())),
        ends_at: window.and_then(|w| w.end()).map(format_primitive),
    }
}
