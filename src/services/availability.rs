use time::{Duration, PrimitiveDateTime};

use crate::models::{ExamState, Subject};
use crate::services::time_normalizer::normalize;

/// Normalized boundaries a subject's exam is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamWindow {
    /// Explicit `[starting_time, due_time]` window, inclusive at both ends.
    Bounded { start: PrimitiveDateTime, end: PrimitiveDateTime },
    /// Only `exam_date` is known: open from that instant with no close.
    Open { from: PrimitiveDateTime },
}

impl ExamWindow {
    pub fn start(&self) -> PrimitiveDateTime {
        match *self {
            ExamWindow::Bounded { start, .. } => start,
            ExamWindow::Open { from } => from,
        }
    }

    pub fn end(&self) -> Option<PrimitiveDateTime> {
        match *self {
            ExamWindow::Bounded { end, .. } => Some(end),
            ExamWindow::Open { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub state: ExamState,
    /// Time until the window opens (`Upcoming`) or closes (`Available`, `Inactive`).
    pub remaining: Option<Duration>,
}

impl Classification {
    fn new(state: ExamState, remaining: Option<Duration>) -> Self {
        Self { state, remaining }
    }
}

/// Resolves the window a scheduled subject is evaluated against.
///
/// A half-set window (only one of `starting_time`/`due_time`) is ignored in
/// favor of `exam_date`. Scheduling flags are not consulted here.
pub fn effective_window(subject: &Subject) -> Option<ExamWindow> {
    match (subject.starting_time, subject.due_time, subject.exam_date) {
        (Some(start), Some(end), _) => {
            Some(ExamWindow::Bounded { start: normalize(start), end: normalize(end) })
        }
        (_, _, Some(exam_date)) => Some(ExamWindow::Open { from: normalize(exam_date) }),
        _ => None,
    }
}

/// Classifies a subject's exam at `now` (UTC, not normalized).
///
/// Pure and total: malformed windows resolve through the same comparisons and
/// never panic.
pub fn classify(subject: &Subject, now: PrimitiveDateTime) -> Classification {
    if !subject.is_scheduled {
        return Classification::new(ExamState::NotScheduled, None);
    }

    let Some(window) = effective_window(subject) else {
        return Classification::new(ExamState::NotScheduled, None);
    };

    if let Some(end) = window.end() {
        if now > end {
            return Classification::new(ExamState::Expired, None);
        }
    }

    let start = window.start();
    if now < start {
        return Classification::new(ExamState::Upcoming, Some(start - now));
    }

    let remaining = window.end().map(|end| end - now);
    if subject.is_active {
        Classification::new(ExamState::Available, remaining)
    } else {
        Classification::new(ExamState::Inactive, remaining)
    }
}
