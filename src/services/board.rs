use std::cmp::Ordering;

use serde::Serialize;
use time::{PrimitiveDateTime, UtcOffset};

use crate::models::{BoardColumn, ExamState, Subject};
use crate::services::availability::effective_window;
use crate::services::exam_status::{evaluate, ExamStatus};

/// Student dashboard columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExamBoard {
    pub not_available: Vec<ExamStatus>,
    pub in_progress: Vec<ExamStatus>,
    pub completed: Vec<ExamStatus>,
}

impl ExamBoard {
    pub fn column(&self, column: BoardColumn) -> &[ExamStatus] {
        match column {
            BoardColumn::NotAvailable => &self.not_available,
            BoardColumn::InProgress => &self.in_progress,
            BoardColumn::Completed => &self.completed,
        }
    }

    pub fn len(&self) -> usize {
        self.not_available.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Buckets subjects by column, each ordered by window start (unscheduled
/// last) and then by name.
pub fn build_board(subjects: &[Subject], now: PrimitiveDateTime, offset: UtcOffset) -> ExamBoard {
    let mut ordered: Vec<&Subject> = subjects.iter().collect();
    ordered.sort_by(|a, b| compare_by_start(a, b));

    let mut board = ExamBoard::default();
    for subject in ordered {
        let status = evaluate(subject, now, offset);
        match status.state.column() {
            BoardColumn::NotAvailable => board.not_available.push(status),
            BoardColumn::InProgress => board.in_progress.push(status),
            BoardColumn::Completed => board.completed.push(status),
        }
    }

    tracing::debug!(
        not_available = board.not_available.len(),
        in_progress = board.in_progress.len(),
        completed = board.completed.len(),
        "Built exam board"
    );

    board
}

/// The exam a student should look at next: the open one closing soonest,
/// otherwise the upcoming one opening soonest.
pub fn next_exam(
    subjects: &[Subject],
    now: PrimitiveDateTime,
    offset: UtcOffset,
) -> Option<ExamStatus> {
    let statuses: Vec<ExamStatus> =
        subjects.iter().map(|subject| evaluate(subject, now, offset)).collect();

    let soonest = |state: ExamState| {
        statuses
            .iter()
            .filter(|status| status.state == state)
            .min_by_key(|status| status.remaining_seconds.unwrap_or(i64::MAX))
            .cloned()
    };

    soonest(ExamState::Available).or_else(|| soonest(ExamState::Upcoming))
}

fn sort_key(subject: &Subject) -> Option<PrimitiveDateTime> {
    if !subject.is_scheduled {
        return None;
    }
    effective_window(subject).map(|window| window.start())
}

fn compare_by_start(a: &Subject, b: &Subject) -> Ordering {
    let by_start = match (sort_key(a), sort_key(b)) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };
    by_start.then_with(|| a.name.cmp(&b.name))
}
