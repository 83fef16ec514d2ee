use std::fmt;

use serde::{Deserialize, Serialize};

/// Availability of a subject's exam at a given instant.
///
/// Variants are listed in precedence order: when more than one condition
/// could apply, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamState {
    NotScheduled,
    Inactive,
    Expired,
    Available,
    Upcoming,
}

impl ExamState {
    pub const ALL: [ExamState; 5] = [
        ExamState::NotScheduled,
        ExamState::Inactive,
        ExamState::Expired,
        ExamState::Available,
        ExamState::Upcoming,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ExamState::NotScheduled => "not_scheduled",
            ExamState::Inactive => "inactive",
            ExamState::Expired => "expired",
            ExamState::Available => "available",
            ExamState::Upcoming => "upcoming",
        }
    }

    /// Students may open the exam only in this state.
    pub fn is_writable(self) -> bool {
        matches!(self, ExamState::Available)
    }

    pub fn column(self) -> BoardColumn {
        match self {
            ExamState::NotScheduled | ExamState::Inactive | ExamState::Upcoming => {
                BoardColumn::NotAvailable
            }
            ExamState::Available => BoardColumn::InProgress,
            ExamState::Expired => BoardColumn::Completed,
        }
    }
}

impl fmt::Display for ExamState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardColumn {
    NotAvailable,
    InProgress,
    Completed,
}
