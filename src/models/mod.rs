use std::fmt;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

use crate::core::time::{deserialize_option_datetime_flexible, serialize_option_primitive};

pub mod types;

pub use types::{BoardColumn, ExamState};

/// Identifier of a subject registration. Numeric and string ids both occur.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubjectId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectId::Numeric(id) => write!(f, "{id}"),
            SubjectId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for SubjectId {
    fn from(value: i64) -> Self {
        SubjectId::Numeric(value)
    }
}

impl From<&str> for SubjectId {
    fn from(value: &str) -> Self {
        SubjectId::Text(value.to_string())
    }
}

/// Scheduling snapshot of one subject, as stored.
///
/// Timestamps are UTC and still carry the storage shift; see
/// [`crate::services::time_normalizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(
        default,
        alias = "examDate",
        serialize_with = "serialize_option_primitive",
        deserialize_with = "deserialize_option_datetime_flexible"
    )]
    pub exam_date: Option<PrimitiveDateTime>,
    #[serde(
        default,
        alias = "startingTime",
        serialize_with = "serialize_option_primitive",
        deserialize_with = "deserialize_option_datetime_flexible"
    )]
    pub starting_time: Option<PrimitiveDateTime>,
    #[serde(
        default,
        alias = "dueTime",
        serialize_with = "serialize_option_primitive",
        deserialize_with = "deserialize_option_datetime_flexible"
    )]
    pub due_time: Option<PrimitiveDateTime>,
    #[serde(default, alias = "isScheduled")]
    pub is_scheduled: bool,
    #[serde(default = "default_active", alias = "isActive")]
    pub is_active: bool,
}

impl Subject {
    pub fn new(id: impl Into<SubjectId>, name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code: code.into(),
            exam_date: None,
            starting_time: None,
            due_time: None,
            is_scheduled: false,
            is_active: true,
        }
    }

    pub fn with_window(
        mut self,
        starting_time: PrimitiveDateTime,
        due_time: PrimitiveDateTime,
    ) -> Self {
        self.starting_time = Some(starting_time);
        self.due_time = Some(due_time);
        self.is_scheduled = true;
        self
    }

    pub fn with_exam_date(mut self, exam_date: PrimitiveDateTime) -> Self {
        self.exam_date = Some(exam_date);
        self.is_scheduled = true;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn scheduled(mut self, is_scheduled: bool) -> Self {
        self.is_scheduled = is_scheduled;
        self
    }
}

fn default_active() -> bool {
    true
}
