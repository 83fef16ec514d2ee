use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;
use time::{Date, Month, PrimitiveDateTime, UtcOffset};

use crate::models::{Subject, SubjectId};
use crate::services::availability::effective_window;
use crate::services::presentation::format_window_at;

pub const MIN_CALENDAR_YEAR: i32 = 1970;
pub const MAX_CALENDAR_YEAR: i32 = 9999;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
    #[error("invalid month: {0}")]
    InvalidMonth(u8),
    #[error("invalid year: {0}")]
    InvalidYear(i32),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEntry {
    pub subject_id: SubjectId,
    pub name: String,
    pub code: String,
    pub window: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub day: u8,
    pub exams: Vec<CalendarEntry>,
}

/// One month of the exam calendar. Only days with at least one exam are
/// listed in `days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u8,
    pub days_in_month: u8,
    /// Weekday of the 1st, Sunday = 0.
    pub leading_blank_days: u8,
    pub days: Vec<CalendarDay>,
}

/// Places each scheduled subject on the day its normalized window opens,
/// as seen from `offset`.
pub fn calendar_month(
    subjects: &[Subject],
    year: i32,
    month: u8,
    offset: UtcOffset,
) -> Result<CalendarMonth, CalendarError> {
    if !(MIN_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&year) {
        return Err(CalendarError::InvalidYear(year));
    }
    let calendar_month = Month::try_from(month).map_err(|_| CalendarError::InvalidMonth(month))?;
    let first = Date::from_calendar_date(year, calendar_month, 1)
        .map_err(|_| CalendarError::InvalidYear(year))?;

    let mut placed: Vec<(PrimitiveDateTime, u8, &Subject)> = subjects
        .iter()
        .filter(|subject| subject.is_scheduled)
        .filter_map(|subject| {
            let start = effective_window(subject)?.start();
            let local = start.assume_utc().checked_to_offset(offset)?;
            (local.year() == year && local.month() == calendar_month)
                .then_some((start, local.day(), subject))
        })
        .collect();
    placed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.2.name.cmp(&b.2.name)));

    let mut by_day: BTreeMap<u8, Vec<CalendarEntry>> = BTreeMap::new();
    for (_, day, subject) in placed {
        by_day.entry(day).or_default().push(CalendarEntry {
            subject_id: subject.id.clone(),
            name: subject.name.clone(),
            code: subject.code.clone(),
            window: format_window_at(subject, offset),
        });
    }

    Ok(CalendarMonth {
        year,
        month,
        days_in_month: calendar_month.length(year),
        leading_blank_days: first.weekday().number_days_from_sunday(),
        days: by_day.into_iter().map(|(day, exams)| CalendarDay { day, exams }).collect(),
    })
}
