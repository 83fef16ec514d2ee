//! Display strings shared by every dashboard surface.
//!
//! The countdown keeps the legacy rendering: hours include whole days and a
//! `(N days)` suffix follows, unpluralized, whenever at least one day remains.

use time::{
    formatting::Formattable, macros::format_description, Duration, PrimitiveDateTime, UtcOffset,
};

use crate::models::{ExamState, Subject};
use crate::services::availability::{effective_window, ExamWindow};

pub const NOT_SCHEDULED_LABEL: &str = "Not scheduled yet";
pub const INACTIVE_LABEL: &str = "Inactive";
pub const EXPIRED_LABEL: &str = "Expired";
/// Open-ended windows have no close to count down to.
pub const AVAILABLE_LABEL: &str = "Available";

const SECONDS_PER_DAY: i64 = 86_400;

/// Renders `HH:MM:SS`, or `HH:MM:SS (D days)` once a full day remains.
///
/// Sub-second precision is truncated and negative durations render as zero.
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.whole_seconds().max(0);
    let days = total / SECONDS_PER_DAY;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    if days > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02} ({days} days)")
    } else {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    }
}

pub fn format_remaining(state: ExamState, remaining: Option<Duration>) -> String {
    match state {
        ExamState::NotScheduled => NOT_SCHEDULED_LABEL.to_string(),
        ExamState::Inactive => INACTIVE_LABEL.to_string(),
        ExamState::Expired => EXPIRED_LABEL.to_string(),
        ExamState::Upcoming => {
            format!("Starts in {}", format_countdown(remaining.unwrap_or(Duration::ZERO)))
        }
        ExamState::Available => match remaining {
            Some(remaining) => format!("Ends in {}", format_countdown(remaining)),
            None => AVAILABLE_LABEL.to_string(),
        },
    }
}

/// Window label with boundaries rendered in UTC.
pub fn format_window(subject: &Subject) -> String {
    format_window_at(subject, UtcOffset::UTC)
}

/// Window label with normalized boundaries rendered at `offset`.
///
/// `Jun 1, 8:00 AM - 10:00 AM` for an explicit window, `Jun 1, 8:00 AM` for an
/// exam date alone.
pub fn format_window_at(subject: &Subject, offset: UtcOffset) -> String {
    if !subject.is_scheduled {
        return NOT_SCHEDULED_LABEL.to_string();
    }

    match effective_window(subject) {
        Some(ExamWindow::Bounded { start, end }) => {
            format!("{} - {}", date_time_label(start, offset), time_label(end, offset))
        }
        Some(ExamWindow::Open { from }) => date_time_label(from, offset),
        None => NOT_SCHEDULED_LABEL.to_string(),
    }
}

fn date_time_label(value: PrimitiveDateTime, offset: UtcOffset) -> String {
    render(
        value,
        offset,
        format_description!(
            "[month repr:short] [day padding:none], [hour repr:12 padding:none]:[minute] [period]"
        ),
    )
}

fn time_label(value: PrimitiveDateTime, offset: UtcOffset) -> String {
    render(value, offset, format_description!("[hour repr:12 padding:none]:[minute] [period]"))
}

fn render(
    value: PrimitiveDateTime,
    offset: UtcOffset,
    format: &(impl Formattable + ?Sized),
) -> String {
    // Near the ends of the supported range the shift can leave it; stay in UTC.
    let utc = value.assume_utc();
    let local = utc.checked_to_offset(offset).unwrap_or(utc);
    local.format(format).unwrap_or_else(|_| local.to_string())
}
