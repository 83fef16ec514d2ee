//! Exam availability engine.
//!
//! Stored timestamps are normalized, classified against a caller-supplied
//! instant, and rendered into display strings. Nothing here reads the clock.

pub mod availability;
pub mod board;
pub mod calendar;
pub mod exam_status;
pub mod presentation;
pub mod time_normalizer;

pub use availability::{classify, effective_window, Classification, ExamWindow};
pub use board::{build_board, next_exam, ExamBoard};
pub use calendar::{calendar_month, CalendarDay, CalendarEntry, CalendarError, CalendarMonth};
pub use exam_status::{evaluate, ExamStatus};
pub use presentation::{format_countdown, format_remaining, format_window, format_window_at};
pub use time_normalizer::{normalize, STORAGE_SHIFT};
