use time::{Duration, PrimitiveDateTime};

/// Stored exam timestamps carry a second, erroneous SAST (UTC+2) shift applied
/// upstream. Removing it yields the real instant.
pub const STORAGE_SHIFT: Duration = Duration::hours(2);

/// Converts a stored timestamp into the instant it is compared at.
///
/// Applies to `starting_time`, `due_time` and `exam_date` only. The caller's
/// "now" is never normalized.
pub fn normalize(stored: PrimitiveDateTime) -> PrimitiveDateTime {
    stored.saturating_sub(STORAGE_SHIFT)
}
