use crate::limits::*;
use crate::model::{Booking, Span, Table, fmt_time};

use super::EngineError;

/// Bounds check for an advance-booking window: the start must fall inside
/// the synthetic day and the period within the eight-hour cap. The end may
/// run past midnight; there is no next day for it to collide with.
pub(super) fn validate_span(span: &Span) -> Result<(), EngineError> {
    if span.start < 0 || span.start >= DAY_SECS {
        return Err(EngineError::InvalidInput(format!(
            "booking start {} is outside the day",
            span.start
        )));
    }
    let period = span.duration();
    if period <= 0 {
        return Err(EngineError::InvalidInput("booking period must be positive".into()));
    }
    if period > MAX_PERIOD_SECS {
        return Err(EngineError::InvalidInput(format!(
            "maximum booking period is {}",
            fmt_time(MAX_PERIOD_SECS)
        )));
    }
    Ok(())
}

/// True if any booking on the candidate's table overlaps it in time.
/// Customer identity plays no part here.
pub(super) fn conflicts(existing: &[Booking], candidate: &Booking) -> bool {
    existing
        .iter()
        .any(|b| b.table() == candidate.table() && b.overlaps(candidate))
}

/// True if any booking duplicates the candidate's customer per the
/// identity-and-overlap rule.
pub(super) fn duplicate_exists(existing: &[Booking], candidate: &Booking, match_table: bool) -> bool {
    existing.iter().any(|b| b.duplicates(candidate, match_table))
}

/// Drop every booking whose table is gone. Returns how many went.
pub(super) fn sweep_stale(bookings: &mut Vec<Booking>, tables: &[Table]) -> usize {
    let before = bookings.len();
    bookings.retain(|b| tables.iter().any(|t| t.name == b.table()));
    before - bookings.len()
}
