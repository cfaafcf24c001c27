//! Field validators for raw form input. Each one normalizes or rejects a
//! single field; [`FieldErrors`] collects the rejections so a form can
//! report every bad field at once instead of stopping at the first.
//!
//! The registries assume these ran: they re-check business bounds
//! (uniqueness, overlap, the period cap) but never formatting.

use thiserror::Error;

use crate::limits::*;
use crate::model::{Sec, fmt_time};

/// A rejected form field, with the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Invalid Name")]
    Name,
    #[error("Invalid Phone")]
    Phone,
    #[error("Invalid Time of Day")]
    Time,
    #[error("Maximum Booking Period is {}", fmt_time(MAX_PERIOD_SECS))]
    Period,
    #[error("Table Choice Required")]
    Table,
    #[error("Invalid Seats")]
    Seats,
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Customer name: strip punctuation (keep alphanumerics, `_` and spaces),
/// collapse whitespace runs, trim. Empty results are rejected.
pub fn name(raw: &str) -> Result<String, FieldError> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();
    let cleaned = collapse_whitespace(&kept);
    if cleaned.is_empty() {
        return Err(FieldError::Name);
    }
    Ok(cleaned)
}

/// Phone number: keep digits, `+ ( ) -` and spaces, collapse whitespace.
/// Empty results are rejected.
pub fn phone(raw: &str) -> Result<String, FieldError> {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-') || c.is_whitespace())
        .collect();
    let cleaned = collapse_whitespace(&kept);
    if cleaned.is_empty() {
        return Err(FieldError::Phone);
    }
    Ok(cleaned)
}

/// A booking start must fall inside the synthetic day.
pub fn time_of_day(t: Sec) -> Result<Sec, FieldError> {
    if (0..DAY_SECS).contains(&t) {
        Ok(t)
    } else {
        Err(FieldError::Time)
    }
}

/// A booking period must be positive and at most the eight-hour cap.
pub fn period(p: Sec) -> Result<Sec, FieldError> {
    if p > 0 && p <= MAX_PERIOD_SECS {
        Ok(p)
    } else {
        Err(FieldError::Period)
    }
}

/// A table selection must name something.
pub fn table_choice(raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Table);
    }
    Ok(trimmed.to_string())
}

/// Seat count for a new table.
pub fn seats(n: u32) -> Result<u32, FieldError> {
    if (MIN_SEATS..=MAX_SEATS).contains(&n) {
        Ok(n)
    } else {
        Err(FieldError::Seats)
    }
}

/// Ordered collector for batch validation: check every field, then report
/// all failures together in form order.
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the failure, if any, and hand back the value otherwise.
    pub fn capture<T>(&mut self, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(v) => Some(v),
            Err(e) => {
                self.errors.push(e);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn into_vec(self) -> Vec<FieldError> {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_strips_punctuation_and_collapses_whitespace() {
        assert_eq!(name("  Bob!!  O'Neil  ").unwrap(), "Bob ONeil");
        assert_eq!(name("Анна-Мария").unwrap(), "АннаМария");
        assert_eq!(name("x_1").unwrap(), "x_1");
    }

    #[test]
    fn name_empty_after_cleanup_rejected() {
        assert_eq!(name("  !?% "), Err(FieldError::Name));
        assert_eq!(name(""), Err(FieldError::Name));
    }

    #[test]
    fn phone_keeps_dial_symbols_only() {
        assert_eq!(phone("+7 (999) 999 99-99").unwrap(), "+7 (999) 999 99-99");
        assert_eq!(phone("call: 555").unwrap(), "555");
        assert_eq!(phone("ext.  12  34").unwrap(), "12 34");
    }

    #[test]
    fn phone_empty_after_cleanup_rejected() {
        assert_eq!(phone("call me"), Err(FieldError::Phone));
    }

    #[test]
    fn time_of_day_bounds() {
        assert_eq!(time_of_day(0).unwrap(), 0);
        assert_eq!(time_of_day(DAY_SECS - 1).unwrap(), DAY_SECS - 1);
        assert_eq!(time_of_day(-1), Err(FieldError::Time));
        assert_eq!(time_of_day(DAY_SECS), Err(FieldError::Time));
    }

    #[test]
    fn period_bounds() {
        assert_eq!(period(1).unwrap(), 1);
        assert_eq!(period(MAX_PERIOD_SECS).unwrap(), MAX_PERIOD_SECS);
        assert_eq!(period(0), Err(FieldError::Period));
        assert_eq!(period(MAX_PERIOD_SECS + 1), Err(FieldError::Period));
    }

    #[test]
    fn period_message_names_the_cap() {
        assert_eq!(FieldError::Period.to_string(), "Maximum Booking Period is 08:00");
    }

    #[test]
    fn table_choice_requires_something() {
        assert_eq!(table_choice(" Table 1 ").unwrap(), "Table 1");
        assert_eq!(table_choice("   "), Err(FieldError::Table));
    }

    #[test]
    fn seats_bounds() {
        assert_eq!(seats(MIN_SEATS).unwrap(), MIN_SEATS);
        assert_eq!(seats(MAX_SEATS).unwrap(), MAX_SEATS);
        assert_eq!(seats(0), Err(FieldError::Seats));
        assert_eq!(seats(MAX_SEATS + 1), Err(FieldError::Seats));
    }

    #[test]
    fn collector_keeps_failures_in_form_order() {
        let mut errors = FieldErrors::new();
        let n = errors.capture(name("!!"));
        let p = errors.capture(phone("+7 555"));
        let t = errors.capture(period(MAX_PERIOD_SECS * 2));

        assert_eq!(n, None);
        assert_eq!(p.as_deref(), Some("+7 555"));
        assert_eq!(t, None);
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.into_vec(),
            vec![FieldError::Name, FieldError::Period]
        );
    }

    #[test]
    fn collector_empty_when_all_fields_pass() {
        let mut errors = FieldErrors::new();
        errors.capture(name("Bob"));
        errors.capture(seats(4));
        assert!(errors.is_empty());
    }
}
