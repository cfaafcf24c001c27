use std::fmt;

use serde::{Deserialize, Serialize};

use crate::limits::*;

/// Seconds from the synthetic day's midnight. The only time type.
pub type Sec = i64;

/// Render a time of day as `HH:MM`.
pub fn fmt_time(t: Sec) -> String {
    format!("{:02}:{:02}", t / 3_600, t % 3_600 / 60)
}

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Sec,
    pub end: Sec,
}

impl Span {
    pub fn new(start: Sec, end: Sec) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    pub fn duration(&self) -> Sec {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub fn contains_instant(&self, t: Sec) -> bool {
        self.start <= t && t < self.end
    }
}

/// A bookable table: unique name plus seat count.
///
/// Uniqueness and the seat bounds are enforced by the registry, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub seats: u32,
}

impl Table {
    pub fn new(name: impl Into<String>, seats: u32) -> Self {
        Self { name: name.into(), seats }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} seats)", self.name, self.seats)
    }
}

/// Customer identity: the exact (name, phone) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self { name: name.into(), phone: phone.into() }
    }

    /// The reserved identity attached to every walk-in booking.
    pub fn walk_in() -> Self {
        Self { name: WALK_IN_NAME.into(), phone: String::new() }
    }
}

/// How a booking came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingKind {
    /// Reserved ahead of time for a specific window.
    Advance,
    /// Table taken on the spot; holds the whole day.
    WalkIn,
}

/// A reservation of one table for one customer over a time window.
///
/// The kind is fixed at construction: `advance` and `walk_in` are the only
/// ways to build one, so a walk-in can never turn back into an advance
/// booking. The table is referenced by name only; whether it still exists is
/// the registry's problem, not this value's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    table: String,
    customer: Customer,
    span: Span,
    kind: BookingKind,
}

impl Booking {
    /// An advance booking for `[start, start + period)`. Callers hand in
    /// validated primitives; `period` must be positive.
    pub fn advance(table: impl Into<String>, customer: Customer, start: Sec, period: Sec) -> Self {
        Self {
            table: table.into(),
            customer,
            span: Span::new(start, start + period),
            kind: BookingKind::Advance,
        }
    }

    /// The all-day sentinel marking a table as walked in: `[00:00:00,
    /// 23:59:59)` under the reserved walk-in identity.
    pub fn walk_in(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            customer: Customer::walk_in(),
            span: Span::new(0, DAY_LAST_SEC),
            kind: BookingKind::WalkIn,
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn start(&self) -> Sec {
        self.span.start
    }

    pub fn period(&self) -> Sec {
        self.span.duration()
    }

    pub fn kind(&self) -> BookingKind {
        self.kind
    }

    pub fn is_walk_in(&self) -> bool {
        self.kind == BookingKind::WalkIn
    }

    /// True if the two time windows share any instant. Symmetric; windows
    /// that only touch at an endpoint do not overlap.
    pub fn overlaps(&self, other: &Booking) -> bool {
        self.span.overlaps(&other.span)
    }

    /// Same customer identity with overlapping windows. With `match_table`
    /// the two must also sit on the same table.
    pub fn duplicates(&self, other: &Booking, match_table: bool) -> bool {
        if match_table && self.table != other.table {
            return false;
        }
        self.customer == other.customer && self.overlaps(other)
    }

    /// Prefill for the booking form: the next whole hour after the current
    /// wall-clock time of day (UTC), wrapping past midnight.
    pub fn default_start() -> Sec {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as Sec;
        (now % DAY_SECS / 3_600 + 1) * 3_600 % DAY_SECS
    }

    /// Prefill for the booking form: the standard sitting length.
    pub fn default_period() -> Sec {
        DEFAULT_PERIOD_SECS
    }
}

impl fmt::Display for Booking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            BookingKind::WalkIn => write!(f, "Walk-In"),
            BookingKind::Advance => write!(
                f,
                "{} - {} {} ({})",
                fmt_time(self.span.start),
                fmt_time(self.span.end),
                self.customer.name,
                self.customer.phone
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: Sec = 3_600;

    fn customer(name: &str, phone: &str) -> Customer {
        Customer::new(name, phone)
    }

    #[test]
    fn span_basics() {
        let s = Span::new(100, 200);
        assert_eq!(s.duration(), 100);
        assert!(s.contains_instant(100));
        assert!(s.contains_instant(199));
        assert!(!s.contains_instant(200)); // half-open
    }

    #[test]
    fn span_overlap() {
        let a = Span::new(100, 200);
        let b = Span::new(150, 250);
        let c = Span::new(200, 300);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c)); // adjacent, not overlapping
    }

    #[test]
    fn overlap_is_symmetric() {
        let windows = [
            Span::new(0, 100),
            Span::new(50, 150),
            Span::new(100, 200),
            Span::new(0, 300),
            Span::new(250, 260),
        ];
        for a in &windows {
            for b in &windows {
                assert_eq!(a.overlaps(b), b.overlaps(a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn booking_overlap_mirrors_span() {
        let a = Booking::advance("A", customer("Bob", "555"), 10 * H, H);
        let b = Booking::advance("B", customer("Alice", "777"), 10 * H + 1800, H);
        let c = Booking::advance("A", customer("Eve", "999"), 11 * H, H);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c)); // ends exactly where c starts
    }

    #[test]
    fn walk_in_sentinel_shape() {
        let w = Booking::walk_in("Table 1");
        assert!(w.is_walk_in());
        assert_eq!(w.kind(), BookingKind::WalkIn);
        assert_eq!(w.table(), "Table 1");
        assert_eq!(w.span(), Span::new(0, DAY_LAST_SEC));
        assert_eq!(w.customer().name, WALK_IN_NAME);
        assert_eq!(w.customer().phone, "");
    }

    #[test]
    fn walk_in_covers_any_advance_window() {
        let w = Booking::walk_in("A");
        let early = Booking::advance("A", customer("Bob", "555"), 0, H);
        let late = Booking::advance("A", customer("Bob", "555"), 22 * H, H);
        assert!(w.overlaps(&early));
        assert!(w.overlaps(&late));
    }

    #[test]
    fn duplicate_requires_identity_and_overlap() {
        let a = Booking::advance("A", customer("Bob", "555"), 10 * H, H);
        let same_time_other_table = Booking::advance("B", customer("Bob", "555"), 10 * H, H);
        let other_phone = Booking::advance("A", customer("Bob", "556"), 10 * H, H);
        let later = Booking::advance("A", customer("Bob", "555"), 14 * H, H);

        assert!(a.duplicates(&same_time_other_table, false));
        assert!(!a.duplicates(&other_phone, false));
        assert!(!a.duplicates(&later, false));
    }

    #[test]
    fn duplicate_table_scoping() {
        let a = Booking::advance("A", customer("Bob", "555"), 10 * H, H);
        let b = Booking::advance("B", customer("Bob", "555"), 10 * H, H);
        assert!(a.duplicates(&b, false));
        assert!(!a.duplicates(&b, true));
    }

    #[test]
    fn equality_is_structural() {
        let a = Booking::advance("A", customer("Bob", "555"), 10 * H, H);
        let same = Booking::advance("A", customer("Bob", "555"), 10 * H, H);
        let shifted = Booking::advance("A", customer("Bob", "555"), 11 * H, H);
        assert_eq!(a, same);
        assert_ne!(a, shifted);
        assert_ne!(a, Booking::walk_in("A"));
    }

    #[test]
    fn two_walk_ins_same_table_are_equal() {
        assert_eq!(Booking::walk_in("A"), Booking::walk_in("A"));
        assert_ne!(Booking::walk_in("A"), Booking::walk_in("B"));
    }

    #[test]
    fn fmt_time_renders_hh_mm() {
        assert_eq!(fmt_time(0), "00:00");
        assert_eq!(fmt_time(9 * H + 1800), "09:30");
        assert_eq!(fmt_time(23 * H + 59 * 60), "23:59");
    }

    #[test]
    fn display_distinguishes_walk_in() {
        let adv = Booking::advance("A", customer("Bob", "555"), 10 * H, 90 * 60);
        assert_eq!(adv.to_string(), "10:00 - 11:30 Bob (555)");
        assert_eq!(Booking::walk_in("A").to_string(), "Walk-In");
    }

    #[test]
    fn table_display() {
        assert_eq!(Table::new("Table 1", 4).to_string(), "Table 1 (4 seats)");
    }

    #[test]
    fn default_start_is_a_whole_hour_in_day() {
        let t = Booking::default_start();
        assert!((0..DAY_SECS).contains(&t));
        assert_eq!(t % H, 0);
    }

    #[test]
    fn default_period_is_ninety_minutes() {
        assert_eq!(Booking::default_period(), 90 * 60);
    }

    #[test]
    fn booking_roundtrips_through_snapshot_bytes() {
        let b = Booking::advance("A", customer("Bob", "555"), 10 * H, H);
        let bytes = bincode::serialize(&b).unwrap();
        let decoded: Booking = bincode::deserialize(&bytes).unwrap();
        assert_eq!(b, decoded);
        assert!(!decoded.is_walk_in());
    }
}
