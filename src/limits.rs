use crate::model::Sec;

/// Length of the synthetic booking day in seconds. All times of day live in
/// `[0, DAY_SECS)`.
pub const DAY_SECS: Sec = 86_400;

/// Last representable second of the day (23:59:59), the walk-in window end.
pub const DAY_LAST_SEC: Sec = DAY_SECS - 1;

/// Seat bounds for a single table.
pub const MIN_SEATS: u32 = 1;
pub const MAX_SEATS: u32 = 12;

/// Seat count prefilled in the table creation form.
pub const DEFAULT_SEATS: u32 = 4;

/// Longest advance booking: 8 hours.
pub const MAX_PERIOD_SECS: Sec = 8 * 3_600;

/// Sitting length prefilled in the booking form: 90 minutes.
pub const DEFAULT_PERIOD_SECS: Sec = 90 * 60;

/// Reserved customer name carried by every walk-in booking.
pub const WALK_IN_NAME: &str = "Walk-In Guest";
