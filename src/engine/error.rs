use thiserror::Error;

/// Everything a registry operation can fail with. All kinds are expected
/// and recoverable; the engine returns them without logging and the caller
/// decides how to surface them.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed name, out-of-range seat count, or an out-of-bounds window.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Table name collision on create.
    #[error("table name {0} already exists")]
    DuplicateName(String),

    /// The customer is already booked in an overlapping window.
    #[error("{0} is already booked during that time")]
    DuplicateBooking(String),

    /// The table is already booked or walked in for the requested window.
    #[error("table {0} is not available during that time")]
    TableBusy(String),

    /// Walk-out on a table with no active walk-in.
    #[error("table {0} has no active walk-in")]
    TableFree(String),

    /// Referential violation or illegal state transition: a caller or
    /// engine bug, not bad user input.
    #[error("internal error: {0}")]
    Internal(String),
}
