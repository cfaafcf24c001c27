//! Reservation conflict engine for a single-venue floor plan: tables,
//! time-window bookings, walk-in overrides, and the collision rules
//! between them. Persistence and change notification sit behind the
//! [`store::Store`] seam; rendering and input handling are the caller's.

pub mod engine;
pub mod limits;
pub mod model;
pub mod notify;
pub mod store;
pub mod validate;

pub use engine::{BookingRegistry, EngineError, TableRegistry};
pub use model::{Booking, BookingKind, Customer, Sec, Span, Table};
pub use notify::{NotifyHub, StoreChange};
pub use store::{BOOKINGS_KEY, MemoryStore, Store, TABLES_KEY};
