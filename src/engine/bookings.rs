use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{Booking, Table};
use crate::store::{BOOKINGS_KEY, Store, TABLES_KEY};

use super::conflict::{conflicts, duplicate_exists, sweep_stale, validate_span};
use super::{EngineError, load_slice, save_slice};

/// The conflict engine. Owns the booking collection, detects time-overlap
/// and duplicate-customer collisions, and drives the per-table walk-in
/// toggle.
///
/// Bookings reference tables by name only, so a deleted table can leave
/// bookings behind; every operation starts by sweeping those out. Like
/// [`TableRegistry`](super::TableRegistry), instances are stateless views
/// over the shared store and serialize through its transaction guard.
pub struct BookingRegistry {
    store: Arc<dyn Store>,
}

impl BookingRegistry {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    fn save(&self, bookings: &[Booking]) -> Result<(), EngineError> {
        save_slice(self.store.as_ref(), BOOKINGS_KEY, bookings)
    }

    /// Current (tables, bookings) snapshot with stale bookings swept out.
    /// Runs inside the caller's transaction; persists only when the sweep
    /// removed something.
    fn load_swept(&self) -> Result<(Vec<Table>, Vec<Booking>), EngineError> {
        let tables: Vec<Table> = load_slice(self.store.as_ref(), TABLES_KEY)?;
        let mut bookings: Vec<Booking> = load_slice(self.store.as_ref(), BOOKINGS_KEY)?;
        let removed = sweep_stale(&mut bookings, &tables);
        if removed > 0 {
            tracing::debug!("swept {removed} bookings for missing tables");
            self.save(&bookings)?;
        }
        Ok((tables, bookings))
    }

    /// Bookings grouped by table, each group ascending by start time.
    /// Tables without bookings are absent from the map.
    pub fn table_status(&self) -> Result<BTreeMap<String, Vec<Booking>>, EngineError> {
        let _txn = self.store.begin();
        let (_, bookings) = self.load_swept()?;
        let mut status: BTreeMap<String, Vec<Booking>> = BTreeMap::new();
        for booking in bookings {
            status.entry(booking.table().to_string()).or_default().push(booking);
        }
        for group in status.values_mut() {
            group.sort_by_key(|b| b.start());
        }
        Ok(status)
    }

    /// Occupied totals: (tables with at least one booking, their seats).
    /// A table with several bookings counts once.
    pub fn utilization(&self) -> Result<(usize, u32), EngineError> {
        let _txn = self.store.begin();
        let (tables, bookings) = self.load_swept()?;
        let mut used_tables = 0usize;
        let mut used_seats = 0u32;
        for table in &tables {
            if bookings.iter().any(|b| b.table() == table.name) {
                used_tables += 1;
                used_seats += table.seats;
            }
        }
        Ok((used_tables, used_seats))
    }

    /// True if no current booking on the candidate's table overlaps it.
    pub fn available(&self, candidate: &Booking) -> Result<bool, EngineError> {
        let _txn = self.store.begin();
        let (_, bookings) = self.load_swept()?;
        Ok(!conflicts(&bookings, candidate))
    }

    /// True if any current booking duplicates the candidate's customer.
    pub fn is_duplicate(&self, candidate: &Booking, match_table: bool) -> Result<bool, EngineError> {
        let _txn = self.store.begin();
        let (_, bookings) = self.load_swept()?;
        Ok(duplicate_exists(&bookings, candidate, match_table))
    }

    /// Add an advance booking. The failure order is fixed: a double-booked
    /// customer is reported before a busy table, so an identity conflict
    /// wins even when both hold.
    pub fn add(&self, candidate: Booking) -> Result<(), EngineError> {
        let _txn = self.store.begin();
        if candidate.is_walk_in() {
            return Err(EngineError::Internal(
                "walk-ins are placed through walk_in, not add".into(),
            ));
        }
        validate_span(&candidate.span())?;
        let (tables, mut bookings) = self.load_swept()?;
        if !tables.iter().any(|t| t.name == candidate.table()) {
            return Err(EngineError::Internal(format!(
                "no table named {}",
                candidate.table()
            )));
        }
        if duplicate_exists(&bookings, &candidate, false) {
            return Err(EngineError::DuplicateBooking(candidate.customer().name.clone()));
        }
        if conflicts(&bookings, &candidate) {
            return Err(EngineError::TableBusy(candidate.table().to_string()));
        }
        bookings.push(candidate);
        self.save(&bookings)
    }

    /// Remove every booking structurally equal to `candidate`. Removing
    /// nothing is not an error.
    pub fn delete(&self, candidate: &Booking) -> Result<(), EngineError> {
        let _txn = self.store.begin();
        let (_, mut bookings) = self.load_swept()?;
        let before = bookings.len();
        bookings.retain(|b| b != candidate);
        if bookings.len() != before {
            self.save(&bookings)?;
        }
        Ok(())
    }

    /// Whether the walk-in toggle for `table` currently reads Free. An
    /// empty or unknown name is never available, matching the backstop in
    /// [`walk_in`](Self::walk_in).
    pub fn walk_in_available(&self, table: &str) -> Result<bool, EngineError> {
        let _txn = self.store.begin();
        if table.trim().is_empty() {
            return Ok(false);
        }
        let (tables, bookings) = self.load_swept()?;
        if !tables.iter().any(|t| t.name == table) {
            return Ok(false);
        }
        let candidate = Booking::walk_in(table);
        Ok(!duplicate_exists(&bookings, &candidate, true))
    }

    /// Take the table: place the all-day walk-in. Fails when one is already
    /// active there.
    pub fn walk_in(&self, table: &str) -> Result<(), EngineError> {
        let _txn = self.store.begin();
        let (tables, mut bookings) = self.load_swept()?;
        if !tables.iter().any(|t| t.name == table) {
            return Err(EngineError::Internal(format!("no table named {table}")));
        }
        let candidate = Booking::walk_in(table);
        if duplicate_exists(&bookings, &candidate, true) {
            return Err(EngineError::TableBusy(table.to_string()));
        }
        bookings.push(candidate);
        self.save(&bookings)
    }

    /// Release the table: remove its walk-in. Fails when none is active.
    pub fn walk_out(&self, table: &str) -> Result<(), EngineError> {
        let _txn = self.store.begin();
        let (_, mut bookings) = self.load_swept()?;
        let active = Booking::walk_in(table);
        if !duplicate_exists(&bookings, &active, true) {
            return Err(EngineError::TableFree(table.to_string()));
        }
        bookings.retain(|b| b != &active);
        self.save(&bookings)
    }
}
