use std::sync::Arc;

use crate::limits::*;
use crate::model::Table;
use crate::store::{Store, TABLES_KEY};

use super::{EngineError, load_slice, save_slice};

/// Owns the table collection: name uniqueness, display order, capacity
/// math. Instances are cheap stateless views; the store is the source of
/// truth and every operation re-reads it under the store's transaction
/// guard.
pub struct TableRegistry {
    store: Arc<dyn Store>,
}

impl TableRegistry {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<Table>, EngineError> {
        load_slice(self.store.as_ref(), TABLES_KEY)
    }

    fn save(&self, tables: &[Table]) -> Result<(), EngineError> {
        save_slice(self.store.as_ref(), TABLES_KEY, tables)
    }

    /// Register a new table. The name is trimmed and must be unique; seats
    /// must be within the house bounds. The collection stays sorted by name.
    pub fn create(&self, name: &str, seats: u32) -> Result<Table, EngineError> {
        let _txn = self.store.begin();
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidInput("table name must not be empty".into()));
        }
        if !(MIN_SEATS..=MAX_SEATS).contains(&seats) {
            return Err(EngineError::InvalidInput(format!(
                "seats must be between {MIN_SEATS} and {MAX_SEATS}"
            )));
        }
        let mut tables = self.load()?;
        if tables.iter().any(|t| t.name == name) {
            return Err(EngineError::DuplicateName(name.to_string()));
        }
        let table = Table::new(name, seats);
        tables.push(table.clone());
        tables.sort_by(|a, b| a.name.cmp(&b.name));
        self.save(&tables)?;
        Ok(table)
    }

    /// Remove a table by name. Deleting a name that does not exist is a
    /// caller bug, not user error.
    pub fn delete(&self, name: &str) -> Result<(), EngineError> {
        let _txn = self.store.begin();
        let mut tables = self.load()?;
        let before = tables.len();
        tables.retain(|t| t.name != name);
        if tables.len() == before {
            return Err(EngineError::Internal(format!("no table named {name}")));
        }
        self.save(&tables)
    }

    /// Exact-match lookup, no side effects.
    pub fn find(&self, name: &str) -> Result<Option<Table>, EngineError> {
        let _txn = self.store.begin();
        Ok(self.load()?.into_iter().find(|t| t.name == name))
    }

    /// All tables in display order.
    pub fn list(&self) -> Result<Vec<Table>, EngineError> {
        let _txn = self.store.begin();
        self.load()
    }

    /// Table names in display order.
    pub fn namelist(&self) -> Result<Vec<String>, EngineError> {
        let _txn = self.store.begin();
        Ok(self.load()?.into_iter().map(|t| t.name).collect())
    }

    /// Totals across the floor plan: (tables, seats).
    pub fn capacity(&self) -> Result<(usize, u32), EngineError> {
        let _txn = self.store.begin();
        let tables = self.load()?;
        let seats = tables.iter().map(|t| t.seats).sum();
        Ok((tables.len(), seats))
    }

    /// First unused name of the form `Table <n>`. Creation-form prefill,
    /// no side effects.
    pub fn default_name(&self) -> Result<String, EngineError> {
        let _txn = self.store.begin();
        let tables = self.load()?;
        let mut n = 1u32;
        loop {
            let candidate = format!("Table {n}");
            if !tables.iter().any(|t| t.name == candidate) {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    /// First-run convenience: when no tables exist yet, persist the default
    /// floor plan. A populated registry is left untouched.
    pub fn seed_defaults(&self) -> Result<(), EngineError> {
        let _txn = self.store.begin();
        if !self.load()?.is_empty() {
            return Ok(());
        }
        tracing::info!("seeding default floor plan");
        let tables = vec![
            Table::new("Table 1", DEFAULT_SEATS),
            Table::new("Table 2", DEFAULT_SEATS),
            Table::new("Table 3", 6),
        ];
        self.save(&tables)
    }
}
