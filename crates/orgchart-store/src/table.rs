//! A single entity table.

use serde::{Deserialize, Serialize};

use orgchart_entity::Record;

/// Rows of one entity type, kept in insertion order.
///
/// Lookups are linear scans; tables are expected to stay small.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Table<T> {
    rows: Vec<T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Record> Table<T> {
    /// Build a table from existing rows.
    pub fn from_rows(rows: Vec<T>) -> Self {
        Self { rows }
    }

    /// Find a row by id.
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Whether a row with this id exists.
    pub fn contains(&self, id: T::Id) -> bool {
        self.get(id).is_some()
    }

    /// Iterate rows in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    /// Borrow all rows.
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Count rows matching a predicate.
    pub fn count_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.rows.iter().filter(|row| predicate(row)).count()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row.
    pub fn insert(&mut self, row: T) {
        self.rows.push(row);
    }

    /// Replace the row with the same id in place. Returns `false` if absent.
    pub fn replace(&mut self, row: T) -> bool {
        match self.rows.iter_mut().find(|r| r.id() == row.id()) {
            Some(slot) => {
                *slot = row;
                true
            }
            None => false,
        }
    }

    /// Remove a row by id, returning it.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let idx = self.rows.iter().position(|row| row.id() == id)?;
        Some(self.rows.remove(idx))
    }
}
