//! Core data model for tallysort.
//!
//! This module defines:
//! - [`Record`]: the fixed-shape value being organized.
//! - [`RecordSet`]: a bounded, ordered collection of records.
//! - [`EngineError`]: the engine's recoverable error conditions.

/// Default upper bound on the number of records a [`RecordSet`] accepts.
pub const MAX_RECORDS: usize = 20;

/// Errors the engine can report.
///
/// Every variant is recoverable at the call site; the engine never terminates
/// the process and never panics on contract-valid input.
#[derive(Debug, Clone, thiserror::Error, Eq, PartialEq)]
pub enum EngineError {
    #[error("record set is full (capacity {0})")]
    CapacityExceeded(usize),
    #[error("binary search requires the working copy to be sorted by name first")]
    SearchNotSorted,
}

/// A single labeled entry: a name, a free-form category, and a priority.
///
/// Records are plain values and are copied freely. The shell validates
/// `priority` to lie in `1..=10` before a record ever reaches the engine;
/// the engine does not re-check it. Names are not required to be unique —
/// searching a set with duplicate names returns an arbitrary match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub category: String,
    pub priority: u8,
}

impl Record {
    #[must_use]
    pub fn new(name: impl Into<String>, category: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            priority,
        }
    }
}

/// A bounded, ordered sequence of [`Record`]s.
///
/// The collection owns its storage and enforces an explicit capacity:
/// `0 <= len <= capacity` holds at all times, and [`RecordSet::push`] past the
/// bound reports [`EngineError::CapacityExceeded`] instead of growing.
///
/// A `RecordSet` registered once acts as the read-only source of truth for the
/// dispatcher; sorting only ever touches a working copy of its records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
    capacity: usize,
}

impl RecordSet {
    /// Creates an empty set with the default [`MAX_RECORDS`] capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MAX_RECORDS)
    }

    /// Creates an empty set bounded to `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a record, rejecting it once the capacity is reached.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CapacityExceeded`] when the set is full; the
    /// set is left unchanged.
    pub fn push(&mut self, record: Record) -> Result<(), EngineError> {
        if self.records.len() >= self.capacity {
            return Err(EngineError::CapacityExceeded(self.capacity));
        }
        self.records.push(record);
        Ok(())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The records in registration order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}

impl Default for RecordSet {
    fn default() -> Self {
        Self::new()
    }
}
