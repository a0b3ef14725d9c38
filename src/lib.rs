//! # Tallysort
//!
//! `tallysort` is a small in-memory record organizer: register a bounded set
//! of labeled records, then race three classic sorting strategies against the
//! same data while tallying element comparisons and wall-clock cost.
//!
//! Each strategy is deliberately fixed to one algorithm family, one field, and
//! one direction — the pairing is the point, not a limitation:
//!
//! - **Bubble sort** orders by `name`, ascending, with an early exit on a
//!   swap-free pass.
//! - **Insertion sort** orders by `category`, ascending, stable.
//! - **Selection sort** orders by `priority`, descending (10 ranks first),
//!   always `n * (n - 1) / 2` comparisons.
//!
//! A binary [`search`](algo::binary_search_by_name) by exact name complements
//! the sorts and is only valid over a name-ordered copy; the
//! [`Dispatcher`](dispatch::Dispatcher) enforces that gate and keeps the
//! registered records untouched by handing each sort a fresh working copy.
//!
//! ## Usage
//!
//! ```rust
//! use tallysort::prelude::*;
//!
//! # fn main() -> Result<(), EngineError> {
//! let mut set = RecordSet::new();
//! set.push(Record::new("Zeta", "core", 5))?;
//! set.push(Record::new("Alpha", "support", 9))?;
//! set.push(Record::new("Mu", "core", 2))?;
//!
//! let mut organizer = Dispatcher::new(set);
//!
//! let Outcome::Sorted(report) = organizer.dispatch(Request::SortByName)? else {
//!     unreachable!("non-empty set always yields a report");
//! };
//! assert_eq!(report.comparisons, 3);
//! assert_eq!(organizer.working()[0].name, "Alpha");
//!
//! let found = organizer.dispatch(Request::SearchByName("Mu".into()))?;
//! assert_eq!(found, Outcome::Found { index: 1 });
//! # Ok(())
//! # }
//! ```
//!
//! ## Performance Characteristics
//!
//! - All three sorts are O(n²) comparison sorts; bubble and insertion degrade
//!   to O(n) on already-ordered input, selection never does.
//! - The comparison tally is exact and deterministic for a given input order;
//!   elapsed time comes from a monotonic clock and is reported in
//!   sub-millisecond-resolution milliseconds.
//! - Collections are bounded by an explicit capacity
//!   ([`MAX_RECORDS`](core::MAX_RECORDS) by default) and copied per operation
//!   cycle, so sorting never mutates the registered originals.

pub mod algo;
pub mod core;
pub mod dispatch;
pub mod measure;

pub use algo::{
    SortStrategy, binary_search_by_name, bubble_sort_by_name, insertion_sort_by_category,
    selection_sort_by_priority,
};
pub use core::{EngineError, MAX_RECORDS, Record, RecordSet};
pub use dispatch::{Dispatcher, Outcome, Request, SortState};
pub use measure::{SortReport, measure};

pub mod prelude {
    pub use crate::algo::{
        SortStrategy, binary_search_by_name, bubble_sort_by_name, insertion_sort_by_category,
        selection_sort_by_priority,
    };
    pub use crate::core::{EngineError, MAX_RECORDS, Record, RecordSet};
    pub use crate::dispatch::{Dispatcher, Outcome, Request, SortState};
    pub use crate::measure::{SortReport, measure};
}
