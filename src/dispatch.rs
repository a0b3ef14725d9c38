//! Operation dispatch: working-copy lifecycle, sort-state gating, outcomes.
//!
//! The [`Dispatcher`] owns the registered records (never reordered), a working
//! copy (the only thing the sorts mutate), and an explicit [`SortState`] tag
//! for the copy. A sort request begins a fresh operation cycle — the copy is
//! rebuilt from the original before the algorithm runs, so no cycle inherits
//! a previous cycle's ordering. A search request joins the cycle in progress
//! and is honored only while the copy is name-ordered.

use crate::algo::{self, SortStrategy};
use crate::core::{EngineError, Record, RecordSet};
use crate::measure::{self, SortReport};

/// Which field the working copy is currently ordered by, if any.
///
/// Carried alongside the working copy as an inspectable value rather than an
/// ambient flag; only [`SortState::ByName`] permits binary search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    ByName,
    ByCategory,
    ByPriority,
}

impl SortState {
    /// Whether binary search is valid over a copy in this state.
    #[must_use]
    pub fn searchable(self) -> bool {
        matches!(self, Self::ByName)
    }
}

/// An operation selector, as supplied by the shell.
///
/// The enum is closed: unrecognized selectors are unrepresentable here and are
/// the shell's menu parser's problem.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    SortByName,
    SortByCategory,
    SortByPriority,
    SearchByName(String),
    ShowOriginal,
    Exit,
}

/// What a dispatched operation produced.
///
/// The engine formats no messages; the shell renders these together with the
/// [`Dispatcher::working`] and [`Dispatcher::original`] views.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A sort ran on the working copy; metrics attached.
    Sorted(SortReport),
    /// The searched name exists at `index` in the working copy.
    Found { index: usize },
    /// The searched name is absent. A normal result, not an error.
    NotFound,
    /// The caller asked for the untouched original records.
    Original,
    /// The record set is empty; nothing to operate on.
    NothingToDo,
    /// Terminal request; the shell's loop should end.
    Exit,
}

/// Routes requests to the sort and search engines.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    original: RecordSet,
    working: Vec<Record>,
    state: SortState,
}

impl Dispatcher {
    #[must_use]
    pub fn new(original: RecordSet) -> Self {
        let working = original.records().to_vec();
        Self {
            original,
            working,
            state: SortState::Unsorted,
        }
    }

    /// The registered records, in registration order. Never reordered.
    #[must_use]
    pub fn original(&self) -> &[Record] {
        self.original.records()
    }

    /// The working copy as of the current operation cycle.
    #[must_use]
    pub fn working(&self) -> &[Record] {
        &self.working
    }

    /// The working copy's current sort state.
    #[must_use]
    pub fn state(&self) -> SortState {
        self.state
    }

    /// Executes one operation request.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::SearchNotSorted`] for a search while the working
    /// copy is not name-ordered; no search is executed. All other requests
    /// succeed with an [`Outcome`].
    pub fn dispatch(&mut self, request: Request) -> Result<Outcome, EngineError> {
        match request {
            Request::SortByName => self.sort(SortStrategy::BubbleByName, SortState::ByName),
            Request::SortByCategory => {
                self.sort(SortStrategy::InsertionByCategory, SortState::ByCategory)
            }
            Request::SortByPriority => {
                self.sort(SortStrategy::SelectionByPriority, SortState::ByPriority)
            }
            Request::SearchByName(name) => self.search(&name),
            Request::ShowOriginal => Ok(Outcome::Original),
            Request::Exit => Ok(Outcome::Exit),
        }
    }

    /// Begins a fresh cycle, then runs the measured sort on the new copy.
    fn sort(&mut self, strategy: SortStrategy, state: SortState) -> Result<Outcome, EngineError> {
        if self.original.is_empty() {
            return Ok(Outcome::NothingToDo);
        }
        self.working = self.original.records().to_vec();
        self.state = SortState::Unsorted;

        let report = measure::measure(strategy, &mut self.working);
        self.state = state;
        Ok(Outcome::Sorted(report))
    }

    fn search(&self, name: &str) -> Result<Outcome, EngineError> {
        if self.original.is_empty() {
            return Ok(Outcome::NothingToDo);
        }
        if !self.state.searchable() {
            tracing::debug!(state = ?self.state, "search rejected: copy not name-ordered");
            return Err(EngineError::SearchNotSorted);
        }
        match algo::binary_search_by_name(&self.working, name) {
            Some(index) => Ok(Outcome::Found { index }),
            None => Ok(Outcome::NotFound),
        }
    }
}
