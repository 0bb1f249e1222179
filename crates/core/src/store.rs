//! Append-only archive of completed cases.

use crate::case::{Case, CaseStatus};
use crate::{TriageError, TriageResult};
use flydoc_uuid::CaseId;
use std::collections::HashMap;

/// In-memory case log.
///
/// Entries keep insertion order and are unique by id. Nothing is ever updated or removed
/// once appended. `append` performs its duplicate check and insert under one `&mut`
/// borrow, so the uniqueness invariant holds without further locking.
#[derive(Clone, Debug, Default)]
pub struct CaseStore {
    entries: Vec<Case>,
    index: HashMap<CaseId, usize>,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archives a completed case.
    ///
    /// If an entry with the same id already exists, that entry is returned and `case` is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidTransition`] if `case` is not completed.
    pub fn append(&mut self, case: Case) -> TriageResult<&Case> {
        if let Some(&pos) = self.index.get(case.id()) {
            tracing::debug!("case {} already in the log", case.id());
            return Ok(&self.entries[pos]);
        }

        if case.status() != CaseStatus::Completed {
            return Err(TriageError::InvalidTransition {
                id: case.id().clone(),
                status: case.status(),
            });
        }

        let pos = self.entries.len();
        self.index.insert(case.id().clone(), pos);
        self.entries.push(case);
        Ok(&self.entries[pos])
    }

    /// Looks up an archived case.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::NotFound`] if no entry has this id.
    pub fn get(&self, id: &CaseId) -> TriageResult<&Case> {
        self.index
            .get(id)
            .map(|&pos| &self.entries[pos])
            .ok_or_else(|| TriageError::NotFound(id.clone()))
    }

    /// All archived cases in insertion order.
    pub fn list(&self) -> &[Case] {
        &self.entries
    }

    pub fn contains(&self, id: &CaseId) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
