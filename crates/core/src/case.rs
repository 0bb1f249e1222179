//! Triage cases and their lifecycle.
//!
//! A [`Case`] is created `active` by [`CaseManager::create`] and finalised by
//! [`CaseManager::save`], which moves it to `completed` and archives it in the session's
//! [`CaseStore`]. There is no other transition. A case that is never saved is simply
//! dropped by the caller and never reaches the store.

use crate::catalog::SymptomCatalog;
use crate::severity::{classify, Severity};
use crate::store::CaseStore;
use crate::{TriageError, TriageResult};
use chrono::{DateTime, Utc};
use flydoc_uuid::CaseId;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Lifecycle status of a case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    Active,
    Completed,
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStatus::Active => f.write_str("active"),
            CaseStatus::Completed => f.write_str("completed"),
        }
    }
}

/// A triage record.
///
/// Fields are private: the symptom list is never empty, the severity is fixed at creation,
/// and the status only moves forward through [`CaseManager::save`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Case {
    id: CaseId,
    symptoms: Vec<String>,
    severity: Severity,
    created_at: DateTime<Utc>,
    status: CaseStatus,
}

impl Case {
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    /// Symptom names in catalog order, without duplicates.
    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> CaseStatus {
        self.status
    }

    /// Returns the completed version of this case.
    fn complete(self) -> TriageResult<Self> {
        if self.status != CaseStatus::Active {
            return Err(TriageError::InvalidTransition {
                id: self.id,
                status: self.status,
            });
        }
        Ok(Self {
            status: CaseStatus::Completed,
            ..self
        })
    }
}

/// Creates cases from a symptom selection and finalises them into the case log.
///
/// One manager is constructed per session and owns that session's [`CaseStore`]. Active
/// cases are not retained: ownership passes to the caller on creation.
#[derive(Clone, Debug)]
pub struct CaseManager {
    catalog: Arc<SymptomCatalog>,
    store: CaseStore,
}

impl CaseManager {
    pub fn new(catalog: Arc<SymptomCatalog>) -> Self {
        Self {
            catalog,
            store: CaseStore::default(),
        }
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    /// The archive of completed cases.
    pub fn store(&self) -> &CaseStore {
        &self.store
    }

    /// Creates an active case from a selection of catalog symptom ids.
    ///
    /// Repeated ids collapse to one symptom. The case's symptoms are listed in catalog
    /// order and its severity is classified once, here.
    ///
    /// # Errors
    ///
    /// - [`TriageError::InvalidSelection`] if `selection` is empty
    /// - [`TriageError::UnknownSymptomId`] if any id is not in the catalog
    pub fn create<S: AsRef<str>>(&self, selection: &[S]) -> TriageResult<Case> {
        if selection.is_empty() {
            tracing::warn!("rejected case creation with an empty selection");
            return Err(TriageError::InvalidSelection);
        }

        let mut selected = HashSet::new();
        for id in selection {
            let id = id.as_ref();
            if self.catalog.get(id).is_none() {
                tracing::warn!("rejected case creation with unknown symptom id '{}'", id);
                return Err(TriageError::UnknownSymptomId(id.to_owned()));
            }
            selected.insert(id);
        }

        let symptoms: Vec<String> = self
            .catalog
            .symptoms()
            .iter()
            .filter(|s| selected.contains(s.id()))
            .map(|s| s.name().to_owned())
            .collect();

        let severity = classify(&symptoms);
        let id = CaseId::generate();
        let case = Case {
            created_at: id.timestamp(),
            id,
            symptoms,
            severity,
            status: CaseStatus::Active,
        };

        tracing::info!(
            "created {} case {} with {} symptoms",
            case.severity,
            case.id,
            case.symptoms.len()
        );
        Ok(case)
    }

    /// Completes an active case and archives it.
    ///
    /// Saving is idempotent per case id: if the log already holds the id, the stored entry
    /// is returned unchanged and nothing new is archived.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidTransition`] if the case is not active and has not
    /// been archived by this session.
    pub fn save(&mut self, case: Case) -> TriageResult<Case> {
        if let Ok(existing) = self.store.get(case.id()) {
            tracing::warn!("case {} already archived; returning stored entry", case.id);
            return Ok(existing.clone());
        }

        let completed = case.complete().inspect_err(|e| {
            tracing::warn!("save rejected: {}", e);
        })?;

        let stored = self.store.append(completed)?;
        tracing::info!("archived case {}", stored.id());
        Ok(stored.clone())
    }
}
