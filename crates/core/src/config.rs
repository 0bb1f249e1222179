//! Session configuration.
//!
//! Configuration is resolved once at process startup and then passed into the core. The
//! core never reads environment variables itself; front ends read them and hand the raw
//! values to the `*_from_env_value` helpers below.

use crate::case::CaseManager;
use crate::catalog::SymptomCatalog;
use crate::report::{FlightContext, PatientContext};
use crate::TriageResult;
use std::path::PathBuf;
use std::sync::Arc;

/// Configuration shared by every case in a session.
#[derive(Clone, Debug)]
pub struct TriageConfig {
    catalog: Arc<SymptomCatalog>,
    flight: FlightContext,
    patient: PatientContext,
}

impl TriageConfig {
    pub fn new(catalog: SymptomCatalog, flight: FlightContext, patient: PatientContext) -> Self {
        Self {
            catalog: Arc::new(catalog),
            flight,
            patient,
        }
    }

    pub fn catalog(&self) -> &SymptomCatalog {
        &self.catalog
    }

    pub fn flight(&self) -> &FlightContext {
        &self.flight
    }

    pub fn patient(&self) -> &PatientContext {
        &self.patient
    }

    /// Starts a session: a case manager with an empty case log over this catalog.
    pub fn case_manager(&self) -> CaseManager {
        CaseManager::new(Arc::clone(&self.catalog))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Builds the flight context from optional raw values.
///
/// `None` or blank values fall back to the defaults.
pub fn flight_context_from_env_values(
    flight_number: Option<String>,
    aircraft: Option<String>,
) -> FlightContext {
    let defaults = FlightContext::default();
    FlightContext {
        flight_number: non_blank(flight_number).unwrap_or(defaults.flight_number),
        aircraft: non_blank(aircraft).unwrap_or(defaults.aircraft),
    }
}

/// Resolves the symptom catalog.
///
/// If `path` is `None` or blank the built-in catalog is used; otherwise the YAML file at
/// `path` is loaded.
pub fn catalog_from_env_value(path: Option<String>) -> TriageResult<SymptomCatalog> {
    match non_blank(path) {
        Some(path) => SymptomCatalog::load(&PathBuf::from(path)),
        None => SymptomCatalog::builtin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TriageError;
    use std::io::Write;

    #[test]
    fn test_flight_context_defaults_for_missing_or_blank() {
        let ctx = flight_context_from_env_values(None, Some("   ".into()));
        assert_eq!(ctx, FlightContext::default());
    }

    #[test]
    fn test_flight_context_uses_trimmed_values() {
        let ctx = flight_context_from_env_values(Some(" SV789 ".into()), Some("A330".into()));
        assert_eq!(ctx.flight_number, "SV789");
        assert_eq!(ctx.aircraft, "A330");
    }

    #[test]
    fn test_catalog_defaults_when_unset() {
        let catalog = catalog_from_env_value(None).unwrap();
        assert_eq!(catalog.len(), SymptomCatalog::builtin().unwrap().len());

        let catalog = catalog_from_env_value(Some("".into())).unwrap();
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn test_catalog_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "- id: n\n  name: nausea").unwrap();

        let value = file.path().to_string_lossy().into_owned();
        let catalog = catalog_from_env_value(Some(value)).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_from_missing_path() {
        let result = catalog_from_env_value(Some("/nonexistent/flydoc/catalog.yaml".into()));
        assert!(matches!(result, Err(TriageError::FileRead(_))));
    }

    #[test]
    fn test_case_managers_share_catalog_but_not_logs() {
        let cfg = TriageConfig::new(
            SymptomCatalog::builtin().unwrap(),
            FlightContext::default(),
            PatientContext::default(),
        );
        let mut a = cfg.case_manager();
        let b = cfg.case_manager();

        let case = a.create(&["1"]).unwrap();
        a.save(case).unwrap();

        assert_eq!(a.store().len(), 1);
        assert!(b.store().is_empty());
        assert_eq!(a.catalog().len(), b.catalog().len());
    }
}
