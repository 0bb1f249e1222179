//! # FlyDoc Core
//!
//! Decision and lifecycle logic for in-flight medical triage:
//! - symptom catalog lookup ([`catalog`])
//! - severity classification ([`severity`])
//! - case creation and completion ([`case`])
//! - guidance pathways ([`guidance`])
//! - report compilation ([`report`])
//! - the append-only case log ([`store`])
//!
//! Typical flow: resolve a [`TriageConfig`], start a session with
//! [`TriageConfig::case_manager`], `create` a case from selected symptom ids, request
//! guidance and a report as often as needed, then `save` the case into the log.
//!
//! **No presentation concerns**: rendering, printing and transmission belong to callers
//! such as `flydoc-cli`.

pub mod case;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod error;
pub mod guidance;
pub mod report;
pub mod severity;
pub mod store;
pub mod validation;

pub use case::{Case, CaseManager, CaseStatus};
pub use catalog::{Symptom, SymptomCatalog};
pub use config::TriageConfig;
pub use error::{TriageError, TriageResult};
pub use guidance::{Guidance, GuidanceGenerator, GuidanceStep, Pathway};
pub use report::{FlightContext, PatientContext, Report, ReportCompiler};
pub use severity::{classify, Severity};
pub use store::CaseStore;

pub use flydoc_uuid::CaseId;
