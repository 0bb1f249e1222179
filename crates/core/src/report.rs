//! Report compilation for downstream handoff.
//!
//! A [`Report`] owns a copy of the case taken at compile time together with the flight and
//! patient context supplied by the caller. Saving or dropping the originating case later
//! has no effect on a report already issued.

use crate::case::Case;
use crate::constants::{
    DEFAULT_AIRCRAFT, DEFAULT_FLIGHT_NUMBER, DEFAULT_PATIENT_CONDITION, NOT_SPECIFIED,
    REPORT_ACTIONS_TAKEN, REPORT_NARRATIVE, REPORT_RECOMMENDATIONS,
};
use serde::Serialize;

/// Static flight metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlightContext {
    pub flight_number: String,
    pub aircraft: String,
}

impl Default for FlightContext {
    fn default() -> Self {
        Self {
            flight_number: DEFAULT_FLIGHT_NUMBER.into(),
            aircraft: DEFAULT_AIRCRAFT.into(),
        }
    }
}

/// Static patient metadata. Details not captured are recorded as "not specified".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientContext {
    pub age: String,
    pub sex: String,
    pub seat: String,
    pub condition: String,
}

impl Default for PatientContext {
    fn default() -> Self {
        Self {
            age: NOT_SPECIFIED.into(),
            sex: NOT_SPECIFIED.into(),
            seat: NOT_SPECIFIED.into(),
            condition: DEFAULT_PATIENT_CONDITION.into(),
        }
    }
}

/// Immutable compiled snapshot of a case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Report {
    case: Case,
    flight: FlightContext,
    patient: PatientContext,
    actions_taken: &'static str,
    recommendations: &'static str,
    narrative: &'static str,
}

impl Report {
    /// The case as it was when the report was compiled.
    pub fn case(&self) -> &Case {
        &self.case
    }

    pub fn flight(&self) -> &FlightContext {
        &self.flight
    }

    pub fn patient(&self) -> &PatientContext {
        &self.patient
    }

    pub fn actions_taken(&self) -> &str {
        self.actions_taken
    }

    pub fn recommendations(&self) -> &str {
        self.recommendations
    }

    /// Notes for the ground medical team.
    pub fn narrative(&self) -> &str {
        self.narrative
    }
}

/// Report compilation.
///
/// This is a zero-sized type used for namespacing; it holds no state.
pub struct ReportCompiler;

impl ReportCompiler {
    /// Compiles a report from an active or completed case.
    ///
    /// The symptoms, severity, id and timestamps are copied verbatim.
    pub fn compile(case: &Case, flight: &FlightContext, patient: &PatientContext) -> Report {
        tracing::debug!("compiled report for {} case {}", case.status(), case.id());
        Report {
            case: case.clone(),
            flight: flight.clone(),
            patient: patient.clone(),
            actions_taken: REPORT_ACTIONS_TAKEN,
            recommendations: REPORT_RECOMMENDATIONS,
            narrative: REPORT_NARRATIVE,
        }
    }
}
