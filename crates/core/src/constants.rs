//! Fixed business rules and static text used across the core.

/// Symptom names that force the critical tier and the critical pathway.
pub const CRITICAL_SYMPTOMS: [&str; 4] = [
    "fainting",
    "shortness of breath",
    "chest pain",
    "seizures",
];

/// Number of distinct non-critical symptoms at which a case becomes moderate.
pub const MODERATE_SYMPTOM_THRESHOLD: usize = 3;

/// Upper bound on the length of a catalog symptom id.
pub const MAX_SYMPTOM_ID_LEN: usize = 64;

/// Flight number used when none is configured.
pub const DEFAULT_FLIGHT_NUMBER: &str = "SV123";

/// Aircraft type used when none is configured.
pub const DEFAULT_AIRCRAFT: &str = "Boeing 777";

/// Placeholder for patient details that were not captured.
pub const NOT_SPECIFIED: &str = "not specified";

/// Default recorded patient condition.
pub const DEFAULT_PATIENT_CONDITION: &str = "conscious and responsive";

/// Actions line carried by every report.
pub const REPORT_ACTIONS_TAKEN: &str = "approved medical protocol followed";

/// Recommendations line carried by every report.
pub const REPORT_RECOMMENDATIONS: &str = "continuous monitoring of the condition";

/// Notes for the ground medical team carried by every report.
pub const REPORT_NARRATIVE: &str = "The case was handled in accordance with approved medical \
protocols. A comprehensive medical examination is recommended on arrival. All symptoms and \
actions are documented in this report.";

/// Shown alongside every guidance pathway.
pub const REASSESS_NOTE: &str = "If the patient's condition worsens or new symptoms appear, \
reassess immediately and notify the captain.";
