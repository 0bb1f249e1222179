//! Guidance pathways and the quick-reference sheet.
//!
//! Two fixed pathways exist. The critical pathway is chosen whenever the symptom set
//! contains a critical symptom; this is re-checked on every call rather than read from the
//! case's frozen severity. Steps are produced fresh each time in their fixed order.

use crate::constants::REASSESS_NOTE;
use crate::severity::{has_critical, Severity};
use serde::Serialize;
use std::fmt;

const CRITICAL_STEPS: [&str; 6] = [
    "ensure airway patency",
    "check pulse and breathing",
    "provide supplemental oxygen if available",
    "notify the flight crew immediately",
    "prepare for diversion or emergency landing if warranted",
    "monitor vital signs continuously",
];

const STANDARD_STEPS: [&str; 6] = [
    "reassure and calm patient",
    "place the patient in a comfortable position",
    "monitor symptoms and their progression",
    "offer water if the patient is conscious",
    "record symptoms and time",
    "notify the flight crew of the patient's status",
];

/// Which fixed instruction sequence applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pathway {
    Critical,
    Standard,
}

impl Pathway {
    /// Selects the pathway for a symptom set.
    pub fn for_symptoms<I, S>(symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if has_critical(symptoms) {
            Pathway::Critical
        } else {
            Pathway::Standard
        }
    }

    /// The pathway's instructions in their fixed order.
    pub fn instructions(&self) -> &'static [&'static str] {
        match self {
            Pathway::Critical => &CRITICAL_STEPS,
            Pathway::Standard => &STANDARD_STEPS,
        }
    }
}

impl fmt::Display for Pathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pathway::Critical => f.write_str("critical"),
            Pathway::Standard => f.write_str("standard"),
        }
    }
}

/// One numbered instruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GuidanceStep {
    /// Position in the pathway, starting at 1.
    pub number: usize,
    pub instruction: &'static str,
}

/// Output of [`GuidanceGenerator::generate`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Guidance {
    pub severity: Severity,
    pub pathway: Pathway,
    pub steps: Vec<GuidanceStep>,
    pub reassess_note: &'static str,
}

/// Guidance generation.
///
/// This is a zero-sized type used for namespacing; it holds no state.
pub struct GuidanceGenerator;

impl GuidanceGenerator {
    /// Produces the ordered guidance for a case's severity and symptoms.
    ///
    /// Pure: repeated calls with the same inputs yield equal output, and the inputs are only
    /// read. `severity` is echoed in the result but does not influence the pathway.
    pub fn generate<I, S>(severity: Severity, symptoms: I) -> Guidance
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let pathway = Pathway::for_symptoms(symptoms);
        tracing::debug!("selected {} pathway for {} case", pathway, severity);

        let steps = pathway
            .instructions()
            .iter()
            .enumerate()
            .map(|(i, instruction)| GuidanceStep {
                number: i + 1,
                instruction: *instruction,
            })
            .collect();

        Guidance {
            severity,
            pathway,
            steps,
            reassess_note: REASSESS_NOTE,
        }
    }
}

/// A titled group of quick-reference items.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ReferenceSection {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

const QUICK_REFERENCE: [ReferenceSection; 6] = [
    ReferenceSection {
        title: "critical emergencies",
        items: &[
            "loss of consciousness - check pulse and breathing",
            "shortness of breath - provide oxygen",
            "chest pain - seated position",
        ],
    },
    ReferenceSection {
        title: "common symptoms",
        items: &[
            "nausea and vomiting - sick bag",
            "headache - safe pain relief",
            "dizziness - lying position",
        ],
    },
    ReferenceSection {
        title: "first aid",
        items: &[
            "cardiopulmonary resuscitation",
            "using the defibrillator",
            "stopping bleeding",
        ],
    },
    ReferenceSection {
        title: "available medication",
        items: &[
            "safe pain relievers",
            "allergy medication",
            "emergency cardiac medication",
        ],
    },
    ReferenceSection {
        title: "communication",
        items: &[
            "notify the captain immediately",
            "contact air traffic control",
            "prepare a medical report",
        ],
    },
    ReferenceSection {
        title: "documentation",
        items: &[
            "record symptoms and signs",
            "document actions taken",
            "note the time and date",
        ],
    },
];

/// The static quick-reference sheet, in display order.
pub fn quick_reference() -> &'static [ReferenceSection] {
    &QUICK_REFERENCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pathway_for_headache() {
        let guidance = GuidanceGenerator::generate(Severity::Mild, ["headache"]);

        assert_eq!(guidance.pathway, Pathway::Standard);
        assert_eq!(guidance.steps.len(), 6);
        assert_eq!(guidance.steps[0].instruction, "reassure and calm patient");
    }

    #[test]
    fn test_critical_pathway_for_chest_pain() {
        let guidance = GuidanceGenerator::generate(Severity::Critical, ["chest pain"]);

        assert_eq!(guidance.pathway, Pathway::Critical);
        assert_eq!(guidance.steps.len(), 6);
        assert_eq!(guidance.steps[0].instruction, "ensure airway patency");
        assert_eq!(
            guidance.steps[5].instruction,
            "monitor vital signs continuously"
        );
    }

    #[test]
    fn test_pathway_ignores_severity_argument() {
        let guidance = GuidanceGenerator::generate(Severity::Mild, ["seizures"]);
        assert_eq!(guidance.pathway, Pathway::Critical);
        assert_eq!(guidance.severity, Severity::Mild);

        let guidance = GuidanceGenerator::generate(Severity::Critical, ["headache"]);
        assert_eq!(guidance.pathway, Pathway::Standard);
    }

    #[test]
    fn test_moderate_case_uses_standard_pathway() {
        let guidance =
            GuidanceGenerator::generate(Severity::Moderate, ["headache", "dizziness", "vomiting"]);
        assert_eq!(guidance.pathway, Pathway::Standard);
    }

    #[test]
    fn test_steps_are_numbered_from_one() {
        let guidance = GuidanceGenerator::generate(Severity::Mild, ["vomiting"]);
        let numbers: Vec<usize> = guidance.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let symptoms = vec!["fainting".to_string(), "headache".to_string()];
        let first = GuidanceGenerator::generate(Severity::Critical, &symptoms);
        let second = GuidanceGenerator::generate(Severity::Critical, &symptoms);

        assert_eq!(first, second);
        assert_eq!(symptoms, vec!["fainting", "headache"]);
    }

    #[test]
    fn test_quick_reference_sections() {
        let sections = quick_reference();
        assert_eq!(sections.len(), 6);
        assert_eq!(sections[0].title, "critical emergencies");
        assert!(sections.iter().all(|s| s.items.len() == 3));
    }
}
