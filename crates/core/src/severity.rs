//! Severity classification.
//!
//! Rules, first match wins:
//! 1. any symptom on the critical list gives [`Severity::Critical`], whatever the count
//! 2. otherwise [`MODERATE_SYMPTOM_THRESHOLD`] or more distinct symptoms give
//!    [`Severity::Moderate`]
//! 3. otherwise [`Severity::Mild`]

use crate::constants::{CRITICAL_SYMPTOMS, MODERATE_SYMPTOM_THRESHOLD};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;

/// Severity tier assigned once per case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns true if `name` is on the fixed critical list.
pub fn is_critical(name: &str) -> bool {
    CRITICAL_SYMPTOMS.contains(&name)
}

/// Returns true if any of `symptoms` is on the fixed critical list.
pub fn has_critical<I, S>(symptoms: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    symptoms.into_iter().any(|s| is_critical(s.as_ref()))
}

/// Classifies a set of symptom names.
///
/// Duplicate names count once. Callers are expected to pass a non-empty set; an empty one
/// classifies as [`Severity::Mild`].
pub fn classify<I, S>(symptoms: I) -> Severity
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let distinct: BTreeSet<String> = symptoms
        .into_iter()
        .map(|s| s.as_ref().to_owned())
        .collect();

    let severity = if has_critical(&distinct) {
        Severity::Critical
    } else if distinct.len() >= MODERATE_SYMPTOM_THRESHOLD {
        Severity::Moderate
    } else {
        Severity::Mild
    };

    tracing::debug!(
        "classified {} distinct symptoms as {}",
        distinct.len(),
        severity
    );
    severity
}
