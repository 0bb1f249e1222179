//! The static symptom registry.
//!
//! A catalog is an ordered list of symptoms loaded once at startup. It is never mutated
//! afterwards; cases resolve the ids of a selection against it.

use crate::severity::is_critical;
use crate::validation::validate_symptom_id;
use crate::{TriageError, TriageResult};
use flydoc_types::NonEmptyText;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A catalog-registered observation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Symptom {
    id: NonEmptyText,
    name: NonEmptyText,
    critical: bool,
}

impl Symptom {
    pub fn new(id: &str, name: &str, critical: bool) -> TriageResult<Self> {
        let id = NonEmptyText::new(id)?;
        validate_symptom_id(id.as_str())?;
        Ok(Self {
            id,
            name: NonEmptyText::new(name)?,
            critical,
        })
    }

    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Catalog flag marking the symptom as critical. A catalog only accepts symptoms whose
    /// flag matches [`CRITICAL_SYMPTOMS`](crate::constants::CRITICAL_SYMPTOMS).
    pub fn critical(&self) -> bool {
        self.critical
    }
}

/// Ordered, immutable registry of known symptoms.
#[derive(Clone, Debug)]
pub struct SymptomCatalog {
    symptoms: Vec<Symptom>,
}

/// On-disk shape of one catalog entry.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SymptomWire {
    id: String,
    name: String,
    #[serde(default)]
    critical: bool,
}

impl SymptomCatalog {
    /// Builds a catalog from an ordered list of symptoms.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::InvalidInput`] if the list is empty, an id or name repeats, or
    /// a `critical` flag disagrees with [`CRITICAL_SYMPTOMS`](crate::constants::CRITICAL_SYMPTOMS).
    pub fn new(symptoms: Vec<Symptom>) -> TriageResult<Self> {
        if symptoms.is_empty() {
            return Err(TriageError::InvalidInput(
                "symptom catalog cannot be empty".into(),
            ));
        }

        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for symptom in &symptoms {
            if !ids.insert(symptom.id()) {
                return Err(TriageError::InvalidInput(format!(
                    "duplicate symptom id in catalog: {}",
                    symptom.id()
                )));
            }
            if !names.insert(symptom.name()) {
                return Err(TriageError::InvalidInput(format!(
                    "duplicate symptom name in catalog: {}",
                    symptom.name()
                )));
            }
            if symptom.critical() != is_critical(symptom.name()) {
                return Err(TriageError::InvalidInput(format!(
                    "symptom '{}' has critical flag {} but the critical list says {}",
                    symptom.name(),
                    symptom.critical(),
                    is_critical(symptom.name())
                )));
            }
        }

        Ok(Self { symptoms })
    }

    /// Parses a catalog from YAML: a sequence of `{id, name, critical}` mappings.
    ///
    /// Schema errors carry the path of the offending field (for example `[2].name`).
    pub fn from_yaml(yaml_text: &str) -> TriageResult<Self> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        let wire: Vec<SymptomWire> = serde_path_to_error::deserialize(deserializer).map_err(
            |err| {
                let path = err.path().to_string();
                let path = if path.is_empty() || path == "." {
                    "<root>".to_string()
                } else {
                    path
                };
                TriageError::CatalogSchema {
                    path,
                    source: err.into_inner(),
                }
            },
        )?;

        let symptoms = wire
            .into_iter()
            .map(|w| Symptom::new(&w.id, &w.name, w.critical))
            .collect::<TriageResult<Vec<_>>>()?;

        Self::new(symptoms)
    }

    /// Reads and parses a YAML catalog file.
    pub fn load(path: &Path) -> TriageResult<Self> {
        let text = std::fs::read_to_string(path).map_err(TriageError::FileRead)?;
        let catalog = Self::from_yaml(&text)?;
        tracing::info!(
            "loaded {} symptoms from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Looks up a symptom by id.
    pub fn get(&self, id: &str) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id() == id)
    }

    /// All symptoms in catalog order.
    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

impl SymptomCatalog {
    /// The built-in in-flight catalog.
    pub fn builtin() -> TriageResult<Self> {
        const ENTRIES: [(&str, &str); 8] = [
            ("1", "headache"),
            ("2", "fainting"),
            ("3", "shortness of breath"),
            ("4", "chest pain"),
            ("5", "high fever"),
            ("6", "dizziness"),
            ("7", "vomiting"),
            ("8", "seizures"),
        ];

        let symptoms = ENTRIES
            .iter()
            .map(|(id, name)| Symptom::new(id, name, is_critical(name)))
            .collect::<TriageResult<Vec<_>>>()?;

        Self::new(symptoms)
    }
}
