use crate::case::CaseStatus;
use flydoc_uuid::CaseId;

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("a case needs at least one selected symptom")]
    InvalidSelection,
    #[error("unknown symptom id: {0}")]
    UnknownSymptomId(String),
    #[error("case {id} cannot be completed from status '{status}'")]
    InvalidTransition { id: CaseId, status: CaseStatus },
    #[error("case not found: {0}")]
    NotFound(CaseId),

    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid text: {0}")]
    Text(#[from] flydoc_types::TextError),
    #[error("failed to read symptom catalog: {0}")]
    FileRead(std::io::Error),
    #[error("symptom catalog schema mismatch at {path}: {source}")]
    CatalogSchema {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

pub type TriageResult<T> = std::result::Result<T, TriageError>;
