use thiserror::Error;

#[derive(Debug, Error)]
pub enum TariqError {
    #[error("not initialized: run 'tariq init'")]
    NotInitialized,

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("unknown table: {0}")]
    UnknownTable(String),

    #[error("unknown entry kind: {0} (expected 'session' or 'task')")]
    UnknownEntryKind(String),

    #[error("unknown shift: {0}")]
    UnknownShift(String),

    #[error("{table} record not found: {id}")]
    RecordNotFound { table: String, id: String },

    #[error("assignment row {0} not found")]
    AssignmentNotFound(usize),

    #[error("{kind} {index} not found in assignment row {row}")]
    EntryNotFound {
        row: usize,
        kind: String,
        index: usize,
    },

    #[error("delete request not found: {0}")]
    DeleteRequestNotFound(String),

    #[error("analysis request failed: {0}")]
    Analysis(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TariqError>;
