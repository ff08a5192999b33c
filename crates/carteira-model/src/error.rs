use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown schema tag: {0}")]
    UnknownSchemaTag(String),
    #[error("unknown contract type: {0}")]
    UnknownContractType(String),
    #[error("invalid record id: {0}")]
    InvalidRecordId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
