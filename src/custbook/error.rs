use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum CustbookError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid page size")]
    InvalidPageSize,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CustbookError>;
