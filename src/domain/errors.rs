use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Order not found")]
    NotFound,
    #[error("Invalid status: {0}")]
    InvalidStatus(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
