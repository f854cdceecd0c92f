use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Payment declined: {0}")]
    PaymentDeclined(String),
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

pub type Result<T> = std::result::Result<T, OrderError>;
