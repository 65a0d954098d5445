use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeskError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: Uuid },

    #[error("source and target account are the same: {0}")]
    SameAccount(Uuid),

    #[error("account {0} is inactive")]
    InactiveAccount(Uuid),

    #[error("currency mismatch: {source_currency} -> {target_currency}")]
    CurrencyMismatch {
        source_currency: String,
        target_currency: String,
    },

    #[error("insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        requested: Decimal,
        available: Decimal,
    },

    #[error("amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("missing required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    #[error("record source unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, DeskError>;
