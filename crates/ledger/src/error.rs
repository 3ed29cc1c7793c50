//! The module contains the errors the ledger store can throw.
//!
//! Storage failures ([`Io`] and [`Csv`]) are fatal for the calling operation.
//! [`InvalidAmount`] and [`InvalidCategory`] come from parsing user input or a
//! corrupt ledger file.
//!
//!  [`Io`]: LedgerError::Io
//!  [`Csv`]: LedgerError::Csv
//!  [`InvalidAmount`]: LedgerError::InvalidAmount
//!  [`InvalidCategory`]: LedgerError::InvalidCategory
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid category: \"{0}\"")]
    InvalidCategory(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidCategory(a), Self::InvalidCategory(b)) => a == b,
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
