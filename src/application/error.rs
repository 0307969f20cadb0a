use thiserror::Error;

use crate::domain::{Cents, ParticipantId};
use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    #[error("Participant name cannot be empty")]
    EmptyName,

    #[error("Pledged value must be positive, got {0}")]
    InvalidPledge(Cents),

    #[error("Payment amount must be positive, got {0}")]
    InvalidAmount(Cents),

    #[error("Invalid participant in row {row}: {source}")]
    InvalidImportRow {
        row: usize,
        #[source]
        source: Box<AppError>,
    },

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
