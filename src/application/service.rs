use crate::domain::{
    CommunicationMessage, FinanceSummary, Participant, ParticipantId, ParticipantInput,
    PaymentInput, Poll,
};
use crate::storage::{LedgerStore, StoreConfig};

use super::AppError;

/// Application service for the committee panel: validates inputs before they
/// reach the store and types the store's not-found results. This is the
/// primary interface for any client (CLI, UI, tests).
pub struct PanelService {
    store: LedgerStore,
}

impl PanelService {
    pub fn new(store: LedgerStore) -> Self {
        Self { store }
    }

    /// Service over an empty store.
    pub fn empty(config: StoreConfig) -> Self {
        Self::new(LedgerStore::new(config))
    }

    /// Service over the demo campaign dataset.
    pub fn seeded(config: StoreConfig) -> Self {
        Self::new(LedgerStore::seeded(config))
    }

    pub async fn finance_summary(&self) -> Result<FinanceSummary, AppError> {
        Ok(self.store.finance_summary().await?)
    }

    pub async fn participants(&self) -> Result<Vec<Participant>, AppError> {
        Ok(self.store.participants().await?)
    }

    /// Look up a single participant by id.
    pub async fn participant(&self, id: ParticipantId) -> Result<Participant, AppError> {
        self.store
            .participants()
            .await?
            .into_iter()
            .find(|participant| participant.id == id)
            .ok_or(AppError::ParticipantNotFound(id))
    }

    pub async fn poll(&self) -> Result<Poll, AppError> {
        Ok(self.store.poll().await?)
    }

    pub async fn communication_feed(&self) -> Result<Vec<CommunicationMessage>, AppError> {
        Ok(self.store.communication_feed().await?)
    }

    /// Add a participant. The store performs no validation of its own, so
    /// the rejection of empty names and non-positive pledges happens here.
    pub async fn add_participant(
        &mut self,
        input: ParticipantInput,
    ) -> Result<Participant, AppError> {
        validate_input(&input)?;
        Ok(self.store.add_participant(input).await?)
    }

    /// Import a batch. Every row is validated before any row is stored, so
    /// one bad row rejects the whole batch.
    pub async fn import_participants(
        &mut self,
        inputs: Vec<ParticipantInput>,
    ) -> Result<Vec<Participant>, AppError> {
        for (index, input) in inputs.iter().enumerate() {
            validate_input(input).map_err(|source| AppError::InvalidImportRow {
                row: index + 1,
                source: Box::new(source),
            })?;
        }
        Ok(self.store.import_participants(inputs).await?)
    }

    /// Record a payment for a participant. An unknown id is a typed error at
    /// this layer; the store itself reports it as an absent result.
    pub async fn record_payment(
        &mut self,
        id: ParticipantId,
        payment: PaymentInput,
    ) -> Result<Participant, AppError> {
        if payment.amount <= 0 {
            return Err(AppError::InvalidAmount(payment.amount));
        }
        self.store
            .record_payment(id, payment)
            .await?
            .ok_or(AppError::ParticipantNotFound(id))
    }

    /// Testability hook: the next store operation fails.
    pub fn fail_next_request(&mut self, reason: impl Into<String>) {
        self.store.fail_next_request(reason);
    }
}

fn validate_input(input: &ParticipantInput) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::EmptyName);
    }
    if input.value <= 0 {
        return Err(AppError::InvalidPledge(input.value));
    }
    Ok(())
}
