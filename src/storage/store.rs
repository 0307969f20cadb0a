use std::cell::Cell;
use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{
    build_summary, CommunicationMessage, FinanceSummary, Participant, ParticipantId,
    ParticipantInput, PaymentInput, Poll, FUNDRAISING_GOAL,
};

use super::seed;

/// Simulated request latency. The prototype stalls every call by roughly a
/// network round-trip; imports take a little longer. Tests run with
/// [`StoreConfig::no_delay`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub request_delay: Duration,
    pub import_delay: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_millis(450),
            import_delay: Duration::from_millis(600),
        }
    }
}

impl StoreConfig {
    /// Turn the simulated latency into a no-op.
    pub fn no_delay() -> Self {
        Self {
            request_delay: Duration::ZERO,
            import_delay: Duration::ZERO,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Only produced when armed via [`LedgerStore::fail_next_request`];
    /// unprovoked operations always succeed.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// In-memory repository for the committee panel: participants, the running
/// poll and the communication queue.
///
/// Reads return clones, so callers can never mutate store state through a
/// result. Mutations take `&mut self`; exclusive access is the borrow
/// checker's job, not a lock's. A caller embedding the store in a
/// multi-threaded context must bring its own mutual exclusion.
pub struct LedgerStore {
    config: StoreConfig,
    participants: Vec<Participant>,
    poll: Poll,
    feed: Vec<CommunicationMessage>,
    // One-shot injected fault, consumed by the next operation (reads
    // included, hence the Cell).
    fault: Cell<Option<String>>,
}

impl LedgerStore {
    /// Empty store: no participants, no queued messages, the default poll.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            participants: Vec::new(),
            poll: seed::poll(),
            feed: Vec::new(),
            fault: Cell::new(None),
        }
    }

    /// Store preloaded with the demo campaign dataset.
    pub fn seeded(config: StoreConfig) -> Self {
        Self {
            config,
            participants: seed::participants(),
            poll: seed::poll(),
            feed: seed::communication_queue(),
            fault: Cell::new(None),
        }
    }

    /// Arm a one-shot fault: the next operation returns
    /// [`StoreError::Unavailable`] without touching state.
    pub fn fail_next_request(&mut self, reason: impl Into<String>) {
        self.fault.set(Some(reason.into()));
    }

    /// Finance summary recomputed from current participant state. Nothing is
    /// cached; two back-to-back calls may differ only in `last_updated`.
    pub async fn finance_summary(&self) -> Result<FinanceSummary, StoreError> {
        self.simulate_request().await?;
        Ok(build_summary(&self.participants, FUNDRAISING_GOAL, Utc::now()))
    }

    /// All participants, insertion order preserved.
    pub async fn participants(&self) -> Result<Vec<Participant>, StoreError> {
        self.simulate_request().await?;
        Ok(self.participants.clone())
    }

    /// The running poll, with `total_votes` refreshed from the option counts.
    pub async fn poll(&self) -> Result<Poll, StoreError> {
        self.simulate_request().await?;
        let mut poll = self.poll.clone();
        poll.total_votes = poll.tally();
        Ok(poll)
    }

    /// The communication queue, insertion order preserved.
    pub async fn communication_feed(&self) -> Result<Vec<CommunicationMessage>, StoreError> {
        self.simulate_request().await?;
        Ok(self.feed.clone())
    }

    /// Append a participant built from `input`. Inputs are taken as given:
    /// validation belongs to the caller (see `application::PanelService`).
    pub async fn add_participant(
        &mut self,
        input: ParticipantInput,
    ) -> Result<Participant, StoreError> {
        self.simulate_request().await?;
        let participant = Participant::from_input(input);
        info!(id = %participant.id, name = %participant.name, "participant added");
        self.participants.push(participant.clone());
        Ok(participant)
    }

    /// Batch [`LedgerStore::add_participant`]. The whole batch lands in one
    /// `extend`, so callers never observe a partially applied import.
    pub async fn import_participants(
        &mut self,
        inputs: Vec<ParticipantInput>,
    ) -> Result<Vec<Participant>, StoreError> {
        self.simulate_import().await?;
        let imported: Vec<Participant> = inputs
            .into_iter()
            .map(Participant::from_input)
            .collect();
        self.participants.extend(imported.iter().cloned());
        info!(count = imported.len(), "participants imported");
        Ok(imported)
    }

    /// Append a payment to the given participant's history and re-derive the
    /// status. `Ok(None)` when the id is unknown; the store is left
    /// untouched in that case.
    pub async fn record_payment(
        &mut self,
        id: ParticipantId,
        payment: PaymentInput,
    ) -> Result<Option<Participant>, StoreError> {
        self.simulate_request().await?;
        let Some(participant) = self
            .participants
            .iter_mut()
            .find(|participant| participant.id == id)
        else {
            debug!(%id, "payment for unknown participant");
            return Ok(None);
        };

        participant.record_entry(payment);
        info!(%id, status = %participant.status, "payment recorded");
        Ok(Some(participant.clone()))
    }

    async fn simulate_request(&self) -> Result<(), StoreError> {
        self.pause(self.config.request_delay).await;
        self.take_fault()
    }

    async fn simulate_import(&self) -> Result<(), StoreError> {
        self.pause(self.config.import_delay).await;
        self.take_fault()
    }

    async fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn take_fault(&self) -> Result<(), StoreError> {
        match self.fault.take() {
            Some(reason) => Err(StoreError::Unavailable(reason)),
            None => Ok(()),
        }
    }
}
