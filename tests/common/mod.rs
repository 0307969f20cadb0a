// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::NaiveDate;
use formagil::application::PanelService;
use formagil::domain::{parse_br_date, Cents, ParticipantInput, PaymentInput, PaymentStatus};
use formagil::storage::StoreConfig;

/// Service over the demo dataset, latency disabled
pub fn seeded_service() -> PanelService {
    PanelService::seeded(StoreConfig::no_delay())
}

/// Service over an empty store, latency disabled
pub fn empty_service() -> PanelService {
    PanelService::empty(StoreConfig::no_delay())
}

/// Parse a dd/mm/yyyy fixture date
pub fn date(raw: &str) -> NaiveDate {
    parse_br_date(raw).unwrap()
}

/// Input with no payment history
pub fn plain_participant(name: &str, value: Cents) -> ParticipantInput {
    ParticipantInput {
        name: name.into(),
        value,
        whatsapp: None,
        history: Vec::new(),
    }
}

/// Input with the given `(date, amount, status)` history entries
pub fn participant_with_history(
    name: &str,
    value: Cents,
    entries: &[(&str, Cents, PaymentStatus)],
) -> ParticipantInput {
    ParticipantInput {
        name: name.into(),
        value,
        whatsapp: None,
        history: entries
            .iter()
            .map(|(raw, amount, status)| PaymentInput::new(date(raw), *amount, *status))
            .collect(),
    }
}

/// A Pago payment on the given date
pub fn paid_entry(raw: &str, amount: Cents) -> PaymentInput {
    PaymentInput::new(date(raw), amount, PaymentStatus::Pago)
}
