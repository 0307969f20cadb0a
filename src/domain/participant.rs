use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::br_date;
use super::Cents;

pub type ParticipantId = Uuid;
pub type EntryId = Uuid;

/// Payment standing, in the committee's own vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentStatus {
    /// Paid
    Pago,
    /// Overdue
    Atrasado,
    /// Current / in good standing (distinct from fully paid)
    #[serde(rename = "Em dia")]
    EmDia,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pago => "Pago",
            PaymentStatus::Atrasado => "Atrasado",
            PaymentStatus::EmDia => "Em dia",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pago" => Some(PaymentStatus::Pago),
            "atrasado" => Some(PaymentStatus::Atrasado),
            "em dia" => Some(PaymentStatus::EmDia),
            _ => None,
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One installment in a participant's payment history. Entries are immutable
/// once created; corrections happen by appending new entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentHistoryEntry {
    pub id: EntryId,
    #[serde(with = "br_date")]
    pub date: NaiveDate,
    pub amount: Cents,
    pub status: PaymentStatus,
    /// Payment method (e.g. "PIX", "Boleto")
    pub method: Option<String>,
    pub note: Option<String>,
}

/// Caller-side payment data; the store assigns the entry id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    #[serde(with = "br_date")]
    pub date: NaiveDate,
    pub amount: Cents,
    pub status: PaymentStatus,
    pub method: Option<String>,
    pub note: Option<String>,
}

impl PaymentInput {
    pub fn new(date: NaiveDate, amount: Cents, status: PaymentStatus) -> Self {
        Self {
            date,
            amount,
            status,
            method: None,
            note: None,
        }
    }

    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn into_entry(self) -> PaymentHistoryEntry {
        PaymentHistoryEntry {
            id: Uuid::new_v4(),
            date: self.date,
            amount: self.amount,
            status: self.status,
            method: self.method,
            note: self.note,
        }
    }
}

/// Caller-side participant data; ids and the derived status are assigned at
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantInput {
    pub name: String,
    pub value: Cents,
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub history: Vec<PaymentInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Always derived from `history`, never set by callers.
    pub status: PaymentStatus,
    /// Pledged value for the whole campaign, in cents.
    pub value: Cents,
    pub whatsapp: Option<String>,
    pub history: Vec<PaymentHistoryEntry>,
}

impl Participant {
    /// Build a participant from caller input. Ids are freshly generated for
    /// the participant and every supplied history entry; the status comes
    /// from [`derive_status`], whatever the caller may think it is.
    pub fn from_input(input: ParticipantInput) -> Self {
        let history: Vec<PaymentHistoryEntry> = input
            .history
            .into_iter()
            .map(PaymentInput::into_entry)
            .collect();
        let status = derive_status(&history);
        Self {
            id: Uuid::new_v4(),
            name: input.name,
            status,
            value: input.value,
            whatsapp: input.whatsapp,
            history,
        }
    }

    /// Append a payment and re-derive the status.
    pub fn record_entry(&mut self, payment: PaymentInput) {
        self.history.push(payment.into_entry());
        self.status = derive_status(&self.history);
    }
}

/// Status policy: an empty history is overdue. Otherwise the entry with the
/// latest date decides; a paid latest installment puts the participant in
/// good standing ("Em dia") rather than fully paid, and any other latest
/// status is propagated as-is. With equal dates the earlier entry wins.
pub fn derive_status(history: &[PaymentHistoryEntry]) -> PaymentStatus {
    let mut latest: Option<&PaymentHistoryEntry> = None;
    for entry in history {
        match latest {
            Some(current) if entry.date <= current.date => {}
            _ => latest = Some(entry),
        }
    }

    match latest {
        None => PaymentStatus::Atrasado,
        Some(entry) if entry.status == PaymentStatus::Pago => PaymentStatus::EmDia,
        Some(entry) => entry.status,
    }
}
