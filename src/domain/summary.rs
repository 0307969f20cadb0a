use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::dates::br_date;
use super::{Cents, Participant, PaymentHistoryEntry, PaymentStatus};

/// Campaign-wide fundraising goal: R$ 85.000,00.
pub const FUNDRAISING_GOAL: Cents = 8_500_000;

/// How many recent payments a summary carries.
const LATEST_PAYMENTS_LIMIT: usize = 5;

/// Due date of the next installment, fixed for the campaign.
pub fn next_deadline() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 15).expect("campaign deadline is a valid date")
}

/// Aggregated finance view. Recomputed from participant state on every read,
/// never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub total_goal: Cents,
    pub collected: Cents,
    /// Goal minus collected, floored at zero.
    pub pending: Cents,
    #[serde(with = "br_date")]
    pub next_deadline: NaiveDate,
    pub last_updated: DateTime<Utc>,
    /// Collected divided by goal, rounded to 2 decimals (a fraction, not
    /// a 0-100 value; the name follows the committee's spreadsheet).
    pub fulfilled_percentage: f64,
    /// Up to 5 newest payments across all participants, date descending.
    pub latest_payments: Vec<PaymentHistoryEntry>,
}

/// Sum of all entries marked Pago, across every participant.
pub fn collected_total(participants: &[Participant]) -> Cents {
    participants.iter().fold(0, |total, participant| {
        let paid: Cents = participant
            .history
            .iter()
            .filter(|entry| entry.status == PaymentStatus::Pago)
            .map(|entry| entry.amount)
            .sum();
        total + paid
    })
}

/// All history entries across participants, newest first, capped at `limit`.
/// Each entry's note is rewritten to "{name} - {status}" so the summary view
/// can show who paid without a second lookup.
pub fn latest_payments(participants: &[Participant], limit: usize) -> Vec<PaymentHistoryEntry> {
    let mut entries: Vec<PaymentHistoryEntry> = participants
        .iter()
        .flat_map(|participant| {
            participant.history.iter().map(|entry| {
                let mut entry = entry.clone();
                entry.note = Some(format!("{} - {}", participant.name, entry.status));
                entry
            })
        })
        .collect();

    // Stable sort: entries sharing a date keep participant order
    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries.truncate(limit);
    entries
}

/// Recompute the whole summary from current participant state.
pub fn build_summary(participants: &[Participant], goal: Cents, now: DateTime<Utc>) -> FinanceSummary {
    let collected = collected_total(participants);
    let fulfilled_percentage = if goal == 0 {
        0.0
    } else {
        ((collected as f64 / goal as f64) * 100.0).round() / 100.0
    };

    FinanceSummary {
        total_goal: goal,
        collected,
        pending: (goal - collected).max(0),
        next_deadline: next_deadline(),
        last_updated: now,
        fulfilled_percentage,
        latest_payments: latest_payments(participants, LATEST_PAYMENTS_LIMIT),
    }
}
