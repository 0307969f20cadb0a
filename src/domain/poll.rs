use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::br_date;

pub type PollId = Uuid;
pub type PollOptionId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollOption {
    pub id: PollOptionId,
    pub label: String,
    pub votes: u32,
}

impl PollOption {
    pub fn new(label: impl Into<String>, votes: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            votes,
        }
    }
}

/// A single running poll. `total_votes` is a denormalized field refreshed
/// from [`Poll::tally`] on every read, so it can never drift from the
/// per-option counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    pub id: PollId,
    pub question: String,
    pub options: Vec<PollOption>,
    #[serde(with = "br_date")]
    pub closes_at: NaiveDate,
    pub total_votes: u32,
}

impl Poll {
    pub fn new(question: impl Into<String>, closes_at: NaiveDate, options: Vec<PollOption>) -> Self {
        let mut poll = Self {
            id: Uuid::new_v4(),
            question: question.into(),
            options,
            closes_at,
            total_votes: 0,
        };
        poll.total_votes = poll.tally();
        poll
    }

    /// Sum of all option vote counts.
    pub fn tally(&self) -> u32 {
        self.options.iter().map(|option| option.votes).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_sums_option_votes() {
        let poll = Poll::new(
            "Qual banda devemos contratar para a festa?",
            NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            vec![
                PollOption::new("Banda Aurora", 38),
                PollOption::new("DJ Set Formandos", 22),
                PollOption::new("Grupo Samba&Som", 17),
            ],
        );
        assert_eq!(poll.tally(), 77);
        assert_eq!(poll.total_votes, 77);
    }

    #[test]
    fn test_tally_empty_poll() {
        let poll = Poll::new(
            "Sem opções?",
            NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            Vec::new(),
        );
        assert_eq!(poll.tally(), 0);
    }
}
