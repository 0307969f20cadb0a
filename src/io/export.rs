use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::PanelService;
use crate::domain::{format_br_date, FinanceSummary, Participant};

/// Panel snapshot for full JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub participants: Vec<Participant>,
    pub summary: FinanceSummary,
}

/// Exporter for converting panel data to various formats
pub struct Exporter<'a> {
    service: &'a PanelService,
}

impl<'a> Exporter<'a> {
    pub fn new(service: &'a PanelService) -> Self {
        Self { service }
    }

    /// Export participants to CSV format
    pub async fn export_participants_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let participants = self.service.participants().await?;
        let mut csv_writer = csv::Writer::from_writer(writer);

        // Write header
        csv_writer.write_record([
            "id",
            "name",
            "status",
            "value_cents",
            "whatsapp",
            "entries",
            "last_payment",
        ])?;

        let mut count = 0;
        for participant in &participants {
            let last_payment = participant
                .history
                .iter()
                .map(|entry| entry.date)
                .max()
                .map(format_br_date)
                .unwrap_or_default();

            csv_writer.write_record([
                participant.id.to_string(),
                participant.name.clone(),
                participant.status.to_string(),
                participant.value.to_string(),
                participant.whatsapp.clone().unwrap_or_default(),
                participant.history.len().to_string(),
                last_payment,
            ])?;
            count += 1;
        }

        csv_writer.flush()?;
        Ok(count)
    }

    /// Export participants as JSON
    pub async fn export_participants_json<W: Write>(&self, writer: W) -> Result<()> {
        let participants = self.service.participants().await?;
        serde_json::to_writer_pretty(writer, &participants)?;
        Ok(())
    }

    /// Export the finance summary as JSON
    pub async fn export_summary_json<W: Write>(&self, writer: W) -> Result<()> {
        let summary = self.service.finance_summary().await?;
        serde_json::to_writer_pretty(writer, &summary)?;
        Ok(())
    }

    /// Export the full panel snapshot as JSON
    pub async fn export_snapshot_json<W: Write>(&self, writer: W) -> Result<()> {
        let snapshot = PanelSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            participants: self.service.participants().await?,
            summary: self.service.finance_summary().await?,
        };
        serde_json::to_writer_pretty(writer, &snapshot)?;
        Ok(())
    }
}
