use anyhow::Result;
use std::io::Read;

use crate::application::PanelService;
use crate::domain::{parse_reais, ParticipantInput};

/// Result of an import operation
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Rows accepted (and stored, unless this was a dry run)
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<ImportRowError>,
}

/// Error that occurred on a single CSV row
#[derive(Debug, Clone)]
pub struct ImportRowError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

/// Options for import operations
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Validate and report without storing anything
    pub dry_run: bool,
}

/// Loads participants into the panel from CSV.
///
/// Expected layout: `name,value,whatsapp` with a header row. `value` is a
/// Brazilian-formatted amount ("1.200,00" or "1200"); `whatsapp` may be
/// empty. Imported participants start with an empty payment history.
pub struct Importer<'a> {
    service: &'a mut PanelService,
}

impl<'a> Importer<'a> {
    pub fn new(service: &'a mut PanelService) -> Self {
        Self { service }
    }

    /// Parse rows, collecting line-addressed errors. Bad rows are skipped;
    /// the valid rows go to the store as a single batch.
    pub async fn import_participants_csv<R: Read>(
        &mut self,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportReport> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows: Vec<ParticipantInput> = Vec::new();
        let mut skipped = 0;
        let mut errors = Vec::new();

        for (line_num, result) in csv_reader.records().enumerate() {
            let line = line_num + 2; // +2 for header and 0-indexing

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    errors.push(ImportRowError {
                        line,
                        field: None,
                        error: format!("CSV parse error: {}", e),
                    });
                    skipped += 1;
                    continue;
                }
            };

            let name = record.get(0).unwrap_or("").trim();
            if name.is_empty() {
                errors.push(ImportRowError {
                    line,
                    field: Some("name".to_string()),
                    error: "name is required".to_string(),
                });
                skipped += 1;
                continue;
            }

            let value = match parse_reais(record.get(1).unwrap_or("")) {
                Ok(value) if value > 0 => value,
                Ok(value) => {
                    errors.push(ImportRowError {
                        line,
                        field: Some("value".to_string()),
                        error: format!("value must be positive, got {}", value),
                    });
                    skipped += 1;
                    continue;
                }
                Err(e) => {
                    errors.push(ImportRowError {
                        line,
                        field: Some("value".to_string()),
                        error: format!("Invalid value: {}", e),
                    });
                    skipped += 1;
                    continue;
                }
            };

            let whatsapp = record.get(2).and_then(|s| {
                let s = s.trim();
                if s.is_empty() {
                    None
                } else {
                    Some(s.to_string())
                }
            });

            rows.push(ParticipantInput {
                name: name.to_string(),
                value,
                whatsapp,
                history: Vec::new(),
            });
        }

        let imported = rows.len();
        if !options.dry_run && !rows.is_empty() {
            self.service.import_participants(rows).await?;
        }

        Ok(ImportReport {
            imported,
            skipped,
            errors,
        })
    }
}
