use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, Write};
use uuid::Uuid;

use crate::application::PanelService;
use crate::domain::{
    format_br_date, format_br_datetime, format_reais, parse_br_date, parse_reais, ParticipantId,
    ParticipantInput, PaymentInput, PaymentStatus,
};
use crate::io::{ImportOptions, Importer};
use crate::storage::StoreConfig;

/// Forma Ágil - committee treasury panel
#[derive(Parser)]
#[command(name = "formagil")]
#[command(about = "Treasury panel for a graduation-class fundraising campaign.\n\
Runs against an in-memory demo dataset, seeded fresh on every invocation.")]
#[command(version)]
pub struct Cli {
    /// Skip the simulated network latency
    #[arg(long, global = true)]
    pub no_delay: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the finance summary
    Summary,

    /// Participant management commands
    #[command(subcommand)]
    Participant(ParticipantCommands),

    /// Record a payment for a participant
    Pay {
        /// Participant ID
        id: String,

        /// Amount paid (e.g. "600" or "600,00")
        amount: String,

        /// Payment date (dd/mm/yyyy, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Entry status: Pago, Atrasado or "Em dia"
        #[arg(short, long, default_value = "Pago")]
        status: String,

        /// Payment method (e.g. PIX, Boleto)
        #[arg(short, long)]
        method: Option<String>,

        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show the running poll
    Poll,

    /// Show the communication queue
    Feed,

    /// Import participants from CSV (name,value,whatsapp)
    Import {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        /// Preview without importing
        #[arg(long)]
        dry_run: bool,
    },

    /// Export data to CSV or JSON
    Export {
        /// What to export: participants, summary, snapshot
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json (default: csv for participants, json otherwise)
        #[arg(short, long)]
        format: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ParticipantCommands {
    /// List all participants
    List,

    /// Add a new participant
    Add {
        /// Participant name
        name: String,

        /// Pledged value (e.g. "1200" or "1.200,00")
        #[arg(short, long)]
        value: String,

        /// WhatsApp handle
        #[arg(short, long)]
        whatsapp: Option<String>,
    },

    /// Show detailed participant information
    Show {
        /// Participant ID
        id: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = if self.no_delay {
            StoreConfig::no_delay()
        } else {
            StoreConfig::default()
        };
        let mut service = PanelService::seeded(config);

        match self.command {
            Commands::Summary => run_summary_command(&service).await?,

            Commands::Participant(participant_cmd) => {
                run_participant_command(&mut service, participant_cmd).await?;
            }

            Commands::Pay {
                id,
                amount,
                date,
                status,
                method,
                note,
            } => {
                let id = parse_participant_id(&id)?;
                let amount =
                    parse_reais(&amount).context("Invalid amount format. Use '600' or '600,00'")?;
                let date = match date {
                    Some(raw) => parse_br_date(&raw)?,
                    None => Utc::now().date_naive(),
                };
                let status = PaymentStatus::from_str(&status).with_context(|| {
                    format!(
                        "Invalid status '{}'. Valid statuses: Pago, Atrasado, Em dia",
                        status
                    )
                })?;

                let mut payment = PaymentInput::new(date, amount, status);
                if let Some(method) = method {
                    payment = payment.with_method(method);
                }
                if let Some(note) = note {
                    payment = payment.with_note(note);
                }

                let participant = service.record_payment(id, payment).await?;
                println!(
                    "Recorded payment: {} for {} (status now {})",
                    format_reais(amount),
                    participant.name,
                    participant.status
                );
            }

            Commands::Poll => run_poll_command(&service).await?,

            Commands::Feed => run_feed_command(&service).await?,

            Commands::Import { input, dry_run } => {
                run_import_command(&mut service, input.as_deref(), dry_run).await?;
            }

            Commands::Export {
                export_type,
                output,
                format,
            } => {
                run_export_command(&service, &export_type, output.as_deref(), format.as_deref())
                    .await?;
            }
        }

        Ok(())
    }
}

fn parse_participant_id(raw: &str) -> Result<ParticipantId> {
    Uuid::parse_str(raw).context("Invalid participant ID format (expected UUID)")
}

async fn run_summary_command(service: &PanelService) -> Result<()> {
    let summary = service.finance_summary().await?;

    println!("Resumo financeiro");
    println!("  Meta:       {}", format_reais(summary.total_goal));
    println!("  Arrecadado: {}", format_reais(summary.collected));
    println!("  Pendente:   {}", format_reais(summary.pending));
    println!("  Cumprido:   {:.0}%", summary.fulfilled_percentage * 100.0);
    println!(
        "  Próximo vencimento: {}",
        format_br_date(summary.next_deadline)
    );

    if !summary.latest_payments.is_empty() {
        println!();
        println!("Últimos pagamentos:");
        for entry in &summary.latest_payments {
            println!(
                "  {}  {:>12}  {}",
                format_br_date(entry.date),
                format_reais(entry.amount),
                entry.note.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}

async fn run_participant_command(
    service: &mut PanelService,
    cmd: ParticipantCommands,
) -> Result<()> {
    match cmd {
        ParticipantCommands::List => {
            let participants = service.participants().await?;
            if participants.is_empty() {
                println!("No participants found.");
            } else {
                println!(
                    "{:<38} {:<20} {:<10} {:>14}",
                    "ID", "NAME", "STATUS", "VALUE"
                );
                println!("{}", "-".repeat(84));
                for participant in participants {
                    println!(
                        "{:<38} {:<20} {:<10} {:>14}",
                        participant.id.to_string(),
                        participant.name,
                        participant.status.to_string(),
                        format_reais(participant.value)
                    );
                }
            }
        }

        ParticipantCommands::Add {
            name,
            value,
            whatsapp,
        } => {
            let value =
                parse_reais(&value).context("Invalid value format. Use '1200' or '1.200,00'")?;
            let participant = service
                .add_participant(ParticipantInput {
                    name,
                    value,
                    whatsapp,
                    history: Vec::new(),
                })
                .await?;
            println!(
                "Added participant: {} ({}, {})",
                participant.name,
                format_reais(participant.value),
                participant.id
            );
        }

        ParticipantCommands::Show { id } => {
            let id = parse_participant_id(&id)?;
            let participant = service.participant(id).await?;

            println!("Participante: {}", participant.name);
            println!("  ID:       {}", participant.id);
            println!("  Status:   {}", participant.status);
            println!("  Valor:    {}", format_reais(participant.value));
            if let Some(whatsapp) = &participant.whatsapp {
                println!("  WhatsApp: {}", whatsapp);
            }
            if participant.history.is_empty() {
                println!("  Sem pagamentos registrados.");
            } else {
                println!("  Histórico:");
                for entry in &participant.history {
                    println!(
                        "    {}  {:>12}  {:<10} {}",
                        format_br_date(entry.date),
                        format_reais(entry.amount),
                        entry.status.to_string(),
                        entry.method.as_deref().unwrap_or("-")
                    );
                }
            }
        }
    }

    Ok(())
}

async fn run_poll_command(service: &PanelService) -> Result<()> {
    let poll = service.poll().await?;

    println!("Enquete: {}", poll.question);
    println!("Encerra em: {}", format_br_date(poll.closes_at));
    println!();
    for option in &poll.options {
        println!("  {:<24} {:>3} votos", option.label, option.votes);
    }
    println!();
    println!("Total: {} votos", poll.total_votes);

    Ok(())
}

async fn run_feed_command(service: &PanelService) -> Result<()> {
    let feed = service.communication_feed().await?;
    if feed.is_empty() {
        println!("Communication queue is empty.");
        return Ok(());
    }

    println!(
        "{:<10} {:<18} {:<34} {:<10}",
        "CHANNEL", "SCHEDULED", "TITLE", "STATUS"
    );
    println!("{}", "-".repeat(74));
    for message in &feed {
        println!(
            "{:<10} {:<18} {:<34} {:<10}",
            message.channel.to_string(),
            format_br_datetime(message.scheduled_for),
            message.title,
            message.status.to_string()
        );
    }

    Ok(())
}

async fn run_import_command(
    service: &mut PanelService,
    input: Option<&str>,
    dry_run: bool,
) -> Result<()> {
    let options = ImportOptions { dry_run };
    let report = match input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path))?;
            Importer::new(service)
                .import_participants_csv(file, options)
                .await?
        }
        None => {
            Importer::new(service)
                .import_participants_csv(io::stdin(), options)
                .await?
        }
    };

    if dry_run {
        println!(
            "Dry run: {} row(s) would be imported, {} skipped",
            report.imported, report.skipped
        );
    } else {
        println!(
            "Imported {} participant(s), {} skipped",
            report.imported, report.skipped
        );
    }
    for error in &report.errors {
        match &error.field {
            Some(field) => println!("  line {}: {} ({})", error.line, error.error, field),
            None => println!("  line {}: {}", error.line, error.error),
        }
    }

    Ok(())
}

async fn run_export_command(
    service: &PanelService,
    export_type: &str,
    output: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    let exporter = crate::io::Exporter::new(service);

    let writer: Box<dyn Write> = match output {
        Some(path) => {
            Box::new(File::create(path).with_context(|| format!("Failed to create {}", path))?)
        }
        None => Box::new(io::stdout()),
    };

    let default_format = if export_type == "participants" {
        "csv"
    } else {
        "json"
    };
    let format = format.unwrap_or(default_format);

    match (export_type, format) {
        ("participants", "csv") => {
            let count = exporter.export_participants_csv(writer).await?;
            eprintln!("Exported {} participant(s)", count);
        }
        ("participants", "json") => exporter.export_participants_json(writer).await?,
        ("summary", "json") => exporter.export_summary_json(writer).await?,
        ("snapshot", "json") => exporter.export_snapshot_json(writer).await?,
        (export_type, format) => anyhow::bail!(
            "Unsupported export: {} as {}. Valid: participants (csv|json), summary (json), snapshot (json)",
            export_type,
            format
        ),
    }

    Ok(())
}
