mod common;

use anyhow::Result;
use common::{empty_service, paid_entry, plain_participant, seeded_service};
use formagil::application::AppError;
use formagil::domain::{ParticipantInput, PaymentInput, PaymentStatus};
use uuid::Uuid;

#[tokio::test]
async fn test_add_participant_rejects_empty_name() -> Result<()> {
    let mut service = empty_service();

    let err = service
        .add_participant(plain_participant("", 120_000))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyName));

    // Whitespace-only is empty too
    let err = service
        .add_participant(plain_participant("   ", 120_000))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::EmptyName));

    assert!(service.participants().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_add_participant_rejects_non_positive_value() -> Result<()> {
    let mut service = empty_service();

    let err = service
        .add_participant(plain_participant("Diego Ramos", 0))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidPledge(0)));

    let err = service
        .add_participant(plain_participant("Diego Ramos", -5_000))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidPledge(-5_000)));

    Ok(())
}

#[tokio::test]
async fn test_import_rejects_whole_batch_on_one_bad_row() -> Result<()> {
    let mut service = seeded_service();
    let before = service.participants().await?.len();

    let err = service
        .import_participants(vec![
            plain_participant("Diego Ramos", 120_000),
            plain_participant("", 90_000),
            plain_participant("Elisa Prado", 90_000),
        ])
        .await
        .unwrap_err();

    match err {
        AppError::InvalidImportRow { row, source } => {
            assert_eq!(row, 2);
            assert!(matches!(*source, AppError::EmptyName));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert_eq!(service.participants().await?.len(), before);
    Ok(())
}

#[tokio::test]
async fn test_record_payment_rejects_non_positive_amount() -> Result<()> {
    let mut service = seeded_service();
    let participants = service.participants().await?;
    let ana = &participants[0];

    let err = service
        .record_payment(
            ana.id,
            PaymentInput::new(common::date("10/04/2024"), 0, PaymentStatus::Pago),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidAmount(0)));

    Ok(())
}

#[tokio::test]
async fn test_record_payment_unknown_id_is_typed_not_found() -> Result<()> {
    let mut service = seeded_service();
    let unknown = Uuid::new_v4();

    let err = service
        .record_payment(unknown, paid_entry("10/04/2024", 60_000))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::ParticipantNotFound(id) if id == unknown));

    Ok(())
}

#[tokio::test]
async fn test_participant_lookup() -> Result<()> {
    let mut service = empty_service();
    let added = service
        .add_participant(ParticipantInput {
            name: "Diego Ramos".into(),
            value: 120_000,
            whatsapp: Some("55 11 90000-0000".into()),
            history: Vec::new(),
        })
        .await?;

    let found = service.participant(added.id).await?;
    assert_eq!(found.name, "Diego Ramos");
    assert_eq!(found.whatsapp.as_deref(), Some("55 11 90000-0000"));

    let err = service.participant(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::ParticipantNotFound(_)));
    Ok(())
}

#[tokio::test]
async fn test_injected_fault_surfaces_as_store_error() -> Result<()> {
    let mut service = seeded_service();
    service.fail_next_request("backend offline");

    let err = service.finance_summary().await.unwrap_err();
    assert!(matches!(err, AppError::Store(_)));

    assert!(service.finance_summary().await.is_ok());
    Ok(())
}
