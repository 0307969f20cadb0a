mod common;

use anyhow::Result;
use common::{empty_service, participant_with_history, seeded_service};
use formagil::domain::{PaymentStatus, FUNDRAISING_GOAL};

#[tokio::test]
async fn test_seeded_collected_matches_manual_sum() -> Result<()> {
    let service = seeded_service();
    let summary = service.finance_summary().await?;

    // Ana: 600 + 600 Pago; Bruno: 600 Pago + 600 Atrasado; Carla: 600 Pago
    // + 600 Em dia. Only Pago entries count.
    assert_eq!(summary.collected, 240_000);
    assert_eq!(summary.total_goal, FUNDRAISING_GOAL);
    assert_eq!(summary.pending, FUNDRAISING_GOAL - 240_000);
    Ok(())
}

#[tokio::test]
async fn test_collected_includes_single_participant_contribution() -> Result<()> {
    let mut service = empty_service();
    service
        .add_participant(participant_with_history(
            "Ana Souza",
            120_000,
            &[
                ("10/02/2024", 60_000, PaymentStatus::Pago),
                ("10/03/2024", 60_000, PaymentStatus::Pago),
            ],
        ))
        .await?;

    let summary = service.finance_summary().await?;
    assert_eq!(summary.collected, 120_000);
    Ok(())
}

#[tokio::test]
async fn test_pending_floored_at_zero_when_goal_exceeded() -> Result<()> {
    let mut service = empty_service();
    service
        .add_participant(participant_with_history(
            "Mega Doadora",
            FUNDRAISING_GOAL * 2,
            &[("10/02/2024", FUNDRAISING_GOAL + 50_000, PaymentStatus::Pago)],
        ))
        .await?;

    let summary = service.finance_summary().await?;
    assert!(summary.collected > summary.total_goal);
    assert_eq!(summary.pending, 0);
    Ok(())
}

#[tokio::test]
async fn test_fulfilled_fraction_for_seeded_data() -> Result<()> {
    let service = seeded_service();
    let summary = service.finance_summary().await?;

    // 240_000 / 8_500_000 = 0.0282..., rounded to two decimals
    assert_eq!(summary.fulfilled_percentage, 0.03);
    Ok(())
}

#[tokio::test]
async fn test_empty_store_summary() -> Result<()> {
    let service = empty_service();
    let summary = service.finance_summary().await?;

    assert_eq!(summary.collected, 0);
    assert_eq!(summary.pending, FUNDRAISING_GOAL);
    assert_eq!(summary.fulfilled_percentage, 0.0);
    assert!(summary.latest_payments.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_latest_payments_capped_at_five_and_sorted() -> Result<()> {
    let service = seeded_service();
    let summary = service.finance_summary().await?;

    // Six seeded entries; the oldest (Bruno, 08/02) falls off
    assert_eq!(summary.latest_payments.len(), 5);
    for window in summary.latest_payments.windows(2) {
        assert!(window[0].date >= window[1].date);
    }
    assert_eq!(
        summary.latest_payments[0].note.as_deref(),
        Some("Carla Mendes - Em dia")
    );
    Ok(())
}

#[tokio::test]
async fn test_summary_reflects_new_payment_immediately() -> Result<()> {
    let mut service = seeded_service();
    let before = service.finance_summary().await?;

    let participants = service.participants().await?;
    let bruno = participants
        .iter()
        .find(|participant| participant.name == "Bruno Lima")
        .expect("seeded participant");
    service
        .record_payment(bruno.id, common::paid_entry("15/04/2024", 60_000))
        .await?;

    let after = service.finance_summary().await?;
    assert_eq!(after.collected, before.collected + 60_000);
    assert_eq!(
        after.latest_payments[0].note.as_deref(),
        Some("Bruno Lima - Pago")
    );
    Ok(())
}

#[tokio::test]
async fn test_poll_total_votes_recomputed() -> Result<()> {
    let service = seeded_service();
    let poll = service.poll().await?;

    let manual: u32 = poll.options.iter().map(|option| option.votes).sum();
    assert_eq!(poll.total_votes, manual);
    assert_eq!(poll.total_votes, 77);
    Ok(())
}

#[tokio::test]
async fn test_communication_feed_preserves_order() -> Result<()> {
    let service = seeded_service();
    let feed = service.communication_feed().await?;

    assert_eq!(feed.len(), 2);
    assert_eq!(feed[0].title, "Cobrança parcela março");
    assert_eq!(feed[1].title, "Enquete: atrações para a festa");
    Ok(())
}
