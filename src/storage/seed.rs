//! Demo dataset from the committee's pilot campaign. Built through the
//! normal constructors so the derived-status invariant holds for seeded
//! participants too.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{
    Channel, CommunicationMessage, DeliveryStatus, Participant, ParticipantInput, PaymentInput,
    PaymentStatus, Poll, PollOption,
};

fn dmy(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid")
}

fn dmy_hm(day: u32, month: u32, year: i32, hour: u32, minute: u32) -> NaiveDateTime {
    dmy(day, month, year)
        .and_hms_opt(hour, minute, 0)
        .expect("seed times are valid")
}

pub(crate) fn participants() -> Vec<Participant> {
    vec![
        Participant::from_input(ParticipantInput {
            name: "Ana Souza".into(),
            value: 120_000,
            whatsapp: Some("55 11 91234-5678".into()),
            history: vec![
                PaymentInput::new(dmy(10, 2, 2024), 60_000, PaymentStatus::Pago)
                    .with_method("PIX"),
                PaymentInput::new(dmy(10, 3, 2024), 60_000, PaymentStatus::Pago)
                    .with_method("PIX"),
            ],
        }),
        Participant::from_input(ParticipantInput {
            name: "Bruno Lima".into(),
            value: 120_000,
            whatsapp: Some("55 11 99876-5432".into()),
            history: vec![
                PaymentInput::new(dmy(8, 2, 2024), 60_000, PaymentStatus::Pago)
                    .with_method("Boleto"),
                PaymentInput::new(dmy(8, 3, 2024), 60_000, PaymentStatus::Atrasado)
                    .with_method("Boleto"),
            ],
        }),
        Participant::from_input(ParticipantInput {
            name: "Carla Mendes".into(),
            value: 120_000,
            whatsapp: Some("55 11 98765-4321".into()),
            history: vec![
                PaymentInput::new(dmy(12, 2, 2024), 60_000, PaymentStatus::Pago)
                    .with_method("PIX"),
                PaymentInput::new(dmy(12, 3, 2024), 60_000, PaymentStatus::EmDia)
                    .with_method("PIX"),
            ],
        }),
    ]
}

pub(crate) fn poll() -> Poll {
    Poll::new(
        "Qual banda devemos contratar para a festa?",
        dmy(5, 7, 2024),
        vec![
            PollOption::new("Banda Aurora", 38),
            PollOption::new("DJ Set Formandos", 22),
            PollOption::new("Grupo Samba&Som", 17),
        ],
    )
}

pub(crate) fn communication_queue() -> Vec<CommunicationMessage> {
    vec![
        CommunicationMessage::new(
            Channel::WhatsApp,
            "Cobrança parcela março",
            "Olá! Lembrando que a parcela de março vence dia 15. Qualquer dúvida estamos por aqui.",
            "Todos os formandos",
            dmy_hm(13, 3, 2024, 19, 0),
            DeliveryStatus::Agendado,
        ),
        CommunicationMessage::new(
            Channel::Email,
            "Enquete: atrações para a festa",
            "Participem da enquete para escolher a banda da festa! Link disponível no aplicativo.",
            "Todos os formandos",
            dmy_hm(20, 3, 2024, 8, 0),
            DeliveryStatus::Enviado,
        ),
    ]
}
