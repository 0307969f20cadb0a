use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dates::br_datetime;

pub type MessageId = Uuid;

/// Delivery channel for committee communications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    WhatsApp,
    Email,
    App,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::WhatsApp => "WhatsApp",
            Channel::Email => "Email",
            Channel::App => "App",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    /// Scheduled, not yet sent
    Agendado,
    /// Sent
    Enviado,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Agendado => "Agendado",
            DeliveryStatus::Enviado => "Enviado",
        }
    }
}

impl std::fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One queued or sent communication to the class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationMessage {
    pub id: MessageId,
    pub channel: Channel,
    pub title: String,
    pub body: String,
    pub audience: String,
    #[serde(with = "br_datetime")]
    pub scheduled_for: NaiveDateTime,
    pub status: DeliveryStatus,
}

impl CommunicationMessage {
    pub fn new(
        channel: Channel,
        title: impl Into<String>,
        body: impl Into<String>,
        audience: impl Into<String>,
        scheduled_for: NaiveDateTime,
        status: DeliveryStatus,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            channel,
            title: title.into(),
            body: body.into(),
            audience: audience.into(),
            scheduled_for,
            status,
        }
    }
}
