//! Broadcast and notification log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::QueryString;

/// Delivery channel. Integer-coded on the wire (1–6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CommunicationType {
  Sms = 1,
  WhatsApp = 2,
  Email = 3,
  Push = 4,
  VoiceCall = 5,
  Letter = 6,
}

impl TryFrom<u8> for CommunicationType {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      1 => Self::Sms,
      2 => Self::WhatsApp,
      3 => Self::Email,
      4 => Self::Push,
      5 => Self::VoiceCall,
      6 => Self::Letter,
      other => return Err(format!("unknown communication type {other}")),
    })
  }
}

impl From<CommunicationType> for u8 {
  fn from(value: CommunicationType) -> Self { value as u8 }
}

/// Message category. Integer-coded on the wire (1–4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum CommunicationCategory {
  Announcement = 1,
  SchemeUpdate = 2,
  Event = 3,
  Alert = 4,
}

impl TryFrom<u8> for CommunicationCategory {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      1 => Self::Announcement,
      2 => Self::SchemeUpdate,
      3 => Self::Event,
      4 => Self::Alert,
      other => return Err(format!("unknown communication category {other}")),
    })
  }
}

impl From<CommunicationCategory> for u8 {
  fn from(value: CommunicationCategory) -> Self { value as u8 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommunicationStatus {
  Draft,
  Scheduled,
  Sent,
  Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Communication {
  pub id:               i64,
  #[serde(rename = "type")]
  pub kind:             CommunicationType,
  pub category:         CommunicationCategory,
  pub message:          String,
  pub status:           CommunicationStatus,
  #[serde(default)]
  pub recipients_count: u32,
  pub created_at:       DateTime<Utc>,
}

/// Filters for `GET /communications`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommunicationFilter {
  pub page:     Option<usize>,
  pub per_page: Option<usize>,
  pub kind:     Option<CommunicationType>,
  pub category: Option<CommunicationCategory>,
}

impl CommunicationFilter {
  pub fn to_query(&self) -> QueryString {
    QueryString::new()
      .opt("page", self.page)
      .opt("per_page", self.per_page)
      .opt("type", self.kind.map(u8::from))
      .opt("category", self.category.map(u8::from))
  }
}
