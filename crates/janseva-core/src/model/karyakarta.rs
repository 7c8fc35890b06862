//! Karyakartas: the field workers who sign in to the app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::query::QueryString;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
pub enum KaryakartaStatus {
  Active,
  Inactive,
  Suspended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Karyakarta {
  pub id:            i64,
  pub name:          String,
  pub mobile_number: String,
  /// Free-form role label, e.g. `Booth Agent` or `Ward Coordinator`.
  pub role:          String,
  pub status:        KaryakartaStatus,
  #[serde(default)]
  pub district_id:   Option<i64>,
  #[serde(default)]
  pub assembly_id:   Option<i64>,
  #[serde(default)]
  pub local_body_id: Option<i64>,
  #[serde(default)]
  pub ward_id:       Option<i64>,
  pub created_at:    DateTime<Utc>,
  pub updated_at:    DateTime<Utc>,
}

/// Filters for `GET /karyakartas`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KaryakartaFilter {
  pub page:        Option<usize>,
  pub per_page:    Option<usize>,
  pub district_id: Option<i64>,
  pub assembly_id: Option<i64>,
  pub status:      Option<KaryakartaStatus>,
  pub role:        Option<String>,
}

impl KaryakartaFilter {
  pub fn to_query(&self) -> QueryString {
    QueryString::new()
      .opt("page", self.page)
      .opt("per_page", self.per_page)
      .opt("district_id", self.district_id)
      .opt("assembly_id", self.assembly_id)
      .opt("status", self.status)
      .opt("role", self.role.as_deref())
  }
}
