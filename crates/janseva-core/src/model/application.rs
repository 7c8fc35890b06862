//! Helpdesk applications: a citizen's scheme-assistance case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Gender;
use crate::query::QueryString;

/// Workflow status of an application. Wire strings are case-sensitive.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::AsRefStr,
)]
pub enum ApplicationStatus {
  Pending,
  #[serde(rename = "In_Progress")]
  #[strum(serialize = "In_Progress")]
  InProgress,
  Approved,
  Rejected,
}

impl ApplicationStatus {
  pub const ALL: [Self; 4] = [Self::Pending, Self::InProgress, Self::Approved, Self::Rejected];
}

/// Whether the record has reached the backend from the device.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SyncStatus {
  #[default]
  Synced,
  Pending,
  Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
  pub id:             i64,
  pub helpdesk_id:    String,
  pub applicant_name: String,
  #[serde(default)]
  pub guardian_name:  Option<String>,
  pub mobile_number:  String,
  #[serde(default)]
  pub gender:         Option<Gender>,
  #[serde(default)]
  pub age:            Option<u32>,
  #[serde(default)]
  pub house_name:     Option<String>,
  pub address:        String,
  #[serde(default)]
  pub pincode:        Option<String>,
  pub district_id:    i64,
  #[serde(default)]
  pub assembly_id:    Option<i64>,
  #[serde(default)]
  pub local_body_id:  Option<i64>,
  #[serde(default)]
  pub ward_id:        Option<i64>,
  pub scheme_id:      String,
  pub status:         ApplicationStatus,
  #[serde(default)]
  pub sync_status:    SyncStatus,
  #[serde(default)]
  pub remarks:        Option<String>,
  pub created_at:     DateTime<Utc>,
  pub updated_at:     DateTime<Utc>,
}

/// Caller-supplied fields for create and full-replace update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationInput {
  pub helpdesk_id:    String,
  pub applicant_name: String,
  #[serde(default)]
  pub guardian_name:  Option<String>,
  pub mobile_number:  String,
  #[serde(default)]
  pub gender:         Option<Gender>,
  #[serde(default)]
  pub age:            Option<u32>,
  #[serde(default)]
  pub house_name:     Option<String>,
  pub address:        String,
  #[serde(default)]
  pub pincode:        Option<String>,
  pub district_id:    i64,
  #[serde(default)]
  pub assembly_id:    Option<i64>,
  #[serde(default)]
  pub local_body_id:  Option<i64>,
  #[serde(default)]
  pub ward_id:        Option<i64>,
  pub scheme_id:      String,
  pub status:         ApplicationStatus,
  #[serde(default)]
  pub sync_status:    SyncStatus,
  #[serde(default)]
  pub remarks:        Option<String>,
}

impl Application {
  /// Build a record from `input`, stamping both timestamps with `now`.
  pub fn from_input(id: i64, input: ApplicationInput, now: DateTime<Utc>) -> Self {
    let ApplicationInput {
      helpdesk_id,
      applicant_name,
      guardian_name,
      mobile_number,
      gender,
      age,
      house_name,
      address,
      pincode,
      district_id,
      assembly_id,
      local_body_id,
      ward_id,
      scheme_id,
      status,
      sync_status,
      remarks,
    } = input;
    Self {
      id,
      helpdesk_id,
      applicant_name,
      guardian_name,
      mobile_number,
      gender,
      age,
      house_name,
      address,
      pincode,
      district_id,
      assembly_id,
      local_body_id,
      ward_id,
      scheme_id,
      status,
      sync_status,
      remarks,
      created_at: now,
      updated_at: now,
    }
  }

  /// Full replace of every caller-owned field; `id` and `created_at` survive.
  pub fn replace(&mut self, input: ApplicationInput, now: DateTime<Utc>) {
    let created_at = self.created_at;
    *self = Self::from_input(self.id, input, now);
    self.created_at = created_at;
  }

  /// The caller-owned part of this record.
  pub fn input(&self) -> ApplicationInput {
    ApplicationInput {
      helpdesk_id:    self.helpdesk_id.clone(),
      applicant_name: self.applicant_name.clone(),
      guardian_name:  self.guardian_name.clone(),
      mobile_number:  self.mobile_number.clone(),
      gender:         self.gender,
      age:            self.age,
      house_name:     self.house_name.clone(),
      address:        self.address.clone(),
      pincode:        self.pincode.clone(),
      district_id:    self.district_id,
      assembly_id:    self.assembly_id,
      local_body_id:  self.local_body_id,
      ward_id:        self.ward_id,
      scheme_id:      self.scheme_id.clone(),
      status:         self.status,
      sync_status:    self.sync_status,
      remarks:        self.remarks.clone(),
    }
  }
}

/// Filters for `GET /applications`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationFilter {
  pub page:        Option<usize>,
  pub per_page:    Option<usize>,
  pub status:      Option<ApplicationStatus>,
  pub district_id: Option<i64>,
}

impl ApplicationFilter {
  pub fn to_query(&self) -> QueryString {
    QueryString::new()
      .opt("page", self.page)
      .opt("per_page", self.per_page)
      .opt("status", self.status)
      .opt("district_id", self.district_id)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn in_progress_uses_underscore_wire_form() {
    let json = serde_json::to_value(ApplicationStatus::InProgress).unwrap();
    assert_eq!(json, serde_json::json!("In_Progress"));
    assert_eq!(ApplicationStatus::InProgress.to_string(), "In_Progress");
    assert_eq!("In_Progress".parse::<ApplicationStatus>().unwrap(), ApplicationStatus::InProgress);
    assert!("pending".parse::<ApplicationStatus>().is_err());
  }

  #[test]
  fn filter_only_encodes_given_fields() {
    let q = ApplicationFilter { status: Some(ApplicationStatus::Pending), ..Default::default() }
      .to_query();
    assert_eq!(q.finish(), "?status=Pending");
    assert!(!q.contains_key("district_id"));
    assert!(!q.contains_key("page"));
    assert!(ApplicationFilter::default().to_query().is_empty());
  }
}
