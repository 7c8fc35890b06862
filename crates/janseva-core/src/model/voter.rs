//! Voter roll entries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Gender;
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
pub enum VoterStatus {
  Active,
  Inactive,
  Deceased,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voter {
  pub id:                    i64,
  pub serial_no:             u32,
  pub name:                  String,
  #[serde(default)]
  pub guardian_name:         Option<String>,
  /// EPIC number printed on the voter identity card.
  pub id_card_no:            String,
  pub gender:                Gender,
  pub age:                   u32,
  #[serde(default)]
  pub date_of_birth:         Option<NaiveDate>,
  #[serde(default)]
  pub house_name:            Option<String>,
  #[serde(default)]
  pub mobile_number:         Option<String>,
  pub district_id:           i64,
  pub assembly_id:           i64,
  pub local_body_id:         i64,
  pub ward_id:               i64,
  pub polling_station_id:    i64,
  #[serde(default)]
  pub political_inclination: Option<String>,
  pub status:                VoterStatus,
  pub created_at:            DateTime<Utc>,
  pub updated_at:            DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoterInput {
  pub serial_no:             u32,
  pub name:                  String,
  #[serde(default)]
  pub guardian_name:         Option<String>,
  pub id_card_no:            String,
  pub gender:                Gender,
  pub age:                   u32,
  #[serde(default)]
  pub date_of_birth:         Option<NaiveDate>,
  #[serde(default)]
  pub house_name:            Option<String>,
  #[serde(default)]
  pub mobile_number:         Option<String>,
  pub district_id:           i64,
  pub assembly_id:           i64,
  pub local_body_id:         i64,
  pub ward_id:               i64,
  pub polling_station_id:    i64,
  #[serde(default)]
  pub political_inclination: Option<String>,
  pub status:                VoterStatus,
}

impl Voter {
  pub fn from_input(id: i64, input: VoterInput, now: DateTime<Utc>) -> Self {
    let VoterInput {
      serial_no,
      name,
      guardian_name,
      id_card_no,
      gender,
      age,
      date_of_birth,
      house_name,
      mobile_number,
      district_id,
      assembly_id,
      local_body_id,
      ward_id,
      polling_station_id,
      political_inclination,
      status,
    } = input;
    Self {
      id,
      serial_no,
      name,
      guardian_name,
      id_card_no,
      gender,
      age,
      date_of_birth,
      house_name,
      mobile_number,
      district_id,
      assembly_id,
      local_body_id,
      ward_id,
      polling_station_id,
      political_inclination,
      status,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn replace(&mut self, input: VoterInput, now: DateTime<Utc>) {
    let created_at = self.created_at;
    *self = Self::from_input(self.id, input, now);
    self.created_at = created_at;
  }

  pub fn input(&self) -> VoterInput {
    VoterInput {
      serial_no:             self.serial_no,
      name:                  self.name.clone(),
      guardian_name:         self.guardian_name.clone(),
      id_card_no:            self.id_card_no.clone(),
      gender:                self.gender,
      age:                   self.age,
      date_of_birth:         self.date_of_birth,
      house_name:            self.house_name.clone(),
      mobile_number:         self.mobile_number.clone(),
      district_id:           self.district_id,
      assembly_id:           self.assembly_id,
      local_body_id:         self.local_body_id,
      ward_id:               self.ward_id,
      polling_station_id:    self.polling_station_id,
      political_inclination: self.political_inclination.clone(),
      status:                self.status,
    }
  }
}

/// Filters for `GET /voters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoterFilter {
  pub page:               Option<usize>,
  pub per_page:           Option<usize>,
  pub district_id:        Option<i64>,
  pub assembly_id:        Option<i64>,
  pub local_body_id:      Option<i64>,
  pub ward_id:            Option<i64>,
  pub polling_station_id: Option<i64>,
  pub status:             Option<VoterStatus>,
  pub min_age:            Option<u32>,
  pub max_age:            Option<u32>,
}

impl VoterFilter {
  pub fn to_query(&self) -> QueryString {
    QueryString::new()
      .opt("page", self.page)
      .opt("per_page", self.per_page)
      .opt("district_id", self.district_id)
      .opt("assembly_id", self.assembly_id)
      .opt("local_body_id", self.local_body_id)
      .opt("ward_id", self.ward_id)
      .opt("polling_station_id", self.polling_station_id)
      .opt("status", self.status)
      .opt("min_age", self.min_age)
      .opt("max_age", self.max_age)
  }
}

/// Parameters for the simple `GET /voters/search` lookup.
///
/// Sending a lookup with neither `name` nor `epic_id` is the caller's
/// mistake; see [`VoterLookup::is_actionable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoterLookup {
  pub name:     Option<String>,
  pub epic_id:  Option<String>,
  pub page:     Option<usize>,
  pub per_page: Option<usize>,
}

impl VoterLookup {
  pub fn by_name(name: impl Into<String>) -> Self {
    Self { name: Some(name.into()), ..Default::default() }
  }

  pub fn by_epic_id(epic_id: impl Into<String>) -> Self {
    Self { epic_id: Some(epic_id.into()), ..Default::default() }
  }

  /// True when at least one of `name` / `epic_id` is non-blank.
  pub fn is_actionable(&self) -> bool {
    let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
    filled(&self.name) || filled(&self.epic_id)
  }

  pub fn to_query(&self) -> QueryString {
    QueryString::new()
      .opt("name", self.name.as_deref())
      .opt("epic_id", self.epic_id.as_deref())
      .opt("page", self.page)
      .opt("per_page", self.per_page)
  }
}
