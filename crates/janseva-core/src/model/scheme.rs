//! Government schemes: read-mostly reference data, keyed by string id.

use chrono::{DateTime, Utc};
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
pub enum SchemeStatus {
  Active,
  Inactive,
  Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scheme {
  pub id:          String,
  pub name:        String,
  pub category:    String,
  pub description: String,
  /// Eligibility bounds; `None` means unrestricted.
  #[serde(default)]
  pub min_age:     Option<u32>,
  #[serde(default)]
  pub max_age:     Option<u32>,
  #[serde(default)]
  pub gender:      Option<Gender>,
  #[serde(default)]
  pub community:   Option<String>,
  #[serde(default)]
  pub occupation:  Option<String>,
  #[serde(default)]
  pub budget:      Option<f64>,
  pub status:      SchemeStatus,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemeInput {
  pub name:        String,
  pub category:    String,
  pub description: String,
  #[serde(default)]
  pub min_age:     Option<u32>,
  #[serde(default)]
  pub max_age:     Option<u32>,
  #[serde(default)]
  pub gender:      Option<Gender>,
  #[serde(default)]
  pub community:   Option<String>,
  #[serde(default)]
  pub occupation:  Option<String>,
  #[serde(default)]
  pub budget:      Option<f64>,
  pub status:      SchemeStatus,
}

impl Scheme {
  pub fn from_input(id: String, input: SchemeInput, now: DateTime<Utc>) -> Self {
    let SchemeInput {
      name,
      category,
      description,
      min_age,
      max_age,
      gender,
      community,
      occupation,
      budget,
      status,
    } = input;
    Self {
      id,
      name,
      category,
      description,
      min_age,
      max_age,
      gender,
      community,
      occupation,
      budget,
      status,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn replace(&mut self, input: SchemeInput, now: DateTime<Utc>) {
    let created_at = self.created_at;
    *self = Self::from_input(std::mem::take(&mut self.id), input, now);
    self.created_at = created_at;
  }

  pub fn input(&self) -> SchemeInput {
    SchemeInput {
      name:        self.name.clone(),
      category:    self.category.clone(),
      description: self.description.clone(),
      min_age:     self.min_age,
      max_age:     self.max_age,
      gender:      self.gender,
      community:   self.community.clone(),
      occupation:  self.occupation.clone(),
      budget:      self.budget,
      status:      self.status,
    }
  }
}

/// Filters for `GET /schemes`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeFilter {
  pub page:     Option<usize>,
  pub per_page: Option<usize>,
  pub status:   Option<SchemeStatus>,
  pub category: Option<String>,
}

impl SchemeFilter {
  pub fn to_query(&self) -> QueryString {
    QueryString::new()
      .opt("page", self.page)
      .opt("per_page", self.per_page)
      .opt("status", self.status)
      .opt("category", self.category.as_deref())
  }
}
