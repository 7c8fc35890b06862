//! Advanced voter search: structured multi-criteria query.
//!
//! Sent as the JSON body of `POST /voters/search/advanced`. Each criterion
//! the caller fills in becomes one predicate; [`Combinator`] decides whether
//! all or any of them must hold. A search with no criteria matches every
//! voter.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::VoterStatus;

/// How a name criterion is compared against `Voter::name`. All comparisons
/// are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
  Exact,
  #[default]
  Partial,
  Fuzzy,
  StartsWith,
  EndsWith,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCriterion {
  pub value:      String,
  #[serde(default)]
  pub match_type: MatchType,
}

/// Inclusive age bounds; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AgeRange {
  #[serde(default)]
  pub min: Option<u32>,
  #[serde(default)]
  pub max: Option<u32>,
}

impl AgeRange {
  pub fn contains(&self, age: u32) -> bool {
    self.min.is_none_or(|min| age >= min) && self.max.is_none_or(|max| age <= max)
  }
}

/// Which voter timestamp a [`DateRange`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
  CreatedAt,
  UpdatedAt,
  DateOfBirth,
}

/// Inclusive calendar-date bounds on `field`; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
  pub field: DateField,
  #[serde(default)]
  pub from:  Option<NaiveDate>,
  #[serde(default)]
  pub to:    Option<NaiveDate>,
}

impl DateRange {
  pub fn contains(&self, date: NaiveDate) -> bool {
    self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Combinator {
  #[default]
  And,
  Or,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancedVoterSearch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name:                Option<NameCriterion>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub epic_ids:            Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub age_range:           Option<AgeRange>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date_range:          Option<DateRange>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub district_ids:        Vec<i64>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub assembly_ids:        Vec<i64>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub local_body_ids:      Vec<i64>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub ward_ids:            Vec<i64>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub polling_station_ids: Vec<i64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status:              Option<VoterStatus>,
  #[serde(default)]
  pub combine:             Combinator,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub page:                Option<usize>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub per_page:            Option<usize>,
}
