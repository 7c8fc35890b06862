//! Dashboard aggregates. Always derived from the application set, never
//! written directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ApplicationStatus;
use crate::query::QueryString;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
  pub status: ApplicationStatus,
  pub count:  usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictCount {
  pub district_id:   i64,
  pub district_name: String,
  pub count:         usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardAnalytics {
  pub total_applications:       usize,
  pub pending_applications:     usize,
  pub in_progress_applications: usize,
  pub approved_applications:    usize,
  pub rejected_applications:    usize,
  pub total_voters:             usize,
  pub active_schemes:           usize,
  pub active_karyakartas:       usize,
  pub applications_by_status:   Vec<StatusCount>,
  pub applications_by_district: Vec<DistrictCount>,
}

/// Scope for `GET /analytics/dashboard`. Date bounds are inclusive and apply
/// to application `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardFilter {
  pub from_date:   Option<NaiveDate>,
  pub to_date:     Option<NaiveDate>,
  pub district_id: Option<i64>,
}

impl DashboardFilter {
  pub fn to_query(&self) -> QueryString {
    QueryString::new()
      .opt("from_date", self.from_date)
      .opt("to_date", self.to_date)
      .opt("district_id", self.district_id)
  }
}
