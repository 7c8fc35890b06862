//! Wire records for every resource the API serves.
//!
//! All entities are plain data. Server-assigned fields (`id`, `created_at`,
//! `updated_at`) live on the record types; the matching `*Input` types carry
//! everything a caller supplies on create or full-replace update.

pub mod analytics;
pub mod application;
pub mod auth;
pub mod communication;
pub mod hierarchy;
pub mod karyakarta;
pub mod report;
pub mod scheme;
pub mod voter;

use serde::{Deserialize, Serialize};

pub use analytics::{DashboardAnalytics, DashboardFilter, DistrictCount, StatusCount};
pub use application::{
  Application, ApplicationFilter, ApplicationInput, ApplicationStatus, SyncStatus,
};
pub use auth::{LoginRequest, LoginResponse, OtpRequest, OtpResponse};
pub use communication::{
  Communication, CommunicationCategory, CommunicationFilter, CommunicationStatus,
  CommunicationType,
};
pub use hierarchy::{
  AssemblyConstituency, District, LocalBody, LocalBodyKind, PollingStation, State, Ward,
};
pub use karyakarta::{Karyakarta, KaryakartaFilter, KaryakartaStatus};
pub use report::{ApplicationsReport, ReportFormat, ReportRequest};
pub use scheme::{Scheme, SchemeFilter, SchemeInput, SchemeStatus};
pub use voter::{Voter, VoterFilter, VoterInput, VoterLookup, VoterStatus};

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
pub enum Gender {
  Male,
  Female,
  Other,
}
