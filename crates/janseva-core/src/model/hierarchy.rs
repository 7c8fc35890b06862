//! Organisational hierarchy:
//! State → District → AssemblyConstituency → LocalBody → Ward → PollingStation.
//!
//! Every level points at its immediate parent only.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
  pub id:   i64,
  pub name: String,
  pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
  pub id:       i64,
  pub state_id: i64,
  pub name:     String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyConstituency {
  pub id:          i64,
  pub district_id: i64,
  pub name:        String,
  pub number:      u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocalBodyKind {
  Panchayat,
  Municipality,
  Corporation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBody {
  pub id:          i64,
  pub assembly_id: i64,
  pub name:        String,
  pub kind:        LocalBodyKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ward {
  pub id:            i64,
  pub local_body_id: i64,
  pub name:          String,
  pub number:        u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollingStation {
  pub id:      i64,
  pub ward_id: i64,
  pub name:    String,
  pub number:  u32,
  pub address: String,
}
