//! OTP login request and response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Karyakarta;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRequest {
  pub mobile_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpResponse {
  pub message:    String,
  pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
  pub mobile_number: String,
  pub otp:           String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
  pub token:       String,
  pub expires_at:  DateTime<Utc>,
  pub user:        Karyakarta,
  #[serde(default)]
  pub permissions: Vec<String>,
}
