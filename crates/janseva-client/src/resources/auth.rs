use janseva_core::{
  ApiRequest, KeyValueStore, Result, Transport,
  model::{LoginRequest, LoginResponse, OtpRequest, OtpResponse},
};
use tracing::info;

use crate::ApiClient;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  /// Ask the backend to send an OTP. No token state changes.
  pub async fn request_otp(&self, mobile_number: &str) -> Result<OtpResponse> {
    let body = OtpRequest { mobile_number: mobile_number.to_owned() };
    self.request(ApiRequest::post("/auth/otp/request").json(&body)?, true).await
  }

  /// Exchange an OTP for a token and become authenticated.
  ///
  /// The token is live for subsequent calls even if persisting it fails.
  pub async fn login(&self, mobile_number: &str, otp: &str) -> Result<LoginResponse> {
    let body = LoginRequest { mobile_number: mobile_number.to_owned(), otp: otp.to_owned() };
    let response: LoginResponse =
      self.request(ApiRequest::post("/auth/login").json(&body)?, true).await?;
    self.set_token(response.token.clone()).await;
    info!(user_id = response.user.id, "logged in");
    Ok(response)
  }

  /// Drop the token locally and in storage. Safe to call when anonymous.
  pub async fn logout(&self) {
    let was_authenticated = self.is_authenticated().await;
    self.clear_token().await;
    if was_authenticated {
      info!("logged out");
    }
  }
}
