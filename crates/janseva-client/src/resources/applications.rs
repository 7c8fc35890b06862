use janseva_core::{
  ApiRequest, KeyValueStore, ListResponse, Result, Transport,
  model::{Application, ApplicationFilter, ApplicationInput},
};

use crate::ApiClient;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  pub async fn get_applications(
    &self,
    filter: &ApplicationFilter,
  ) -> Result<ListResponse<Application>> {
    self.request(ApiRequest::get(filter.to_query().append_to("/applications")), false).await
  }

  pub async fn get_application(&self, id: i64) -> Result<Application> {
    self.request(ApiRequest::get(format!("/applications/{id}")), false).await
  }

  pub async fn create_application(&self, input: &ApplicationInput) -> Result<Application> {
    self.request(ApiRequest::post("/applications").json(input)?, false).await
  }

  /// Full replace; every field of `input` overwrites the stored record.
  pub async fn update_application(&self, id: i64, input: &ApplicationInput) -> Result<Application> {
    self.request(ApiRequest::put(format!("/applications/{id}")).json(input)?, false).await
  }

  pub async fn delete_application(&self, id: i64) -> Result<()> {
    self.request_value(ApiRequest::delete(format!("/applications/{id}")), false).await?;
    Ok(())
  }
}
