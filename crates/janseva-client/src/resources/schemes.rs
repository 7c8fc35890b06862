use janseva_core::{
  ApiRequest, KeyValueStore, ListResponse, Result, Transport,
  model::{Scheme, SchemeFilter, SchemeInput},
};

use crate::ApiClient;

fn scheme_path(id: &str) -> String { format!("/schemes/{}", urlencoding::encode(id)) }

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  pub async fn get_schemes(&self, filter: &SchemeFilter) -> Result<ListResponse<Scheme>> {
    self.request(ApiRequest::get(filter.to_query().append_to("/schemes")), false).await
  }

  pub async fn get_scheme(&self, id: &str) -> Result<Scheme> {
    self.request(ApiRequest::get(scheme_path(id)), false).await
  }

  pub async fn create_scheme(&self, input: &SchemeInput) -> Result<Scheme> {
    self.request(ApiRequest::post("/schemes").json(input)?, false).await
  }

  pub async fn update_scheme(&self, id: &str, input: &SchemeInput) -> Result<Scheme> {
    self.request(ApiRequest::put(scheme_path(id)).json(input)?, false).await
  }

  pub async fn delete_scheme(&self, id: &str) -> Result<()> {
    self.request_value(ApiRequest::delete(scheme_path(id)), false).await?;
    Ok(())
  }
}
