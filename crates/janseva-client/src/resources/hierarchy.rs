use janseva_core::{
  ApiRequest, KeyValueStore, ListResponse, QueryString, Result, Transport,
  model::{AssemblyConstituency, District, LocalBody, PollingStation, State, Ward},
};
use serde::de::DeserializeOwned;

use crate::ApiClient;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  /// `GET /hierarchy/{level}`, filtered by the parent id when one is given.
  async fn hierarchy_level<R: DeserializeOwned>(
    &self,
    level: &str,
    parent_key: &'static str,
    parent_id: Option<i64>,
  ) -> Result<ListResponse<R>> {
    let endpoint =
      QueryString::new().opt(parent_key, parent_id).append_to(&format!("/hierarchy/{level}"));
    self.request(ApiRequest::get(endpoint), false).await
  }

  pub async fn get_states(&self) -> Result<ListResponse<State>> {
    self.request(ApiRequest::get("/hierarchy/states"), false).await
  }

  pub async fn get_districts(&self, state_id: Option<i64>) -> Result<ListResponse<District>> {
    self.hierarchy_level("districts", "state_id", state_id).await
  }

  pub async fn get_assemblies(
    &self,
    district_id: Option<i64>,
  ) -> Result<ListResponse<AssemblyConstituency>> {
    self.hierarchy_level("assemblies", "district_id", district_id).await
  }

  pub async fn get_local_bodies(
    &self,
    assembly_id: Option<i64>,
  ) -> Result<ListResponse<LocalBody>> {
    self.hierarchy_level("local-bodies", "assembly_id", assembly_id).await
  }

  pub async fn get_wards(&self, local_body_id: Option<i64>) -> Result<ListResponse<Ward>> {
    self.hierarchy_level("wards", "local_body_id", local_body_id).await
  }

  pub async fn get_polling_stations(
    &self,
    ward_id: Option<i64>,
  ) -> Result<ListResponse<PollingStation>> {
    self.hierarchy_level("polling-stations", "ward_id", ward_id).await
  }
}
