use janseva_core::{
  ApiRequest, KeyValueStore, ListResponse, Result, Transport,
  model::{Voter, VoterFilter, VoterInput, VoterLookup},
  search::AdvancedVoterSearch,
};

use crate::ApiClient;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  pub async fn get_voters(&self, filter: &VoterFilter) -> Result<ListResponse<Voter>> {
    self.request(ApiRequest::get(filter.to_query().append_to("/voters")), false).await
  }

  /// Simple lookup by name substring or EPIC id.
  ///
  /// Always hits the backend. Callers should check
  /// [`VoterLookup::is_actionable`] first; an empty lookup returns every
  /// voter.
  pub async fn search_voters(&self, lookup: &VoterLookup) -> Result<ListResponse<Voter>> {
    self.request(ApiRequest::get(lookup.to_query().append_to("/voters/search")), false).await
  }

  pub async fn advanced_search_voters(
    &self,
    search: &AdvancedVoterSearch,
  ) -> Result<ListResponse<Voter>> {
    self.request(ApiRequest::post("/voters/search/advanced").json(search)?, false).await
  }

  pub async fn get_voter(&self, id: i64) -> Result<Voter> {
    self.request(ApiRequest::get(format!("/voters/{id}")), false).await
  }

  pub async fn create_voter(&self, input: &VoterInput) -> Result<Voter> {
    self.request(ApiRequest::post("/voters").json(input)?, false).await
  }

  pub async fn update_voter(&self, id: i64, input: &VoterInput) -> Result<Voter> {
    self.request(ApiRequest::put(format!("/voters/{id}")).json(input)?, false).await
  }

  pub async fn delete_voter(&self, id: i64) -> Result<()> {
    self.request_value(ApiRequest::delete(format!("/voters/{id}")), false).await?;
    Ok(())
  }
}
