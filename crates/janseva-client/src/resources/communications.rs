use janseva_core::{
  ApiRequest, KeyValueStore, ListResponse, Result, Transport,
  model::{Communication, CommunicationFilter},
};

use crate::ApiClient;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  pub async fn get_communications(
    &self,
    filter: &CommunicationFilter,
  ) -> Result<ListResponse<Communication>> {
    self.request(ApiRequest::get(filter.to_query().append_to("/communications")), false).await
  }
}
