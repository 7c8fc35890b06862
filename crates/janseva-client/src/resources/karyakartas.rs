use janseva_core::{
  ApiRequest, KeyValueStore, ListResponse, Result, Transport,
  model::{Karyakarta, KaryakartaFilter},
};

use crate::ApiClient;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  pub async fn get_karyakartas(
    &self,
    filter: &KaryakartaFilter,
  ) -> Result<ListResponse<Karyakarta>> {
    let endpoint = filter.to_query().append_to("/karyakartas");
    self.request(ApiRequest::get(endpoint), false).await
  }
}
