use janseva_core::{
  ApiRequest, KeyValueStore, Result, Transport,
  model::{DashboardAnalytics, DashboardFilter},
};

use crate::ApiClient;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  pub async fn get_dashboard(&self, filter: &DashboardFilter) -> Result<DashboardAnalytics> {
    self.request(ApiRequest::get(filter.to_query().append_to("/analytics/dashboard")), false).await
  }
}
