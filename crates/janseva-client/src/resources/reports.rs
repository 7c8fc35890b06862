use janseva_core::{
  ApiRequest, KeyValueStore, Result, Transport,
  model::{ApplicationsReport, ReportRequest},
};

use crate::ApiClient;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
  /// Fetch the applications report, decoded according to `report.format`.
  pub async fn get_applications_report(
    &self,
    report: &ReportRequest,
  ) -> Result<ApplicationsReport> {
    let endpoint = report.to_query().append_to("/reports/applications");
    let value = self.request_value(ApiRequest::get(endpoint), false).await?;
    ApplicationsReport::from_value(report.format, value)
  }
}
