//! Application reports in three output formats.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Application, ApplicationStatus};
use crate::{ListResponse, Result, query::QueryString};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
  #[default]
  Json,
  Csv,
  Excel,
}

/// Parameters for `GET /reports/applications`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportRequest {
  pub format:      ReportFormat,
  pub status:      Option<ApplicationStatus>,
  pub district_id: Option<i64>,
}

impl ReportRequest {
  pub fn to_query(&self) -> QueryString {
    QueryString::new()
      .opt("format", Some(self.format))
      .opt("status", self.status)
      .opt("district_id", self.district_id)
  }
}

/// A decoded report, one variant per format.
///
/// `Excel` carries the raw rows; there is no spreadsheet encoder behind it.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplicationsReport {
  Json(Vec<Application>),
  Csv(String),
  Excel(Vec<Application>),
}

impl ApplicationsReport {
  /// Decode a response body according to the format that was requested.
  pub fn from_value(format: ReportFormat, value: Value) -> Result<Self> {
    Ok(match format {
      ReportFormat::Json => {
        let envelope: ListResponse<Application> = serde_json::from_value(value)?;
        Self::Json(envelope.data)
      }
      ReportFormat::Csv => Self::Csv(serde_json::from_value(value)?),
      ReportFormat::Excel => Self::Excel(serde_json::from_value(value)?),
    })
  }

  /// Encode as the response body the server sends for this format.
  pub fn to_value(&self) -> Result<Value> {
    Ok(match self {
      Self::Json(rows) => serde_json::to_value(ListResponse::unpaged(rows.clone()))?,
      Self::Csv(text) => Value::String(text.clone()),
      Self::Excel(rows) => serde_json::to_value(rows)?,
    })
  }

  pub fn format(&self) -> ReportFormat {
    match self {
      Self::Json(_) => ReportFormat::Json,
      Self::Csv(_) => ReportFormat::Csv,
      Self::Excel(_) => ReportFormat::Excel,
    }
  }
}

pub const CSV_HEADER: &str = "id,helpdesk_id,name,status";

/// Render `rows` as the four-column CSV report, `\n`-terminated.
pub fn applications_csv(rows: &[Application]) -> Result<String> {
  let mut wtr = csv::WriterBuilder::new()
    .terminator(csv::Terminator::Any(b'\n'))
    .from_writer(Vec::new());

  wtr.write_record(CSV_HEADER.split(','))?;
  for app in rows {
    let id     = app.id.to_string();
    let status = app.status.to_string();
    wtr.write_record([&id, &app.helpdesk_id, &app.applicant_name, &status])?;
  }

  let bytes = wtr.into_inner().map_err(|e| csv::Error::from(e.into_error()))?;
  String::from_utf8(bytes)
    .map_err(|e| csv::Error::from(std::io::Error::new(std::io::ErrorKind::InvalidData, e)).into())
}

#[cfg(test)]
mod tests {
  use chrono::{DateTime, Utc};
  use serde_json::json;

  use super::*;
  use crate::model::{ApplicationInput, SyncStatus};

  fn app(id: i64, name: &str, status: ApplicationStatus) -> Application {
    Application::from_input(
      id,
      ApplicationInput {
        helpdesk_id: format!("HD-{id:04}"),
        applicant_name: name.into(),
        guardian_name: None,
        mobile_number: "9000000000".into(),
        gender: None,
        age: None,
        house_name: None,
        address: "Main Road".into(),
        pincode: None,
        district_id: 1,
        assembly_id: None,
        local_body_id: None,
        ward_id: None,
        scheme_id: "SCH-PENSION".into(),
        status,
        sync_status: SyncStatus::Synced,
        remarks: None,
      },
      DateTime::<Utc>::from_timestamp(0, 0).unwrap(),
    )
  }

  #[test]
  fn csv_has_four_columns_and_quotes_commas() {
    let rows = [
      app(1, "Ravi Kumar", ApplicationStatus::Pending),
      app(2, "Menon, Latha", ApplicationStatus::InProgress),
    ];
    let csv = applications_csv(&rows).unwrap();
    assert_eq!(
      csv,
      "id,helpdesk_id,name,status\n1,HD-0001,Ravi Kumar,Pending\n2,HD-0002,\"Menon, Latha\",In_Progress\n"
    );
  }

  #[test]
  fn csv_doubles_embedded_quotes_and_keeps_newlines_quoted() {
    let rows = [app(3, "Ammu \"Kutty\"\nNair", ApplicationStatus::Rejected)];
    let csv = applications_csv(&rows).unwrap();
    assert_eq!(csv, "id,helpdesk_id,name,status\n3,HD-0003,\"Ammu \"\"Kutty\"\"\nNair\",Rejected\n");
  }

  #[test]
  fn empty_report_is_just_the_header() {
    assert_eq!(applications_csv(&[]).unwrap(), format!("{CSV_HEADER}\n"));
  }

  #[test]
  fn each_format_decodes_into_its_variant() {
    let rows = vec![app(1, "Ravi Kumar", ApplicationStatus::Approved)];
    let rows_json = serde_json::to_value(&rows).unwrap();

    let report =
      ApplicationsReport::from_value(ReportFormat::Json, json!({ "data": rows_json.clone() }))
        .unwrap();
    assert_eq!(report, ApplicationsReport::Json(rows.clone()));

    let report = ApplicationsReport::from_value(ReportFormat::Excel, rows_json).unwrap();
    assert_eq!(report, ApplicationsReport::Excel(rows));

    let report = ApplicationsReport::from_value(ReportFormat::Csv, json!("id\n")).unwrap();
    assert_eq!(report, ApplicationsReport::Csv("id\n".into()));
    assert_eq!(report.format(), ReportFormat::Csv);
  }

  #[test]
  fn mismatched_shape_is_a_decode_error() {
    let err = ApplicationsReport::from_value(ReportFormat::Csv, json!({ "data": [] })).unwrap_err();
    assert!(matches!(err, crate::Error::Decode(_)));
  }

  #[test]
  fn format_is_always_sent() {
    let q = ReportRequest::default().to_query();
    assert_eq!(q.finish(), "?format=json");
  }
}
