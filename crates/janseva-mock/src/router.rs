//! Request routing for [`MockStore`].
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/auth/otp/request` | any non-empty mobile number |
//! | `POST` | `/auth/login` | any OTP |
//! | `GET` `POST` | `/applications` | `?status` `?district_id` |
//! | `GET` `PUT` `DELETE` | `/applications/{id}` | |
//! | `GET` `POST` | `/voters` | geography, `?status`, `?min_age` `?max_age` |
//! | `GET` | `/voters/search` | `?name` `?epic_id` |
//! | `POST` | `/voters/search/advanced` | [`AdvancedVoterSearch`] body |
//! | `GET` `PUT` `DELETE` | `/voters/{id}` | |
//! | `GET` `POST` | `/schemes` | `?status` `?category` |
//! | `GET` `PUT` `DELETE` | `/schemes/{id}` | string id |
//! | `GET` | `/karyakartas` | `?district_id` `?assembly_id` `?status` `?role` |
//! | `GET` | `/hierarchy/{level}` | parent-id filter per level |
//! | `GET` | `/communications` | `?type` `?category` |
//! | `GET` | `/analytics/dashboard` | `?from_date` `?to_date` `?district_id` |
//! | `GET` | `/reports/applications` | `?format=json\|csv\|excel` |
//!
//! Status filters compare the wire string exactly (case-sensitive). Any other
//! method/path combination is a [`Error::MockGap`].

use chrono::{DateTime, NaiveDate, Utc};
use janseva_core::{
  ApiRequest, Error, ListResponse, Method, QueryParams, Result,
  model::{
    Application, ApplicationInput, ApplicationsReport, LoginRequest, OtpRequest, ReportFormat,
    SchemeInput, VoterInput, report::applications_csv,
  },
  paginate,
  search::AdvancedVoterSearch,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::store::MockStore;

impl MockStore {
  /// Answer `request` as the real API would, mutating the store in place.
  pub fn handle(&mut self, request: &ApiRequest) -> Result<Value> {
    self.handle_at(request, Utc::now())
  }

  /// [`handle`](Self::handle) with an explicit clock.
  pub fn handle_at(&mut self, request: &ApiRequest, now: DateTime<Utc>) -> Result<Value> {
    let q = QueryParams::parse(request.query())?;
    let segments: Vec<&str> = request.path().trim_matches('/').split('/').collect();
    let page     = q.get_as::<usize>("page");
    let per_page = q.get_as::<usize>("per_page");

    match (request.method, segments.as_slice()) {
      // ── Auth ────────────────────────────────────────────────────────────
      (Method::Post, ["auth", "otp", "request"]) => {
        respond(self.request_otp(&body::<OtpRequest>(request)?, now)?)
      }
      (Method::Post, ["auth", "login"]) => {
        respond(self.login(&body::<LoginRequest>(request)?, now)?)
      }

      // ── Applications ────────────────────────────────────────────────────
      (Method::Get, ["applications"]) => {
        let rows = self.filtered_applications(&q);
        respond(paginate(&rows, page, per_page))
      }
      (Method::Post, ["applications"]) => {
        respond(self.create_application(body::<ApplicationInput>(request)?, now))
      }
      (Method::Get, ["applications", id]) => respond(self.application(int_id(id, "Application")?)?),
      (Method::Put, ["applications", id]) => {
        let id = int_id(id, "Application")?;
        respond(self.update_application(id, body::<ApplicationInput>(request)?, now)?)
      }
      (Method::Delete, ["applications", id]) => {
        self.delete_application(int_id(id, "Application")?)?;
        Ok(empty())
      }

      // ── Voters ──────────────────────────────────────────────────────────
      (Method::Get, ["voters"]) => {
        let rows: Vec<_> = self
          .voters
          .iter()
          .filter(|v| id_matches(&q, "district_id", v.district_id))
          .filter(|v| id_matches(&q, "assembly_id", v.assembly_id))
          .filter(|v| id_matches(&q, "local_body_id", v.local_body_id))
          .filter(|v| id_matches(&q, "ward_id", v.ward_id))
          .filter(|v| id_matches(&q, "polling_station_id", v.polling_station_id))
          .filter(|v| text_matches(&q, "status", &v.status.to_string()))
          .filter(|v| q.get_as::<u32>("min_age").is_none_or(|min| v.age >= min))
          .filter(|v| q.get_as::<u32>("max_age").is_none_or(|max| v.age <= max))
          .cloned()
          .collect();
        respond(paginate(&rows, page, per_page))
      }
      (Method::Get, ["voters", "search"]) => {
        let rows = self.lookup_voters(q.get("name"), q.get("epic_id"));
        respond(paginate(&rows, page, per_page))
      }
      (Method::Post, ["voters", "search", "advanced"]) => {
        let search = body::<AdvancedVoterSearch>(request)?;
        let rows = self.advanced_search(&search);
        respond(paginate(&rows, search.page, search.per_page))
      }
      (Method::Post, ["voters"]) => respond(self.create_voter(body::<VoterInput>(request)?, now)),
      (Method::Get, ["voters", id]) => respond(self.voter(int_id(id, "Voter")?)?),
      (Method::Put, ["voters", id]) => {
        let id = int_id(id, "Voter")?;
        respond(self.update_voter(id, body::<VoterInput>(request)?, now)?)
      }
      (Method::Delete, ["voters", id]) => {
        self.delete_voter(int_id(id, "Voter")?)?;
        Ok(empty())
      }

      // ── Schemes ─────────────────────────────────────────────────────────
      (Method::Get, ["schemes"]) => {
        let rows: Vec<_> = self
          .schemes
          .iter()
          .filter(|s| text_matches(&q, "status", &s.status.to_string()))
          .filter(|s| q.get("category").is_none_or(|c| s.category.eq_ignore_ascii_case(c)))
          .cloned()
          .collect();
        respond(paginate(&rows, page, per_page))
      }
      (Method::Post, ["schemes"]) => {
        respond(self.create_scheme(body::<SchemeInput>(request)?, now))
      }
      (Method::Get, ["schemes", id]) => respond(self.scheme(id)?),
      (Method::Put, ["schemes", id]) => {
        respond(self.update_scheme(id, body::<SchemeInput>(request)?, now)?)
      }
      (Method::Delete, ["schemes", id]) => {
        self.delete_scheme(id)?;
        Ok(empty())
      }

      // ── Karyakartas ─────────────────────────────────────────────────────
      (Method::Get, ["karyakartas"]) => {
        let rows: Vec<_> = self
          .karyakartas
          .iter()
          .filter(|k| opt_id_matches(&q, "district_id", k.district_id))
          .filter(|k| opt_id_matches(&q, "assembly_id", k.assembly_id))
          .filter(|k| text_matches(&q, "status", &k.status.to_string()))
          .filter(|k| q.get("role").is_none_or(|r| k.role.eq_ignore_ascii_case(r)))
          .cloned()
          .collect();
        respond(paginate(&rows, page, per_page))
      }

      // ── Hierarchy ───────────────────────────────────────────────────────
      (Method::Get, ["hierarchy", "states"]) => respond(ListResponse::unpaged(self.states.clone())),
      (Method::Get, ["hierarchy", "districts"]) => respond(children(
        &self.districts,
        q.get_as("state_id"),
        |d| d.state_id,
      )),
      (Method::Get, ["hierarchy", "assemblies"]) => respond(children(
        &self.assemblies,
        q.get_as("district_id"),
        |a| a.district_id,
      )),
      (Method::Get, ["hierarchy", "local-bodies"]) => respond(children(
        &self.local_bodies,
        q.get_as("assembly_id"),
        |l| l.assembly_id,
      )),
      (Method::Get, ["hierarchy", "wards"]) => respond(children(
        &self.wards,
        q.get_as("local_body_id"),
        |w| w.local_body_id,
      )),
      (Method::Get, ["hierarchy", "polling-stations"]) => respond(children(
        &self.polling_stations,
        q.get_as("ward_id"),
        |p| p.ward_id,
      )),

      // ── Communications ──────────────────────────────────────────────────
      (Method::Get, ["communications"]) => {
        let rows: Vec<_> = self
          .communications
          .iter()
          .filter(|c| q.get_as::<u8>("type").is_none_or(|t| u8::from(c.kind) == t))
          .filter(|c| q.get_as::<u8>("category").is_none_or(|t| u8::from(c.category) == t))
          .cloned()
          .collect();
        respond(paginate(&rows, page, per_page))
      }

      // ── Analytics & reports ─────────────────────────────────────────────
      (Method::Get, ["analytics", "dashboard"]) => respond(self.dashboard(
        q.get_as::<NaiveDate>("from_date"),
        q.get_as::<NaiveDate>("to_date"),
        q.get_as::<i64>("district_id"),
      )),
      (Method::Get, ["reports", "applications"]) => {
        let rows   = self.filtered_applications(&q);
        let report = match q.get_as::<ReportFormat>("format").unwrap_or_default() {
          ReportFormat::Json => ApplicationsReport::Json(rows),
          ReportFormat::Csv => ApplicationsReport::Csv(applications_csv(&rows)?),
          ReportFormat::Excel => ApplicationsReport::Excel(rows),
        };
        report.to_value()
      }

      _ => Err(Error::MockGap { method: request.method, endpoint: request.path().to_owned() }),
    }
  }

  fn filtered_applications(&self, q: &QueryParams) -> Vec<Application> {
    self
      .applications
      .iter()
      .filter(|a| text_matches(q, "status", &a.status.to_string()))
      .filter(|a| id_matches(q, "district_id", a.district_id))
      .cloned()
      .collect()
  }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

fn respond<T: Serialize>(value: T) -> Result<Value> { Ok(serde_json::to_value(value)?) }

fn empty() -> Value { Value::Object(Map::new()) }

fn body<T: DeserializeOwned>(request: &ApiRequest) -> Result<T> {
  let raw = request.body.clone().ok_or_else(|| Error::bad_request("request body is required"))?;
  serde_json::from_value(raw).map_err(|e| Error::bad_request(format!("invalid request body: {e}")))
}

/// Non-numeric ids can never match a record.
fn int_id(raw: &str, entity: &str) -> Result<i64> {
  raw.parse().map_err(|_| Error::not_found(format!("{entity} {raw}")))
}

/// Exact, case-sensitive string match; an absent parameter matches all.
fn text_matches(q: &QueryParams, key: &str, actual: &str) -> bool {
  q.get(key).is_none_or(|wanted| wanted == actual)
}

fn id_matches(q: &QueryParams, key: &str, actual: i64) -> bool {
  q.get_as::<i64>(key).is_none_or(|wanted| wanted == actual)
}

fn opt_id_matches(q: &QueryParams, key: &str, actual: Option<i64>) -> bool {
  q.get_as::<i64>(key).is_none_or(|wanted| actual == Some(wanted))
}

/// Rows whose parent id equals `parent`, or every row when `parent` is absent.
fn children<T: Clone>(
  rows: &[T],
  parent: Option<i64>,
  parent_of: impl Fn(&T) -> i64,
) -> ListResponse<T> {
  ListResponse::unpaged(
    rows.iter().filter(|r| parent.is_none_or(|p| parent_of(r) == p)).cloned().collect(),
  )
}
