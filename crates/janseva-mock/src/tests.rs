//! Router tests against independent seeded stores.

use chrono::{DateTime, Duration, Utc};
use janseva_core::{
  ApiRequest, Error, ListResponse, Method, Transport,
  model::{
    Application, ApplicationStatus, DashboardAnalytics, District, Karyakarta, LoginResponse,
    OtpResponse, PollingStation, Scheme, SchemeInput, SchemeStatus, Voter, VoterStatus,
  },
  search::{AdvancedVoterSearch, AgeRange, Combinator, DateField, DateRange, MatchType, NameCriterion},
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::{MockStore, MockTransport};

fn now() -> DateTime<Utc> { "2024-06-01T12:00:00Z".parse().unwrap() }

fn call<T: DeserializeOwned>(store: &mut MockStore, req: ApiRequest) -> T {
  let value = store.handle_at(&req, now()).expect("mock call");
  serde_json::from_value(value).expect("response shape")
}

fn get<T: DeserializeOwned>(store: &mut MockStore, endpoint: &str) -> T {
  call(store, ApiRequest::get(endpoint))
}

// ─── Auth ────────────────────────────────────────────────────────────────────

#[test]
fn otp_expires_five_minutes_out() {
  let mut s = MockStore::seeded();
  let resp: OtpResponse = call(
    &mut s,
    ApiRequest::post("/auth/otp/request").json(&json!({ "mobile_number": "9876543210" })).unwrap(),
  );
  assert_eq!(resp.message, "OTP sent");
  assert_eq!(resp.expires_at, now() + Duration::minutes(5));
}

#[test]
fn login_accepts_any_otp_and_returns_fixture_user() {
  let mut s = MockStore::seeded();
  let resp: LoginResponse = call(
    &mut s,
    ApiRequest::post("/auth/login")
      .json(&json!({ "mobile_number": "9999900000", "otp": "000000" }))
      .unwrap(),
  );
  assert!(resp.token.starts_with("mock-"));
  assert_eq!(resp.user.mobile_number, "9999900000");
  assert_eq!(resp.user.id, 1);
  assert!(resp.permissions.contains(&"applications:read".to_string()));
  assert!(resp.expires_at > now());
}

#[test]
fn login_with_unknown_number_gets_synthetic_user() {
  let mut s = MockStore::seeded();
  let before = s.karyakartas().len();
  let resp: LoginResponse = call(
    &mut s,
    ApiRequest::post("/auth/login").json(&json!({ "mobile_number": "9000011111", "otp": "1" })).unwrap(),
  );
  assert_eq!(resp.user.mobile_number, "9000011111");
  assert_eq!(s.karyakartas().len(), before);
}

#[test]
fn login_without_body_is_bad_request() {
  let mut s = MockStore::seeded();
  let err = s.handle_at(&ApiRequest::post("/auth/login"), now()).unwrap_err();
  assert_eq!(err.status(), Some(400));
}

// ─── Applications ────────────────────────────────────────────────────────────

#[test]
fn status_filter_is_exact_and_case_sensitive() {
  let mut s = MockStore::seeded();
  let pending: ListResponse<Application> = get(&mut s, "/applications?status=Pending");
  assert_eq!(pending.data.len(), 3);
  assert!(pending.data.iter().all(|a| a.status == ApplicationStatus::Pending));

  let lower: ListResponse<Application> = get(&mut s, "/applications?status=pending");
  assert!(lower.data.is_empty());

  let partial: ListResponse<Application> = get(&mut s, "/applications?status=Pend");
  assert!(partial.data.is_empty());

  let in_progress: ListResponse<Application> = get(&mut s, "/applications?status=In_Progress");
  assert_eq!(in_progress.data.len(), 2);
}

#[test]
fn applications_paginate_and_filter_by_district() {
  let mut s = MockStore::seeded();
  let page: ListResponse<Application> = get(&mut s, "/applications?page=2&per_page=3");
  let meta = page.meta.unwrap();
  assert_eq!((meta.page, meta.per_page, meta.total, meta.total_pages), (2, 3, 8, 3));
  assert_eq!(page.data.iter().map(|a| a.id).collect::<Vec<_>>(), vec![4, 5, 6]);

  let beyond: ListResponse<Application> = get(&mut s, "/applications?page=9&per_page=3");
  assert!(beyond.data.is_empty());
  assert_eq!(beyond.meta.unwrap().total_pages, 3);

  let ernakulam: ListResponse<Application> = get(&mut s, "/applications?district_id=3");
  assert_eq!(ernakulam.data.len(), 2);
}

#[test]
fn application_create_update_delete() {
  let mut s = MockStore::seeded();
  let mut input = s.applications()[0].input();
  input.helpdesk_id = "HD-NEW".into();

  let created: Application =
    call(&mut s, ApiRequest::post("/applications").json(&input).unwrap());
  assert_eq!(created.id, 9);
  assert_eq!(created.created_at, now());
  assert_eq!(created.updated_at, now());
  assert_eq!(created.input(), input);

  input.status = ApplicationStatus::Approved;
  let later = now() + Duration::minutes(10);
  let req = ApiRequest::put("/applications/9").json(&input).unwrap();
  let updated: Application =
    serde_json::from_value(s.handle_at(&req, later).unwrap()).unwrap();
  assert_eq!(updated.status, ApplicationStatus::Approved);
  assert_eq!(updated.created_at, created.created_at);
  assert_eq!(updated.updated_at, later);

  let deleted = s.handle_at(&ApiRequest::delete("/applications/9"), now()).unwrap();
  assert_eq!(deleted, json!({}));
  let err = s.handle_at(&ApiRequest::get("/applications/9"), now()).unwrap_err();
  assert_eq!(err.status(), Some(404));
  assert_eq!(err.to_string(), "Application 9 not found");
}

#[test]
fn ids_follow_the_current_maximum() {
  let mut s = MockStore::empty();
  let input = MockStore::seeded().applications()[0].input();
  let first: Application = call(&mut s, ApiRequest::post("/applications").json(&input).unwrap());
  let second: Application = call(&mut s, ApiRequest::post("/applications").json(&input).unwrap());
  assert_eq!((first.id, second.id), (1, 2));
}

// ─── Voters ──────────────────────────────────────────────────────────────────

#[test]
fn voter_list_filters_geography_status_and_age() {
  let mut s = MockStore::seeded();
  let ward: ListResponse<Voter> = get(&mut s, "/voters?ward_id=1");
  assert_eq!(ward.data.iter().map(|v| v.id).collect::<Vec<_>>(), vec![1, 10]);

  let adults: ListResponse<Voter> = get(&mut s, "/voters?min_age=30&max_age=45&status=Active");
  assert!(adults.data.iter().all(|v| (30..=45).contains(&v.age)));
  assert!(adults.data.iter().all(|v| v.status == VoterStatus::Active));
  assert_eq!(adults.data.len(), 4);

  let deceased: ListResponse<Voter> = get(&mut s, "/voters?status=Deceased");
  assert_eq!(deceased.data.len(), 1);
}

#[test]
fn lookup_by_name_is_case_insensitive_substring() {
  let mut s = MockStore::seeded();
  let found: ListResponse<Voter> = get(&mut s, "/voters/search?name=kumar");
  let names: Vec<_> = found.data.iter().map(|v| v.name.as_str()).collect();
  assert_eq!(names, vec!["Ravi Kumar", "Anitha Kumari", "Anil Kumar", "Praveen Kumar"]);
}

#[test]
fn lookup_by_epic_or_nothing() {
  let mut s = MockStore::seeded();
  let found: ListResponse<Voter> = get(&mut s, "/voters/search?epic_id=kl%2F04%2F027%2F000009");
  assert_eq!(found.data.len(), 1);
  assert_eq!(found.data[0].name, "Mohammed Rafi");

  // No terms: the router does not guard, everything comes back.
  let all: ListResponse<Voter> = get(&mut s, "/voters/search");
  assert_eq!(all.meta.unwrap().total, 12);
}

fn advanced(s: &mut MockStore, search: &AdvancedVoterSearch) -> Vec<i64> {
  let resp: ListResponse<Voter> =
    call(s, ApiRequest::post("/voters/search/advanced").json(search).unwrap());
  resp.data.into_iter().map(|v| v.id).collect()
}

#[test]
fn advanced_search_and_combines_criteria() {
  let mut s = MockStore::seeded();
  let search = AdvancedVoterSearch {
    name: Some(NameCriterion { value: "kumar".into(), match_type: MatchType::EndsWith }),
    age_range: Some(AgeRange { min: Some(25), max: None }),
    ..Default::default()
  };
  assert_eq!(advanced(&mut s, &search), vec![1, 7]);
}

#[test]
fn advanced_search_or_unions_criteria() {
  let mut s = MockStore::seeded();
  let search = AdvancedVoterSearch {
    epic_ids: vec!["KL/02/122/000005".into()],
    ward_ids: vec![6],
    combine: Combinator::Or,
    ..Default::default()
  };
  assert_eq!(advanced(&mut s, &search), vec![5, 8, 9]);
}

#[test]
fn advanced_search_date_of_birth_range_and_status() {
  let mut s = MockStore::seeded();
  let search = AdvancedVoterSearch {
    date_range: Some(DateRange {
      field: DateField::DateOfBirth,
      from:  "1990-01-01".parse().ok(),
      to:    None,
    }),
    status: Some(VoterStatus::Active),
    ..Default::default()
  };
  assert_eq!(advanced(&mut s, &search), vec![7, 8, 9, 10]);
}

#[test]
fn advanced_search_without_criteria_matches_everyone() {
  let mut s = MockStore::seeded();
  let ids = advanced(&mut s, &AdvancedVoterSearch { per_page: Some(50), ..Default::default() });
  assert_eq!(ids.len(), 12);
}

#[test]
fn advanced_search_fuzzy_name() {
  let mut s = MockStore::seeded();
  let search = AdvancedVoterSearch {
    name: Some(NameCriterion { value: "sreedvi".into(), match_type: MatchType::Fuzzy }),
    ..Default::default()
  };
  assert_eq!(advanced(&mut s, &search), vec![8]);
}

// ─── Schemes ─────────────────────────────────────────────────────────────────

#[test]
fn scheme_crud_uses_string_ids() {
  let mut s = MockStore::seeded();
  let input = SchemeInput {
    name:        "Fishermen Welfare".into(),
    category:    "Livelihood".into(),
    description: "Support for coastal families".into(),
    min_age:     Some(18),
    max_age:     None,
    gender:      None,
    community:   None,
    occupation:  Some("Fisher".into()),
    budget:      Some(25_000_000.0),
    status:      SchemeStatus::Active,
  };
  let created: Scheme = call(&mut s, ApiRequest::post("/schemes").json(&input).unwrap());
  assert!(created.id.starts_with("SCH-"));
  assert!(s.schemes().iter().filter(|x| x.id == created.id).count() == 1);

  let fetched: Scheme = get(&mut s, &format!("/schemes/{}", created.id));
  assert_eq!(fetched, created);

  let active: ListResponse<Scheme> = get(&mut s, "/schemes?status=Active&category=livelihood");
  assert_eq!(active.data.len(), 1);

  s.handle_at(&ApiRequest::delete(format!("/schemes/{}", created.id)), now()).unwrap();
  let err = s.handle_at(&ApiRequest::get(format!("/schemes/{}", created.id)), now()).unwrap_err();
  assert_eq!(err.status(), Some(404));
}

// ─── Karyakartas, hierarchy, communications ──────────────────────────────────

#[test]
fn karyakarta_filters() {
  let mut s = MockStore::seeded();
  let agents: ListResponse<Karyakarta> = get(&mut s, "/karyakartas?role=booth%20agent");
  assert_eq!(agents.data.len(), 2);
  let active: ListResponse<Karyakarta> = get(&mut s, "/karyakartas?status=Active&district_id=1");
  assert_eq!(active.data.len(), 2);
}

#[test]
fn hierarchy_filters_by_immediate_parent_only() {
  let mut s = MockStore::seeded();
  let all: ListResponse<District> = get(&mut s, "/hierarchy/districts");
  assert_eq!(all.data.len(), 4);
  assert!(all.meta.is_none());

  let none: ListResponse<District> = get(&mut s, "/hierarchy/districts?state_id=2");
  assert!(none.data.is_empty());

  let booths: ListResponse<PollingStation> = get(&mut s, "/hierarchy/polling-stations?ward_id=3");
  assert_eq!(booths.data.len(), 1);
  assert_eq!(booths.data[0].name, "UPS Kodunganoor");
}

#[test]
fn communications_filter_by_numeric_type() {
  let mut s = MockStore::seeded();
  let resp: ListResponse<Value> = get(&mut s, "/communications?type=2");
  assert_eq!(resp.data.len(), 1);
  assert_eq!(resp.data[0]["type"], json!(2));

  let announcements: ListResponse<Value> = get(&mut s, "/communications?category=1");
  assert_eq!(announcements.data.len(), 2);
}

// ─── Analytics & reports ─────────────────────────────────────────────────────

#[test]
fn dashboard_is_recomputed_from_applications() {
  let mut s = MockStore::seeded();
  let dash: DashboardAnalytics = get(&mut s, "/analytics/dashboard");
  assert_eq!(dash.total_applications, 8);
  assert_eq!(dash.pending_applications, 3);
  assert_eq!(dash.in_progress_applications, 2);
  assert_eq!(dash.approved_applications, 2);
  assert_eq!(dash.rejected_applications, 1);
  assert_eq!(dash.applications_by_status.len(), 4);
  assert_eq!(dash.applications_by_district.len(), 4);
  assert_eq!(dash.applications_by_district[0].district_name, "Thiruvananthapuram");
  assert_eq!(dash.applications_by_district[0].count, 3);
  assert_eq!(dash.active_schemes, 3);
  assert_eq!(dash.active_karyakartas, 2);

  let mut input = s.applications()[0].input();
  input.status = ApplicationStatus::Rejected;
  s.handle_at(&ApiRequest::put("/applications/1").json(&input).unwrap(), now()).unwrap();
  let dash: DashboardAnalytics = get(&mut s, "/analytics/dashboard");
  assert_eq!(dash.pending_applications, 2);
  assert_eq!(dash.rejected_applications, 2);
}

#[test]
fn dashboard_scopes_by_date_and_district() {
  let mut s = MockStore::seeded();
  let dash: DashboardAnalytics =
    get(&mut s, "/analytics/dashboard?from_date=2024-03-01&to_date=2024-03-31&district_id=3");
  assert_eq!(dash.total_applications, 2);
  assert_eq!(dash.total_voters, 3);
  assert_eq!(dash.applications_by_district.len(), 1);
  assert_eq!(dash.applications_by_district[0].district_id, 3);
}

#[test]
fn report_formats() {
  let mut s = MockStore::seeded();
  let json_report = s
    .handle_at(&ApiRequest::get("/reports/applications?format=json&status=Approved"), now())
    .unwrap();
  assert_eq!(json_report["data"].as_array().unwrap().len(), 2);

  let csv = s
    .handle_at(&ApiRequest::get("/reports/applications?format=csv&status=Approved"), now())
    .unwrap();
  assert_eq!(
    csv,
    json!("id,helpdesk_id,name,status\n2,HD-2024-0002,Lakshmi Amma,Approved\n7,HD-2024-0007,Sreedevi Nair,Approved\n")
  );

  let excel = s.handle_at(&ApiRequest::get("/reports/applications?format=excel"), now()).unwrap();
  assert_eq!(excel.as_array().unwrap().len(), 8);
}

// ─── Gaps ────────────────────────────────────────────────────────────────────

#[test]
fn unmatched_route_is_a_mock_gap() {
  let mut s = MockStore::seeded();
  let err = s.handle_at(&ApiRequest::new(Method::Delete, "/karyakartas/1"), now()).unwrap_err();
  match err {
    Error::MockGap { method, endpoint } => {
      assert_eq!(method, Method::Delete);
      assert_eq!(endpoint, "/karyakartas/1");
    }
    other => panic!("expected mock gap, got {other:?}"),
  }
  assert!(matches!(
    s.handle_at(&ApiRequest::get("/auth/login"), now()),
    Err(Error::MockGap { .. })
  ));
}

// ─── Transport ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn transport_waits_out_its_latency() {
  let latency = std::time::Duration::from_millis(30);
  let transport = MockTransport::new(MockStore::seeded()).with_latency(latency);
  let started = std::time::Instant::now();
  let value = transport.send(ApiRequest::get("/hierarchy/states")).await.unwrap();
  assert!(started.elapsed() >= latency);
  assert_eq!(value["data"][0]["code"], json!("KL"));
}

#[tokio::test]
async fn transport_clones_share_a_store() {
  let transport = MockTransport::new(MockStore::seeded()).with_latency(std::time::Duration::ZERO);
  let other = transport.clone();
  transport.send(ApiRequest::delete("/voters/12")).await.unwrap();
  assert_eq!(other.inspect(|s| s.voters().len()), 11);
}
