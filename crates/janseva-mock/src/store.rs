//! [`MockStore`]: process-local arrays standing in for the backend.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use janseva_core::{
  Error, Result,
  model::{
    Application, ApplicationInput, ApplicationStatus, AssemblyConstituency, Communication,
    DashboardAnalytics, District, DistrictCount, Karyakarta, KaryakartaStatus, LocalBody,
    LoginRequest, LoginResponse, OtpRequest, OtpResponse, PollingStation, Scheme, SchemeInput,
    SchemeStatus, State, StatusCount, Voter, VoterInput, Ward,
  },
  search::{AdvancedVoterSearch, Combinator, DateField},
};
use uuid::Uuid;

use crate::matching::name_matches;

pub const OTP_VALIDITY_MINUTES: i64 = 5;
pub const TOKEN_VALIDITY_HOURS: i64 = 24;

/// Permissions granted to every mock login.
pub const MOCK_PERMISSIONS: [&str; 6] = [
  "applications:read",
  "applications:write",
  "voters:read",
  "voters:write",
  "schemes:read",
  "analytics:read",
];

/// Owns every fixture array. Mutations happen in place and last as long as
/// the store does.
#[derive(Debug, Clone, Default)]
pub struct MockStore {
  pub(crate) states:           Vec<State>,
  pub(crate) districts:        Vec<District>,
  pub(crate) assemblies:       Vec<AssemblyConstituency>,
  pub(crate) local_bodies:     Vec<LocalBody>,
  pub(crate) wards:            Vec<Ward>,
  pub(crate) polling_stations: Vec<PollingStation>,
  pub(crate) applications:     Vec<Application>,
  pub(crate) voters:           Vec<Voter>,
  pub(crate) schemes:          Vec<Scheme>,
  pub(crate) karyakartas:      Vec<Karyakarta>,
  pub(crate) communications:   Vec<Communication>,
}

impl MockStore {
  /// A store with no data at all.
  pub fn empty() -> Self { Self::default() }

  /// A store populated with the development fixtures.
  pub fn seeded() -> Self { crate::fixtures::seed() }

  pub fn applications(&self) -> &[Application] { &self.applications }

  pub fn voters(&self) -> &[Voter] { &self.voters }

  pub fn schemes(&self) -> &[Scheme] { &self.schemes }

  pub fn karyakartas(&self) -> &[Karyakarta] { &self.karyakartas }

  // ── Auth ──────────────────────────────────────────────────────────────────

  pub(crate) fn request_otp(&self, req: &OtpRequest, now: DateTime<Utc>) -> Result<OtpResponse> {
    if req.mobile_number.trim().is_empty() {
      return Err(Error::bad_request("mobile_number is required"));
    }
    Ok(OtpResponse {
      message:    "OTP sent".into(),
      expires_at: now + Duration::minutes(OTP_VALIDITY_MINUTES),
    })
  }

  /// Any OTP is accepted. Unknown numbers get a synthetic identity that is
  /// not added to the karyakarta list.
  pub(crate) fn login(&self, req: &LoginRequest, now: DateTime<Utc>) -> Result<LoginResponse> {
    if req.mobile_number.trim().is_empty() {
      return Err(Error::bad_request("mobile_number is required"));
    }
    let user = self
      .karyakartas
      .iter()
      .find(|k| k.mobile_number == req.mobile_number)
      .cloned()
      .unwrap_or_else(|| Karyakarta {
        id:            next_id(self.karyakartas.iter().map(|k| k.id)),
        name:          "Field Volunteer".into(),
        mobile_number: req.mobile_number.clone(),
        role:          "Booth Agent".into(),
        status:        KaryakartaStatus::Active,
        district_id:   None,
        assembly_id:   None,
        local_body_id: None,
        ward_id:       None,
        created_at:    now,
        updated_at:    now,
      });

    Ok(LoginResponse {
      token: format!("mock-{}", Uuid::new_v4().simple()),
      expires_at: now + Duration::hours(TOKEN_VALIDITY_HOURS),
      user,
      permissions: MOCK_PERMISSIONS.iter().map(|p| (*p).to_owned()).collect(),
    })
  }

  // ── Applications ──────────────────────────────────────────────────────────

  pub(crate) fn application(&self, id: i64) -> Result<&Application> {
    self
      .applications
      .iter()
      .find(|a| a.id == id)
      .ok_or_else(|| Error::not_found(format!("Application {id}")))
  }

  pub(crate) fn create_application(
    &mut self,
    input: ApplicationInput,
    now: DateTime<Utc>,
  ) -> Application {
    let id  = next_id(self.applications.iter().map(|a| a.id));
    let app = Application::from_input(id, input, now);
    self.applications.push(app.clone());
    app
  }

  pub(crate) fn update_application(
    &mut self,
    id: i64,
    input: ApplicationInput,
    now: DateTime<Utc>,
  ) -> Result<Application> {
    let app = self
      .applications
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or_else(|| Error::not_found(format!("Application {id}")))?;
    app.replace(input, now);
    Ok(app.clone())
  }

  pub(crate) fn delete_application(&mut self, id: i64) -> Result<()> {
    remove_where(&mut self.applications, |a| a.id == id)
      .ok_or_else(|| Error::not_found(format!("Application {id}")))
  }

  // ── Voters ────────────────────────────────────────────────────────────────

  pub(crate) fn voter(&self, id: i64) -> Result<&Voter> {
    self
      .voters
      .iter()
      .find(|v| v.id == id)
      .ok_or_else(|| Error::not_found(format!("Voter {id}")))
  }

  pub(crate) fn create_voter(&mut self, input: VoterInput, now: DateTime<Utc>) -> Voter {
    let id    = next_id(self.voters.iter().map(|v| v.id));
    let voter = Voter::from_input(id, input, now);
    self.voters.push(voter.clone());
    voter
  }

  pub(crate) fn update_voter(
    &mut self,
    id: i64,
    input: VoterInput,
    now: DateTime<Utc>,
  ) -> Result<Voter> {
    let voter = self
      .voters
      .iter_mut()
      .find(|v| v.id == id)
      .ok_or_else(|| Error::not_found(format!("Voter {id}")))?;
    voter.replace(input, now);
    Ok(voter.clone())
  }

  pub(crate) fn delete_voter(&mut self, id: i64) -> Result<()> {
    remove_where(&mut self.voters, |v| v.id == id)
      .ok_or_else(|| Error::not_found(format!("Voter {id}")))
  }

  /// Simple lookup: name substring or EPIC substring, both case-insensitive.
  /// With neither term every voter matches.
  pub(crate) fn lookup_voters(&self, name: Option<&str>, epic_id: Option<&str>) -> Vec<Voter> {
    let name = name.map(str::to_lowercase);
    let epic = epic_id.map(str::to_lowercase);
    if name.is_none() && epic.is_none() {
      return self.voters.clone();
    }
    self
      .voters
      .iter()
      .filter(|v| {
        let by_name = name.as_deref().is_some_and(|n| v.name.to_lowercase().contains(n));
        let by_epic = epic.as_deref().is_some_and(|e| v.id_card_no.to_lowercase().contains(e));
        by_name || by_epic
      })
      .cloned()
      .collect()
  }

  pub(crate) fn advanced_search(&self, search: &AdvancedVoterSearch) -> Vec<Voter> {
    self.voters.iter().filter(|v| advanced_match(v, search)).cloned().collect()
  }

  // ── Schemes ───────────────────────────────────────────────────────────────

  pub(crate) fn scheme(&self, id: &str) -> Result<&Scheme> {
    self
      .schemes
      .iter()
      .find(|s| s.id == id)
      .ok_or_else(|| Error::not_found(format!("Scheme {id}")))
  }

  pub(crate) fn create_scheme(&mut self, input: SchemeInput, now: DateTime<Utc>) -> Scheme {
    let id     = format!("SCH-{}", &Uuid::new_v4().simple().to_string()[..10].to_uppercase());
    let scheme = Scheme::from_input(id, input, now);
    self.schemes.push(scheme.clone());
    scheme
  }

  pub(crate) fn update_scheme(
    &mut self,
    id: &str,
    input: SchemeInput,
    now: DateTime<Utc>,
  ) -> Result<Scheme> {
    let scheme = self
      .schemes
      .iter_mut()
      .find(|s| s.id == id)
      .ok_or_else(|| Error::not_found(format!("Scheme {id}")))?;
    scheme.replace(input, now);
    Ok(scheme.clone())
  }

  pub(crate) fn delete_scheme(&mut self, id: &str) -> Result<()> {
    remove_where(&mut self.schemes, |s| s.id == id)
      .ok_or_else(|| Error::not_found(format!("Scheme {id}")))
  }

  // ── Analytics ─────────────────────────────────────────────────────────────

  /// Recompute the dashboard from the current application set.
  pub(crate) fn dashboard(
    &self,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    district_id: Option<i64>,
  ) -> DashboardAnalytics {
    let in_scope: Vec<&Application> = self
      .applications
      .iter()
      .filter(|a| district_id.is_none_or(|d| a.district_id == d))
      .filter(|a| {
        let day = a.created_at.date_naive();
        from.is_none_or(|f| day >= f) && to.is_none_or(|t| day <= t)
      })
      .collect();

    let count_of =
      |status: ApplicationStatus| in_scope.iter().filter(|a| a.status == status).count();
    let applications_by_status = ApplicationStatus::ALL
      .iter()
      .map(|&status| StatusCount { status, count: count_of(status) })
      .collect();

    let mut per_district: BTreeMap<i64, usize> = BTreeMap::new();
    for app in &in_scope {
      *per_district.entry(app.district_id).or_default() += 1;
    }
    let applications_by_district = per_district
      .into_iter()
      .map(|(id, count)| DistrictCount {
        district_id: id,
        district_name: self
          .districts
          .iter()
          .find(|d| d.id == id)
          .map_or_else(|| format!("District {id}"), |d| d.name.clone()),
        count,
      })
      .collect();

    DashboardAnalytics {
      total_applications: in_scope.len(),
      pending_applications: count_of(ApplicationStatus::Pending),
      in_progress_applications: count_of(ApplicationStatus::InProgress),
      approved_applications: count_of(ApplicationStatus::Approved),
      rejected_applications: count_of(ApplicationStatus::Rejected),
      total_voters: self
        .voters
        .iter()
        .filter(|v| district_id.is_none_or(|d| v.district_id == d))
        .count(),
      active_schemes: self.schemes.iter().filter(|s| s.status == SchemeStatus::Active).count(),
      active_karyakartas: self
        .karyakartas
        .iter()
        .filter(|k| k.status == KaryakartaStatus::Active)
        .filter(|k| district_id.is_none_or(|d| k.district_id == Some(d)))
        .count(),
      applications_by_status,
      applications_by_district,
    }
  }
}

/// Evaluate every criterion the search fills in and combine the results.
fn advanced_match(voter: &Voter, search: &AdvancedVoterSearch) -> bool {
  let mut checks: Vec<bool> = Vec::new();

  if let Some(name) = search.name.as_ref().filter(|n| !n.value.trim().is_empty()) {
    checks.push(name_matches(&voter.name, name));
  }
  if !search.epic_ids.is_empty() {
    checks.push(search.epic_ids.iter().any(|e| e.eq_ignore_ascii_case(&voter.id_card_no)));
  }
  if let Some(ages) = &search.age_range {
    checks.push(ages.contains(voter.age));
  }
  if let Some(range) = &search.date_range {
    let date = match range.field {
      DateField::CreatedAt => Some(voter.created_at.date_naive()),
      DateField::UpdatedAt => Some(voter.updated_at.date_naive()),
      DateField::DateOfBirth => voter.date_of_birth,
    };
    checks.push(date.is_some_and(|d| range.contains(d)));
  }
  for (ids, value) in [
    (&search.district_ids, voter.district_id),
    (&search.assembly_ids, voter.assembly_id),
    (&search.local_body_ids, voter.local_body_id),
    (&search.ward_ids, voter.ward_id),
    (&search.polling_station_ids, voter.polling_station_id),
  ] {
    if !ids.is_empty() {
      checks.push(ids.contains(&value));
    }
  }
  if let Some(status) = search.status {
    checks.push(voter.status == status);
  }

  match search.combine {
    Combinator::And => checks.iter().all(|c| *c),
    Combinator::Or => checks.is_empty() || checks.iter().any(|c| *c),
  }
}

/// Next integer id: one past the current maximum, starting at 1.
pub(crate) fn next_id(ids: impl Iterator<Item = i64>) -> i64 { ids.max().unwrap_or(0) + 1 }

fn remove_where<T>(items: &mut Vec<T>, pred: impl Fn(&T) -> bool) -> Option<()> {
  let idx = items.iter().position(pred)?;
  items.remove(idx);
  Some(())
}
