//! Development fixtures loaded by [`MockStore::seeded`].

use chrono::{DateTime, NaiveDate, Utc};
use janseva_core::model::{
  Application, ApplicationInput, ApplicationStatus, AssemblyConstituency, Communication,
  CommunicationCategory, CommunicationStatus, CommunicationType, District, Gender, Karyakarta,
  KaryakartaStatus, LocalBody, LocalBodyKind, PollingStation, Scheme, SchemeInput, SchemeStatus,
  State, SyncStatus, Voter, VoterInput, VoterStatus, Ward,
};

use crate::store::MockStore;

fn at(rfc3339: &str) -> DateTime<Utc> { rfc3339.parse().unwrap_or_default() }

fn day(iso: &str) -> Option<NaiveDate> { iso.parse().ok() }

/// Geography of a record: district, assembly, local body, ward, booth.
type Geo = (i64, i64, i64, i64, i64);

const GEO_NEMOM: Geo = (1, 1, 1, 1, 1);
const GEO_NEMOM_2: Geo = (1, 1, 1, 2, 2);
const GEO_VATTIYOORKAVU: Geo = (1, 2, 2, 3, 3);
const GEO_KOLLAM: Geo = (2, 3, 3, 4, 4);
const GEO_ERNAKULAM: Geo = (3, 4, 4, 5, 5);
const GEO_KOZHIKODE: Geo = (4, 5, 5, 6, 6);

pub(crate) fn seed() -> MockStore {
  MockStore {
    states: vec![State { id: 1, name: "Kerala".into(), code: "KL".into() }],
    districts: vec![
      district(1, "Thiruvananthapuram"),
      district(2, "Kollam"),
      district(3, "Ernakulam"),
      district(4, "Kozhikode"),
    ],
    assemblies: vec![
      assembly(1, 1, "Nemom", 135),
      assembly(2, 1, "Vattiyoorkavu", 133),
      assembly(3, 2, "Kollam", 122),
      assembly(4, 3, "Ernakulam", 81),
      assembly(5, 4, "Kozhikode North", 27),
    ],
    local_bodies: vec![
      local_body(1, 1, "Thiruvananthapuram Corporation", LocalBodyKind::Corporation),
      local_body(2, 2, "Vattiyoorkavu Panchayat", LocalBodyKind::Panchayat),
      local_body(3, 3, "Kollam Corporation", LocalBodyKind::Corporation),
      local_body(4, 4, "Kochi Corporation", LocalBodyKind::Corporation),
      local_body(5, 5, "Kozhikode Corporation", LocalBodyKind::Corporation),
    ],
    wards: vec![
      ward(1, 1, "Karamana", 57),
      ward(2, 1, "Nemom", 58),
      ward(3, 2, "Kodunganoor", 4),
      ward(4, 3, "Thevally", 21),
      ward(5, 4, "Ernakulam South", 62),
      ward(6, 5, "Nadakkavu", 33),
    ],
    polling_stations: vec![
      booth(1, 1, "Govt. HSS Karamana", 101, "Karamana, Thiruvananthapuram"),
      booth(2, 2, "LPS Nemom", 102, "Nemom, Thiruvananthapuram"),
      booth(3, 3, "UPS Kodunganoor", 54, "Kodunganoor, Vattiyoorkavu"),
      booth(4, 4, "Govt. Girls HS Thevally", 77, "Thevally, Kollam"),
      booth(5, 5, "St. Teresa's LPS", 88, "Park Avenue, Ernakulam"),
      booth(6, 6, "Govt. Model HSS Nadakkavu", 12, "Nadakkavu, Kozhikode"),
    ],
    applications: vec![
      application(
        1, "HD-2024-0001", "Ravi Kumar", GEO_NEMOM, "SCH-PENSION", ApplicationStatus::Pending,
        "2024-01-10T09:15:00Z",
      ),
      application(
        2, "HD-2024-0002", "Lakshmi Amma", GEO_NEMOM_2, "SCH-HOUSING", ApplicationStatus::Approved,
        "2024-01-18T11:40:00Z",
      ),
      application(
        3, "HD-2024-0003", "Suresh Babu", GEO_VATTIYOORKAVU, "SCH-PENSION",
        ApplicationStatus::InProgress, "2024-02-02T08:05:00Z",
      ),
      application(
        4, "HD-2024-0004", "Fathima Beevi", GEO_KOLLAM, "SCH-SCHOLAR", ApplicationStatus::Pending,
        "2024-02-14T13:30:00Z",
      ),
      application(
        5, "HD-2024-0005", "Joseph Mathew", GEO_ERNAKULAM, "SCH-HEALTH",
        ApplicationStatus::Rejected, "2024-03-01T10:00:00Z",
      ),
      application(
        6, "HD-2024-0006", "Anil Kumar", GEO_ERNAKULAM, "SCH-HOUSING", ApplicationStatus::Pending,
        "2024-03-09T15:20:00Z",
      ),
      application(
        7, "HD-2024-0007", "Sreedevi Nair", GEO_KOZHIKODE, "SCH-HEALTH",
        ApplicationStatus::Approved, "2024-03-21T07:45:00Z",
      ),
      application(
        8, "HD-2024-0008", "Mohammed Rafi", GEO_KOZHIKODE, "SCH-SCHOLAR",
        ApplicationStatus::InProgress, "2024-04-05T12:10:00Z",
      ),
    ],
    voters: vec![
      voter(
        1, 1, "Ravi Kumar", "Gopala Pillai", "KL/01/135/000001", Gender::Male, 52, "1972-04-11",
        GEO_NEMOM,
      ),
      voter(
        2, 2, "Lakshmi Amma", "Raghavan Nair", "KL/01/135/000002", Gender::Female, 67, "1957-09-23",
        GEO_NEMOM_2,
      ),
      voter(
        3, 3, "Suresh Babu", "Krishnan", "KL/01/133/000003", Gender::Male, 45, "1979-01-30",
        GEO_VATTIYOORKAVU,
      ),
      voter(
        4, 4, "Anitha Kumari", "Suresh Babu", "KL/01/133/000004", Gender::Female, 41, "1983-06-14",
        GEO_VATTIYOORKAVU,
      ),
      voter(
        5, 5, "Fathima Beevi", "Abdul Khader", "KL/02/122/000005", Gender::Female, 38, "1986-11-02",
        GEO_KOLLAM,
      ),
      voter(
        6, 6, "Joseph Mathew", "Mathew Thomas", "KL/03/081/000006", Gender::Male, 60, "1964-03-17",
        GEO_ERNAKULAM,
      ),
      voter(
        7, 7, "Anil Kumar", "Narayanan", "KL/03/081/000007", Gender::Male, 29, "1995-08-08",
        GEO_ERNAKULAM,
      ),
      voter(
        8, 8, "Sreedevi Nair", "Madhavan Nair", "KL/04/027/000008", Gender::Female, 34,
        "1990-12-25", GEO_KOZHIKODE,
      ),
      voter(
        9, 9, "Mohammed Rafi", "Moideen Kutty", "KL/04/027/000009", Gender::Male, 22, "2002-05-19",
        GEO_KOZHIKODE,
      ),
      voter(
        10, 10, "Praveen Kumar", "Sasidharan", "KL/01/135/000010", Gender::Male, 19, "2005-02-07",
        GEO_NEMOM,
      ),
      {
        let mut v = voter(
          11, 11, "Kamalakshi", "Kunjan", "KL/02/122/000011", Gender::Female, 88, "1936-07-01",
          GEO_KOLLAM,
        );
        v.status = VoterStatus::Deceased;
        v
      },
      {
        let mut v = voter(
          12, 12, "Thomas Varghese", "Varghese", "KL/03/081/000012", Gender::Male, 55, "1969-10-10",
          GEO_ERNAKULAM,
        );
        v.status = VoterStatus::Inactive;
        v
      },
    ],
    schemes: vec![
      scheme(
        "SCH-PENSION", "Old Age Pension", "Social Security", Some(60), None, Some(1_200_000_000.0),
        SchemeStatus::Active,
      ),
      scheme(
        "SCH-HOUSING", "LIFE Housing Mission", "Housing", Some(18), None, Some(5_000_000_000.0),
        SchemeStatus::Active,
      ),
      scheme(
        "SCH-SCHOLAR", "Post-Matric Scholarship", "Education", Some(15), Some(30),
        Some(300_000_000.0), SchemeStatus::Active,
      ),
      scheme(
        "SCH-HEALTH", "Karunya Health Scheme", "Health", None, None, Some(800_000_000.0),
        SchemeStatus::Expired,
      ),
    ],
    karyakartas: vec![
      karyakarta(
        1, "Demo Karyakarta", "9999900000", "Ward Coordinator", KaryakartaStatus::Active, GEO_NEMOM,
      ),
      karyakarta(
        2, "Ajith Kumar", "9876543210", "Booth Agent", KaryakartaStatus::Active, GEO_VATTIYOORKAVU,
      ),
      karyakarta(
        3, "Shameer K", "9847012345", "Booth Agent", KaryakartaStatus::Inactive, GEO_KOLLAM,
      ),
      karyakarta(
        4, "Rosamma Joseph", "9745098765", "Mandalam Secretary", KaryakartaStatus::Suspended,
        GEO_ERNAKULAM,
      ),
    ],
    communications: vec![
      communication(
        1, CommunicationType::Sms, CommunicationCategory::Announcement,
        "Booth committee meeting on Sunday at 10 AM.", CommunicationStatus::Sent, 240,
      ),
      communication(
        2, CommunicationType::WhatsApp, CommunicationCategory::SchemeUpdate,
        "LIFE Housing applications close on 31 March.", CommunicationStatus::Sent, 1150,
      ),
      communication(
        3, CommunicationType::Push, CommunicationCategory::Alert,
        "Voter list revision starts next week.", CommunicationStatus::Scheduled, 0,
      ),
      communication(
        4, CommunicationType::Email, CommunicationCategory::Event,
        "District convention schedule attached.", CommunicationStatus::Draft, 0,
      ),
      communication(
        5, CommunicationType::VoiceCall, CommunicationCategory::Announcement,
        "Reminder: verify pension applicants' documents.", CommunicationStatus::Failed, 86,
      ),
    ],
  }
}

// ─── Builders ────────────────────────────────────────────────────────────────

fn district(id: i64, name: &str) -> District { District { id, state_id: 1, name: name.into() } }

fn assembly(id: i64, district_id: i64, name: &str, number: u32) -> AssemblyConstituency {
  AssemblyConstituency { id, district_id, name: name.into(), number }
}

fn local_body(id: i64, assembly_id: i64, name: &str, kind: LocalBodyKind) -> LocalBody {
  LocalBody { id, assembly_id, name: name.into(), kind }
}

fn ward(id: i64, local_body_id: i64, name: &str, number: u32) -> Ward {
  Ward { id, local_body_id, name: name.into(), number }
}

fn booth(id: i64, ward_id: i64, name: &str, number: u32, address: &str) -> PollingStation {
  PollingStation { id, ward_id, name: name.into(), number, address: address.into() }
}

fn application(
  id: i64,
  helpdesk_id: &str,
  name: &str,
  (district_id, assembly_id, local_body_id, ward_id, _): Geo,
  scheme_id: &str,
  status: ApplicationStatus,
  created: &str,
) -> Application {
  Application::from_input(
    id,
    ApplicationInput {
      helpdesk_id: helpdesk_id.into(),
      applicant_name: name.into(),
      guardian_name: None,
      mobile_number: format!("94470{id:05}"),
      gender: None,
      age: None,
      house_name: None,
      address: "Kerala".into(),
      pincode: None,
      district_id,
      assembly_id: Some(assembly_id),
      local_body_id: Some(local_body_id),
      ward_id: Some(ward_id),
      scheme_id: scheme_id.into(),
      status,
      sync_status: SyncStatus::Synced,
      remarks: None,
    },
    at(created),
  )
}

#[allow(clippy::too_many_arguments)]
fn voter(
  id: i64,
  serial_no: u32,
  name: &str,
  guardian: &str,
  epic: &str,
  gender: Gender,
  age: u32,
  dob: &str,
  (district_id, assembly_id, local_body_id, ward_id, polling_station_id): Geo,
) -> Voter {
  Voter::from_input(
    id,
    VoterInput {
      serial_no,
      name: name.into(),
      guardian_name: Some(guardian.into()),
      id_card_no: epic.into(),
      gender,
      age,
      date_of_birth: day(dob),
      house_name: None,
      mobile_number: None,
      district_id,
      assembly_id,
      local_body_id,
      ward_id,
      polling_station_id,
      political_inclination: None,
      status: VoterStatus::Active,
    },
    at("2023-11-01T00:00:00Z"),
  )
}

fn scheme(
  id: &str,
  name: &str,
  category: &str,
  min_age: Option<u32>,
  max_age: Option<u32>,
  budget: Option<f64>,
  status: SchemeStatus,
) -> Scheme {
  Scheme::from_input(
    id.into(),
    SchemeInput {
      name: name.into(),
      category: category.into(),
      description: format!("{name} ({category})"),
      min_age,
      max_age,
      gender: None,
      community: None,
      occupation: None,
      budget,
      status,
    },
    at("2023-06-01T00:00:00Z"),
  )
}

fn karyakarta(
  id: i64,
  name: &str,
  mobile: &str,
  role: &str,
  status: KaryakartaStatus,
  (district_id, assembly_id, local_body_id, ward_id, _): Geo,
) -> Karyakarta {
  Karyakarta {
    id,
    name: name.into(),
    mobile_number: mobile.into(),
    role: role.into(),
    status,
    district_id: Some(district_id),
    assembly_id: Some(assembly_id),
    local_body_id: Some(local_body_id),
    ward_id: Some(ward_id),
    created_at: at("2023-09-01T00:00:00Z"),
    updated_at: at("2023-09-01T00:00:00Z"),
  }
}

fn communication(
  id: i64,
  kind: CommunicationType,
  category: CommunicationCategory,
  message: &str,
  status: CommunicationStatus,
  recipients_count: u32,
) -> Communication {
  Communication {
    id,
    kind,
    category,
    message: message.into(),
    status,
    recipients_count,
    created_at: at("2024-03-01T06:30:00Z"),
  }
}
