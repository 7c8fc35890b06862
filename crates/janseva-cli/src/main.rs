//! `janseva`: command-line front end for the Janseva API client.
//!
//! # Usage
//!
//! ```text
//! janseva login 9999900000 123456
//! janseva applications list --status Pending
//! janseva --live --staging voters search --name kumar
//! janseva serve-mock --port 8787
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context as _, bail};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use janseva_cli::{CliConfig, serve};
use janseva_client::{AnyTransport, ApiClient};
use janseva_core::{
  model::{
    ApplicationFilter, ApplicationInput, ApplicationStatus, ApplicationsReport,
    CommunicationCategory, CommunicationFilter, CommunicationType, DashboardFilter,
    KaryakartaFilter, KaryakartaStatus, ReportFormat, ReportRequest, SchemeFilter, SchemeStatus,
    VoterFilter, VoterLookup, VoterStatus,
  },
  search::AdvancedVoterSearch,
};
use janseva_mock::{MockStore, MockTransport};
use janseva_store_sqlite::SqliteKvStore;
use serde::{Serialize, de::DeserializeOwned};
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

type Client = ApiClient<AnyTransport, SqliteKvStore>;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(author, version, about = "Janseva field-app API client")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "janseva.toml", global = true)]
  config: PathBuf,

  /// Serve every call from in-memory fixtures.
  #[arg(long, global = true, conflicts_with = "live")]
  mock: bool,

  /// Send calls to the real backend.
  #[arg(long, global = true)]
  live: bool,

  /// Use the staging base URL instead of production (live mode only).
  #[arg(long, global = true)]
  staging: bool,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Request a one-time password.
  Otp { mobile_number: String },
  /// Log in with an OTP and persist the token.
  Login { mobile_number: String, otp: String },
  /// Forget the persisted token.
  Logout,
  /// Helpdesk applications.
  #[command(subcommand)]
  Applications(ApplicationsCmd),
  /// Voter records.
  #[command(subcommand)]
  Voters(VotersCmd),
  /// Government schemes.
  #[command(subcommand)]
  Schemes(SchemesCmd),
  /// List field workers.
  Karyakartas {
    #[command(flatten)]
    page:     PageArgs,
    #[arg(long)]
    district: Option<i64>,
    #[arg(long)]
    assembly: Option<i64>,
    #[arg(long)]
    status:   Option<KaryakartaStatus>,
    #[arg(long)]
    role:     Option<String>,
  },
  /// List one level of the organisational hierarchy.
  Hierarchy {
    level:  HierarchyLevel,
    /// Id of the immediate parent (ignored for `states`).
    #[arg(long)]
    parent: Option<i64>,
  },
  /// List broadcast communications.
  Communications {
    #[command(flatten)]
    page:     PageArgs,
    /// Channel number, 1-6.
    #[arg(long = "type")]
    kind:     Option<u8>,
    /// Category number, 1-4.
    #[arg(long)]
    category: Option<u8>,
  },
  /// Show the dashboard snapshot.
  Dashboard {
    #[arg(long)]
    from:     Option<NaiveDate>,
    #[arg(long)]
    to:       Option<NaiveDate>,
    #[arg(long)]
    district: Option<i64>,
  },
  /// Export the applications report. CSV is printed raw.
  Report {
    #[arg(long, default_value = "json")]
    format:   ReportFormat,
    #[arg(long)]
    status:   Option<ApplicationStatus>,
    #[arg(long)]
    district: Option<i64>,
  },
  /// Serve the fixture backend over HTTP.
  ServeMock {
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
  },
}

#[derive(Subcommand)]
enum ApplicationsCmd {
  List {
    #[command(flatten)]
    page:     PageArgs,
    #[arg(long)]
    status:   Option<ApplicationStatus>,
    #[arg(long)]
    district: Option<i64>,
  },
  Get { id: i64 },
  /// Create from a JSON file (`-` for stdin).
  Create { file: PathBuf },
  Delete { id: i64 },
}

#[derive(Subcommand)]
enum VotersCmd {
  List {
    #[command(flatten)]
    page:            PageArgs,
    #[arg(long)]
    district:        Option<i64>,
    #[arg(long)]
    assembly:        Option<i64>,
    #[arg(long)]
    local_body:      Option<i64>,
    #[arg(long)]
    ward:            Option<i64>,
    #[arg(long)]
    polling_station: Option<i64>,
    #[arg(long)]
    status:          Option<VoterStatus>,
    #[arg(long)]
    min_age:         Option<u32>,
    #[arg(long)]
    max_age:         Option<u32>,
  },
  /// Look up by name substring or EPIC id.
  Search {
    #[command(flatten)]
    page:    PageArgs,
    #[arg(long)]
    name:    Option<String>,
    #[arg(long)]
    epic_id: Option<String>,
  },
  /// Run an advanced search described by a JSON file (`-` for stdin).
  Advanced { file: PathBuf },
  Get { id: i64 },
}

#[derive(Subcommand)]
enum SchemesCmd {
  List {
    #[command(flatten)]
    page:     PageArgs,
    #[arg(long)]
    status:   Option<SchemeStatus>,
    #[arg(long)]
    category: Option<String>,
  },
  Get { id: String },
}

#[derive(Args, Clone, Copy)]
struct PageArgs {
  #[arg(long)]
  page:     Option<usize>,
  #[arg(long)]
  per_page: Option<usize>,
}

#[derive(Clone, Copy, ValueEnum)]
enum HierarchyLevel {
  States,
  Districts,
  Assemblies,
  LocalBodies,
  Wards,
  PollingStations,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Logs go to stderr; stdout carries command output.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let mut config = CliConfig::load(&cli.config)?;
  if cli.mock {
    config.client.use_mock = true;
  }
  if cli.live {
    config.client.use_mock = false;
  }
  if cli.staging {
    config.client.use_staging = true;
  }

  if let Command::ServeMock { host, port } = cli.command {
    return serve_mock(&config, host, port).await;
  }

  let store_path = config.store_path();
  if let Some(parent) = store_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  let store = SqliteKvStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let client = ApiClient::from_config(&config.client, store).context("failed to build client")?;
  client.ready().await;

  run(&client, cli.command).await
}

async fn run(client: &Client, command: Command) -> anyhow::Result<()> {
  match command {
    Command::Otp { mobile_number } => print_json(&client.request_otp(&mobile_number).await?),
    Command::Login { mobile_number, otp } => print_json(&client.login(&mobile_number, &otp).await?),
    Command::Logout => {
      client.logout().await;
      Ok(())
    }
    Command::Applications(cmd) => applications(client, cmd).await,
    Command::Voters(cmd) => voters(client, cmd).await,
    Command::Schemes(SchemesCmd::List { page, status, category }) => {
      let filter = SchemeFilter { page: page.page, per_page: page.per_page, status, category };
      print_json(&client.get_schemes(&filter).await?)
    }
    Command::Schemes(SchemesCmd::Get { id }) => print_json(&client.get_scheme(&id).await?),
    Command::Karyakartas { page, district, assembly, status, role } => {
      let filter = KaryakartaFilter {
        page: page.page,
        per_page: page.per_page,
        district_id: district,
        assembly_id: assembly,
        status,
        role,
      };
      print_json(&client.get_karyakartas(&filter).await?)
    }
    Command::Hierarchy { level, parent } => match level {
      HierarchyLevel::States => print_json(&client.get_states().await?),
      HierarchyLevel::Districts => print_json(&client.get_districts(parent).await?),
      HierarchyLevel::Assemblies => print_json(&client.get_assemblies(parent).await?),
      HierarchyLevel::LocalBodies => print_json(&client.get_local_bodies(parent).await?),
      HierarchyLevel::Wards => print_json(&client.get_wards(parent).await?),
      HierarchyLevel::PollingStations => print_json(&client.get_polling_stations(parent).await?),
    },
    Command::Communications { page, kind, category } => {
      let filter = CommunicationFilter {
        page: page.page,
        per_page: page.per_page,
        kind: kind.map(CommunicationType::try_from).transpose().map_err(anyhow::Error::msg)?,
        category: category
          .map(CommunicationCategory::try_from)
          .transpose()
          .map_err(anyhow::Error::msg)?,
      };
      print_json(&client.get_communications(&filter).await?)
    }
    Command::Dashboard { from, to, district } => {
      let filter = DashboardFilter { from_date: from, to_date: to, district_id: district };
      print_json(&client.get_dashboard(&filter).await?)
    }
    Command::Report { format, status, district } => {
      let request = ReportRequest { format, status, district_id: district };
      match client.get_applications_report(&request).await? {
        ApplicationsReport::Csv(text) => {
          print!("{text}");
          if !text.ends_with('\n') {
            println!();
          }
          Ok(())
        }
        ApplicationsReport::Json(rows) | ApplicationsReport::Excel(rows) => print_json(&rows),
      }
    }
    Command::ServeMock { .. } => bail!("serve-mock does not go through the client"),
  }
}

async fn applications(client: &Client, cmd: ApplicationsCmd) -> anyhow::Result<()> {
  match cmd {
    ApplicationsCmd::List { page, status, district } => {
      let filter = ApplicationFilter {
        page: page.page,
        per_page: page.per_page,
        status,
        district_id: district,
      };
      print_json(&client.get_applications(&filter).await?)
    }
    ApplicationsCmd::Get { id } => print_json(&client.get_application(id).await?),
    ApplicationsCmd::Create { file } => {
      let input: ApplicationInput = read_json(&file)?;
      print_json(&client.create_application(&input).await?)
    }
    ApplicationsCmd::Delete { id } => {
      client.delete_application(id).await?;
      tracing::info!(id, "application deleted");
      Ok(())
    }
  }
}

async fn voters(client: &Client, cmd: VotersCmd) -> anyhow::Result<()> {
  match cmd {
    VotersCmd::List {
      page,
      district,
      assembly,
      local_body,
      ward,
      polling_station,
      status,
      min_age,
      max_age,
    } => {
      let filter = VoterFilter {
        page: page.page,
        per_page: page.per_page,
        district_id: district,
        assembly_id: assembly,
        local_body_id: local_body,
        ward_id: ward,
        polling_station_id: polling_station,
        status,
        min_age,
        max_age,
      };
      print_json(&client.get_voters(&filter).await?)
    }
    VotersCmd::Search { page, name, epic_id } => {
      let lookup = VoterLookup { name, epic_id, page: page.page, per_page: page.per_page };
      if !lookup.is_actionable() {
        bail!("voter search needs --name or --epic-id");
      }
      print_json(&client.search_voters(&lookup).await?)
    }
    VotersCmd::Advanced { file } => {
      let search: AdvancedVoterSearch = read_json(&file)?;
      print_json(&client.advanced_search_voters(&search).await?)
    }
    VotersCmd::Get { id } => print_json(&client.get_voter(id).await?),
  }
}

async fn serve_mock(
  config: &CliConfig,
  host: Option<String>,
  port: Option<u16>,
) -> anyhow::Result<()> {
  let host    = host.unwrap_or_else(|| config.serve.host.clone());
  let port    = port.unwrap_or(config.serve.port);
  let address = format!("{host}:{port}");

  let transport =
    MockTransport::new(MockStore::seeded()).with_latency(config.client.mock_latency());
  let app = serve::router(transport);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;
  Ok(())
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

/// Parse JSON from `path`, or from stdin when `path` is `-`.
fn read_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
  let raw = if path == Path::new("-") {
    std::io::read_to_string(std::io::stdin()).context("reading stdin")?
  } else {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
  };
  serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}
