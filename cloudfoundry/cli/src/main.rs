//! Command line access to the Cloud Controller v2 API.
//!
//! Connection settings come from `CF_API_URL`, `CF_ACCESS_TOKEN` and
//! `CF_TIMEOUT_SECS`, optionally loaded from a `.env` file. Results are
//! printed to stdout as JSON; logs go to stderr.

use clap::{Parser, Subcommand};
use cloudfoundry_client::config::API_URL_VAR;
use cloudfoundry_client::v2::applications::{
    AssociateApplicationRouteRequest, CopyApplicationRequest,
};
use cloudfoundry_client::v2::organizations::{
    AssociateAuditorRequest, AssociateBillingManagerRequest, AssociateManagerRequest,
    GetOrganizationRequest, ListOrganizationsRequest, RemoveAuditorRequest,
};
use cloudfoundry_client::v2::service_usage_events::{
    GetServiceUsageEventRequest, ListServiceUsageEventsRequest,
    PurgeAndReseedServiceUsageEventsRequest,
};
use cloudfoundry_client::{
    ClientConfig, CloudFoundryClient, ConfigError, InvocationError, OrderDirection,
};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::{filter::EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cf-client", version)]
#[command(about = "Call the Cloud Foundry Cloud Controller v2 API", long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    log_verbosity: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    /// API root, overriding CF_API_URL
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Organization operations
    #[command(subcommand)]
    Orgs(OrgCommands),

    /// Application operations
    #[command(subcommand)]
    Apps(AppCommands),

    /// Service usage event operations
    #[command(subcommand)]
    UsageEvents(UsageEventCommands),
}

#[derive(Subcommand)]
enum OrgCommands {
    /// List organizations
    List {
        /// Only organizations with this name (repeatable)
        #[arg(long = "name", value_name = "NAME")]
        names: Vec<String>,

        /// Only organizations with this status (repeatable)
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<String>,

        /// Only organizations this user audits (repeatable)
        #[arg(long = "auditor", value_name = "AUDITOR_ID")]
        auditor_ids: Vec<String>,

        /// Only organizations containing this space (repeatable)
        #[arg(long = "space", value_name = "SPACE_ID")]
        space_ids: Vec<String>,

        /// Only organizations this user belongs to (repeatable)
        #[arg(long = "user", value_name = "USER_ID")]
        user_ids: Vec<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show one organization
    Get {
        #[arg(value_name = "ORGANIZATION_ID")]
        id: String,
    },

    /// Add a user to the organization's auditors
    AssociateAuditor {
        #[arg(value_name = "ORGANIZATION_ID")]
        organization_id: String,
        #[arg(value_name = "AUDITOR_ID")]
        auditor_id: String,
    },

    /// Remove a user from the organization's auditors
    RemoveAuditor {
        #[arg(value_name = "ORGANIZATION_ID")]
        organization_id: String,
        #[arg(value_name = "AUDITOR_ID")]
        auditor_id: String,
    },

    /// Add a user to the organization's billing managers
    AssociateBillingManager {
        #[arg(value_name = "ORGANIZATION_ID")]
        id: String,
        #[arg(value_name = "BILLING_MANAGER_ID")]
        billing_manager_id: String,
    },

    /// Add a user to the organization's managers
    AssociateManager {
        #[arg(value_name = "ORGANIZATION_ID")]
        id: String,
        #[arg(value_name = "MANAGER_ID")]
        manager_id: String,
    },
}

#[derive(Subcommand)]
enum AppCommands {
    /// Map a route to an application
    AssociateRoute {
        #[arg(value_name = "APPLICATION_ID")]
        id: String,
        #[arg(value_name = "ROUTE_ID")]
        route_id: String,
    },

    /// Copy the bits of another application into this one
    Copy {
        #[arg(value_name = "APPLICATION_ID")]
        id: String,

        /// Application to copy from
        #[arg(long = "source", value_name = "SOURCE_APPLICATION_ID")]
        source_app_id: String,
    },
}

#[derive(Subcommand)]
enum UsageEventCommands {
    /// List service usage events
    List {
        /// Only events recorded after this event
        #[arg(long = "after", value_name = "EVENT_ID")]
        after_id: Option<String>,

        /// Only events for this service (repeatable)
        #[arg(long = "service", value_name = "SERVICE_ID")]
        service_ids: Vec<String>,

        /// Only events for this instance type (repeatable)
        #[arg(long = "service-instance-type", value_name = "TYPE")]
        service_instance_types: Vec<String>,

        #[command(flatten)]
        paging: PagingArgs,
    },

    /// Show one service usage event
    Get {
        #[arg(value_name = "EVENT_ID")]
        id: String,
    },

    /// Delete all events and reseed them from current service instances
    PurgeAndReseed {
        /// Confirm the destructive purge
        #[arg(long)]
        yes: bool,
    },
}

#[derive(clap::Args)]
struct PagingArgs {
    /// Page to return
    #[arg(long, allow_negative_numbers = true)]
    page: Option<i32>,

    /// Page size
    #[arg(long)]
    results_per_page: Option<u32>,

    /// Sort direction (asc or desc)
    #[arg(long, value_name = "DIRECTION")]
    order_direction: Option<OrderDirection>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Invocation(#[from] InvocationError),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Refusing to purge service usage events without --yes")]
    NotConfirmed,
}

fn init_tracing(verbose: u8, json: bool) {
    let base_filter = match std::env::var("RUST_LOG") {
        Ok(filter) => filter,
        Err(_) => match verbose {
            0 => "warn".to_string(),
            1 => "warn,cloudfoundry_client=info".to_string(),
            2 => "info,cloudfoundry_client=debug".to_string(),
            _ => "debug,cloudfoundry_client=trace".to_string(),
        },
    };

    let filter = EnvFilter::try_new(&base_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_level(true)
                    .with_file(verbose >= 3)
                    .with_line_number(verbose >= 3)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}

fn client(api_url: Option<String>) -> Result<CloudFoundryClient, ConfigError> {
    let config = ClientConfig::from_lookup(|name| {
        if name == API_URL_VAR {
            api_url.clone().or_else(|| std::env::var(name).ok())
        } else {
            std::env::var(name).ok()
        }
    })?;
    CloudFoundryClient::new(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let client = client(cli.api_url)?;

    match cli.command {
        Commands::Orgs(command) => run_orgs(&client, command).await,
        Commands::Apps(command) => run_apps(&client, command).await,
        Commands::UsageEvents(command) => run_usage_events(&client, command).await,
    }
}

async fn run_orgs(client: &CloudFoundryClient, command: OrgCommands) -> Result<(), CliError> {
    let organizations = client.organizations();

    match command {
        OrgCommands::List {
            names,
            statuses,
            auditor_ids,
            space_ids,
            user_ids,
            paging,
        } => {
            let mut builder = ListOrganizationsRequest::builder().names(names);
            for status in statuses {
                builder = builder.status(status);
            }
            for auditor_id in auditor_ids {
                builder = builder.auditor_id(auditor_id);
            }
            for space_id in space_ids {
                builder = builder.space_id(space_id);
            }
            for user_id in user_ids {
                builder = builder.user_id(user_id);
            }
            if let Some(page) = paging.page {
                builder = builder.page(page);
            }
            if let Some(size) = paging.results_per_page {
                builder = builder.results_per_page(size);
            }
            if let Some(direction) = paging.order_direction {
                builder = builder.order_direction(direction);
            }
            print_json(&organizations.list(builder.build()).await?)
        }
        OrgCommands::Get { id } => {
            let request = GetOrganizationRequest::builder().id(id).build();
            print_json(&organizations.get(request).await?)
        }
        OrgCommands::AssociateAuditor {
            organization_id,
            auditor_id,
        } => {
            let request = AssociateAuditorRequest::builder()
                .organization_id(organization_id)
                .auditor_id(auditor_id)
                .build();
            print_json(&organizations.associate_auditor(request).await?)
        }
        OrgCommands::RemoveAuditor {
            organization_id,
            auditor_id,
        } => {
            let request = RemoveAuditorRequest::builder()
                .organization_id(organization_id)
                .auditor_id(auditor_id)
                .build();
            organizations.remove_auditor(request).await?;
            Ok(())
        }
        OrgCommands::AssociateBillingManager {
            id,
            billing_manager_id,
        } => {
            let request = AssociateBillingManagerRequest::builder()
                .id(id)
                .billing_manager_id(billing_manager_id)
                .build();
            print_json(&organizations.associate_billing_manager(request).await?)
        }
        OrgCommands::AssociateManager { id, manager_id } => {
            let request = AssociateManagerRequest::builder()
                .id(id)
                .manager_id(manager_id)
                .build();
            print_json(&organizations.associate_manager(request).await?)
        }
    }
}

async fn run_apps(client: &CloudFoundryClient, command: AppCommands) -> Result<(), CliError> {
    let applications = client.applications();

    match command {
        AppCommands::AssociateRoute { id, route_id } => {
            let request = AssociateApplicationRouteRequest::builder()
                .id(id)
                .route_id(route_id)
                .build();
            print_json(&applications.associate_route(request).await?)
        }
        AppCommands::Copy { id, source_app_id } => {
            let request = CopyApplicationRequest::builder()
                .id(id)
                .source_app_id(source_app_id)
                .build();
            print_json(&applications.copy(request).await?)
        }
    }
}

async fn run_usage_events(
    client: &CloudFoundryClient,
    command: UsageEventCommands,
) -> Result<(), CliError> {
    let events = client.service_usage_events();

    match command {
        UsageEventCommands::List {
            after_id,
            service_ids,
            service_instance_types,
            paging,
        } => {
            let mut builder = ListServiceUsageEventsRequest::builder();
            if let Some(after_id) = after_id {
                builder = builder.after_id(after_id);
            }
            for service_id in service_ids {
                builder = builder.service_id(service_id);
            }
            for instance_type in service_instance_types {
                builder = builder.service_instance_type(instance_type);
            }
            if let Some(page) = paging.page {
                builder = builder.page(page);
            }
            if let Some(size) = paging.results_per_page {
                builder = builder.results_per_page(size);
            }
            if let Some(direction) = paging.order_direction {
                builder = builder.order_direction(direction);
            }
            print_json(&events.list(builder.build()).await?)
        }
        UsageEventCommands::Get { id } => {
            let request = GetServiceUsageEventRequest::builder().id(id).build();
            print_json(&events.get(request).await?)
        }
        UsageEventCommands::PurgeAndReseed { yes } => {
            if !yes {
                return Err(CliError::NotConfirmed);
            }
            events
                .purge_and_reseed(PurgeAndReseedServiceUsageEventsRequest)
                .await?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_verbosity, cli.json_logs);

    if let Err(e) = run(cli).await {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
