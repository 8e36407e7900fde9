use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use serde::Serialize;
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use omnivm::api::{self, ApiClient};
use omnivm::config::{self, ProvisionConfig};
use omnivm::error::ProvisionError;
use omnivm::services::{self, provision_service, CreationOutcome};
use omnivm::utils::value_to_short_string;

fn print_table(value: &serde_json::Value) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }

    match value {
        serde_json::Value::Array(arr) => {
            if arr.is_empty() {
                println!("(empty list)");
                return;
            }
            // Columns come from the first object, id and name first.
            if let Some(first) = arr.iter().find_map(|v| v.as_object()) {
                let mut headers: Vec<&String> = first.keys().collect();
                headers.sort_by_key(|k| match k.as_str() {
                    "id" => 0,
                    "name" | "display_name" => 1,
                    _ => 2,
                });
                table.set_header(&headers);
                for item in arr {
                    if let Some(obj) = item.as_object() {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|k| obj.get(*k).map(value_to_short_string).unwrap_or_default())
                            .collect();
                        table.add_row(row);
                    }
                }
            }
        }
        serde_json::Value::Object(obj) => {
            table.set_header(vec!["Field", "Value"]);
            for (k, v) in obj {
                table.add_row(vec![k.clone(), value_to_short_string(v)]);
            }
        }
        _ => {
            println!("{}", value_to_short_string(value));
            return;
        }
    }

    println!("\n{table}\n");
}

fn print_listing<T: Serialize>(items: &[T]) {
    match serde_json::to_value(items) {
        Ok(value) => print_table(&value),
        Err(e) => eprintln!("{}: {}", yansi::Paint::new("Failed to render listing").red(), e),
    }
}

fn fail(e: ProvisionError) -> ! {
    tracing::error!(%e, "Aborting");
    eprintln!("{}: {}", yansi::Paint::new("Error").red().bold(), e);
    process::exit(1);
}

#[derive(Parser)]
#[command(
    name = "omnivm",
    author,
    version,
    about = "Provision a VM through the OmniCloud public API",
    long_about = r#"omnivm logs in, resolves the region, image, flavor, network and backup schedule
identifiers one request at a time, then submits a single create-VM request.

Credentials and names are read from the environment (or a .env file):
  API_USERNAME, API_PASSWORD, DEDICATED_VM_FLAVOR_NAME, SSH_KEY_NAME, FIREWALL_NAME
Optional overrides:
  API_BASE_URL, REGION_NAME, IMAGE_NAME, NETWORK_NAME, BACKUP_SCHEDULE_NAME,
  VM_INSTANCE_NAME, ASSIGN_FLOATING_IP, SERVER_COUNT

Examples:
  1) Create the VM:
      omnivm provision
  2) Resolve everything but do not create:
      omnivm provision --dry-run
  3) Discover identifiers:
      omnivm list regions
      omnivm list flavors
"#,
    after_help = "Use `omnivm <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve all identifiers and create the VM (default)
    #[command(about = "Resolve identifiers and create the VM", long_about = "Run the full sequence. The creation is asynchronous on the server: a success only means the request was queued. A failed creation is reported but does not change the exit status.")]
    Provision {
        /// Stop before the create call and print the request body instead
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate configuration and credentials
    #[command(about = "Validate configuration and credentials.", long_about = "Check that every required environment variable is set, then log in and print the account and project that would be used.")]
    CheckConfig,
    /// List a remote resource to discover names and identifiers
    List {
        #[arg(value_enum)]
        resource: ListResource,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ListResource {
    Regions,
    Images,
    Flavors,
    Networks,
    BackupSchedules,
}

async fn run_provision(dry_run: bool) {
    let config = ProvisionConfig::from_env().unwrap_or_else(|e| fail(e));
    let api = ApiClient::new(&config.api_base_url).unwrap_or_else(|e| fail(e));
    let report = services::provision(&api, &config, dry_run).await.unwrap_or_else(|e| fail(e));

    match report.creation {
        CreationOutcome::Submitted(ack) => {
            println!(
                "{} '{}' {} (HTTP {})",
                yansi::Paint::new("VM").green(),
                report.request.vm_instance_name,
                yansi::Paint::new("creation queued").green(),
                ack.status
            );
            println!("{}", yansi::Paint::new("Provisioning continues on the server; list the project's instances to follow its status.").dim());
        }
        CreationOutcome::Failed(e) => {
            eprintln!("{}: {}", yansi::Paint::new("VM creation failed").red(), e);
        }
        CreationOutcome::Skipped => {
            let body = serde_json::to_string_pretty(&report.request).unwrap_or_default();
            println!(
                "{} {}\n{}",
                yansi::Paint::new("Dry run, would POST to").yellow(),
                format!(
                    "/projects/{}/physical-regions/{}/instances",
                    report.context.session.project_id, report.context.region_id
                ),
                body
            );
        }
    }
}

async fn run_check_config() {
    let config = ProvisionConfig::from_env().unwrap_or_else(|e| fail(e));
    let api = ApiClient::new(&config.api_base_url).unwrap_or_else(|e| fail(e));
    let session = provision_service::authenticate(&api, &config).await.unwrap_or_else(|e| fail(e));
    println!("{}", yansi::Paint::new("Configuration looks valid (login succeeded)").green());
    println!("customer_account_id: {}", session.customer_account_id);
    println!("project_id:          {}", session.project_id);
}

async fn run_list(resource: ListResource) {
    let api = ApiClient::new(&config::get_api_base_url()).unwrap_or_else(|e| fail(e));
    let result = match resource {
        ListResource::Regions => api::load_regions(&api).await.map(|items| print_listing(&items)),
        ListResource::Images => api::load_images(&api).await.map(|items| print_listing(&items)),
        ListResource::Flavors | ListResource::Networks | ListResource::BackupSchedules => {
            list_scoped(&api, resource).await
        }
    };
    if let Err(e) = result {
        fail(e);
    }
}

async fn list_scoped(api: &ApiClient, resource: ListResource) -> Result<(), ProvisionError> {
    let credentials = config::get_credentials()?;
    let session = api::login(api, &credentials).await?;
    match resource {
        ListResource::BackupSchedules => {
            let items = api::load_backup_schedules(api, &session.token, &session.customer_account_id).await?;
            print_listing(&items);
        }
        ListResource::Flavors => {
            let region_id = provision_service::resolve_region(api, &config::get_region_name()).await?;
            let items = api::load_flavors(api, &session.token, &session.project_id, &region_id).await?;
            print_listing(&items);
        }
        ListResource::Networks => {
            let region_id = provision_service::resolve_region(api, &config::get_region_name()).await?;
            let items = api::load_networks(api, &session.token, &session.project_id, &region_id).await?;
            print_listing(&items);
        }
        ListResource::Regions | ListResource::Images => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Before tracing, so RUST_LOG may come from the .env file
    config::load_env_file(cli.env_file.as_deref());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::client::set_silent(true);
    }

    match cli.command.unwrap_or(Commands::Provision { dry_run: false }) {
        Commands::Provision { dry_run } => run_provision(dry_run).await,
        Commands::CheckConfig => run_check_config().await,
        Commands::List { resource } => run_list(resource).await,
    }
}
