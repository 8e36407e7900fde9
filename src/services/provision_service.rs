//! The provisioning sequence: authenticate, resolve region, image, flavor,
//! network and backup schedule ids in that order, then ask for the VM.
//!
//! Every step returns a `Result`. Steps 1 to 6 abort the run with `?`;
//! the outcome of the creation call is recorded in the report instead, so
//! the caller decides what a failed creation means for the process.

use yansi::Paint;

use crate::api::client::log_output;
use crate::api::{self, ApiClient};
use crate::config::ProvisionConfig;
use crate::error::{ProvisionError, ResourceKind};
use crate::models::{CreationAck, Session, VmCreationRequest};
use crate::utils::select_one;

/// Identifiers accumulated by the lookups, in the order they were resolved.
#[derive(Clone, Debug)]
pub struct ProvisionContext {
    pub session: Session,
    pub region_id: String,
    pub image_id: String,
    pub flavor_id: String,
    pub network_id: String,
    pub backup_schedule_id: String,
}

#[derive(Debug)]
pub enum CreationOutcome {
    /// The API queued the creation
    Submitted(CreationAck),
    /// The create call failed; contained here rather than propagated
    Failed(ProvisionError),
    /// Dry run, nothing was sent
    Skipped,
}

#[derive(Debug)]
pub struct ProvisionReport {
    pub context: ProvisionContext,
    pub request: VmCreationRequest,
    pub creation: CreationOutcome,
}

fn section(title: &str) {
    log_output(format!("{}\n{}", "-".repeat(25), Paint::new(title).bold()));
}

pub async fn authenticate(api: &ApiClient, config: &ProvisionConfig) -> Result<Session, ProvisionError> {
    section("Login:");
    let session = api::login(api, &config.credentials).await?;
    tracing::info!(
        customer_account_id = %session.customer_account_id,
        project_id = %session.project_id,
        "Authenticated"
    );
    Ok(session)
}

pub async fn resolve_region(api: &ApiClient, name: &str) -> Result<String, ProvisionError> {
    section("All Regions:");
    let regions = api::load_regions(api).await?;
    let region = select_one(&regions, ResourceKind::Region, name, |r| r.name.as_str())?;
    tracing::info!(region = %name, region_id = %region.id, "Region selected");
    Ok(region.id.clone())
}

pub async fn resolve_image(api: &ApiClient, display_name: &str) -> Result<String, ProvisionError> {
    section("All Images:");
    let images = api::load_images(api).await?;
    let image = select_one(&images, ResourceKind::Image, display_name, |i| i.display_name.as_str())?;
    tracing::info!(image = %display_name, image_id = %image.id, "Image selected");
    Ok(image.id.clone())
}

pub async fn resolve_flavor(
    api: &ApiClient,
    session: &Session,
    region_id: &str,
    display_name: &str,
) -> Result<String, ProvisionError> {
    section("All Flavors:");
    let flavors = api::load_flavors(api, &session.token, &session.project_id, region_id).await?;
    let flavor = select_one(&flavors, ResourceKind::Flavor, display_name, |f| f.display_name.as_str())?;
    tracing::info!(flavor = %display_name, flavor_id = %flavor.id, "Flavor selected");
    Ok(flavor.id.clone())
}

pub async fn resolve_network(
    api: &ApiClient,
    session: &Session,
    region_id: &str,
    name: &str,
) -> Result<String, ProvisionError> {
    section("All Networks:");
    let networks = api::load_networks(api, &session.token, &session.project_id, region_id).await?;
    let network = select_one(&networks, ResourceKind::Network, name, |n| n.name.as_str())?;
    tracing::info!(network = %name, network_id = %network.id, "Network selected");
    Ok(network.id.clone())
}

pub async fn resolve_backup_schedule(
    api: &ApiClient,
    session: &Session,
    name: &str,
) -> Result<String, ProvisionError> {
    section("All Backup Schedules:");
    let schedules = api::load_backup_schedules(api, &session.token, &session.customer_account_id).await?;
    let schedule = select_one(&schedules, ResourceKind::BackupSchedule, name, |b| b.name.as_str())?;
    tracing::info!(backup_schedule = %name, backup_schedule_id = %schedule.id, "Backup schedule selected");
    Ok(schedule.id.clone())
}

/// Steps 1 to 6. The first failure stops the sequence.
pub async fn resolve(api: &ApiClient, config: &ProvisionConfig) -> Result<ProvisionContext, ProvisionError> {
    let session = authenticate(api, config).await?;
    let region_id = resolve_region(api, &config.region_name).await?;
    let image_id = resolve_image(api, &config.image_name).await?;
    let flavor_id = resolve_flavor(api, &session, &region_id, &config.flavor_name).await?;
    let network_id = resolve_network(api, &session, &region_id, &config.network_name).await?;
    let backup_schedule_id = resolve_backup_schedule(api, &session, &config.backup_schedule_name).await?;

    Ok(ProvisionContext {
        session,
        region_id,
        image_id,
        flavor_id,
        network_id,
        backup_schedule_id,
    })
}

/// Assemble the create-VM body from resolved ids and static configuration.
pub fn build_request(ctx: &ProvisionContext, config: &ProvisionConfig) -> VmCreationRequest {
    VmCreationRequest {
        vm_instance_name: config.vm_instance_name.clone(),
        source_type: "image".into(),
        source_object_id: ctx.image_id.clone(),
        destination_type: "local_disk".into(),
        volume_type: None,
        consumable_product_flavor_id: ctx.flavor_id.clone(),
        network_id: ctx.network_id.clone(),
        assign_floating_ip: config.assign_floating_ip,
        ssh_key_name: config.ssh_key_name.clone(),
        firewall_name: config.firewall_name.clone(),
        rootpwd: None,
        userdata: None,
        backup_schedule_id: ctx.backup_schedule_id.clone(),
        server_count: config.server_count,
    }
}

/// Step 7. Never fails: the error, if any, becomes `CreationOutcome::Failed`.
pub async fn submit(api: &ApiClient, ctx: &ProvisionContext, request: &VmCreationRequest) -> CreationOutcome {
    section("Create VM:");
    match api::create_instance(api, &ctx.session.token, &ctx.session.project_id, &ctx.region_id, request).await {
        Ok(ack) => {
            tracing::info!(status = ack.status, vm_instance_name = %request.vm_instance_name, "VM creation queued");
            CreationOutcome::Submitted(ack)
        }
        Err(e) => {
            tracing::error!(%e, vm_instance_name = %request.vm_instance_name, "VM creation failed");
            CreationOutcome::Failed(e)
        }
    }
}

/// Run the whole sequence once. With `dry_run` the create call is skipped.
pub async fn provision(
    api: &ApiClient,
    config: &ProvisionConfig,
    dry_run: bool,
) -> Result<ProvisionReport, ProvisionError> {
    let context = resolve(api, config).await?;
    let request = build_request(&context, config);
    let creation = if dry_run {
        CreationOutcome::Skipped
    } else {
        submit(api, &context, &request).await
    };
    Ok(ProvisionReport { context, request, creation })
}
