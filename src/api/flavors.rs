use super::client::ApiClient;
use crate::error::ProvisionError;
use crate::models::{Flavor, FlavorList};

/// List the dedicated VM flavors available to a project in one region.
/// Flavors are customer specific, so the bearer token is required.
pub async fn load_flavors(
    api: &ApiClient,
    token: &str,
    project_id: &str,
    region_id: &str,
) -> Result<Vec<Flavor>, ProvisionError> {
    let endpoint = format!("/projects/{}/physical-regions/{}/vm-flavors", project_id, region_id);
    let list: FlavorList = api.get_json(&endpoint, Some(token)).await?;
    Ok(list.dedicated_vm_flavors)
}
