use super::client::ApiClient;
use crate::error::ProvisionError;
use crate::models::{Network, NetworkList};

/// List the networks (VPCs) of a project in one region.
pub async fn load_networks(
    api: &ApiClient,
    token: &str,
    project_id: &str,
    region_id: &str,
) -> Result<Vec<Network>, ProvisionError> {
    let endpoint = format!("/projects/{}/physical-regions/{}/networks", project_id, region_id);
    let list: NetworkList = api.get_json(&endpoint, Some(token)).await?;
    Ok(list.networks)
}
