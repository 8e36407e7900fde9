use super::client::ApiClient;
use crate::error::ProvisionError;
use crate::models::{Region, RegionList};

/// List all regions. No authentication required.
pub async fn load_regions(api: &ApiClient) -> Result<Vec<Region>, ProvisionError> {
    let list: RegionList = api.get_json("/regions", None).await?;
    Ok(list.regions)
}
