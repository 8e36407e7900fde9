use reqwest::Method;

use super::client::ApiClient;
use crate::error::ProvisionError;
use crate::models::{CreationAck, VmCreationRequest};

/// Ask the API to create the VM. A success only means the request was queued;
/// the instance is built asynchronously and is not polled here.
pub async fn create_instance(
    api: &ApiClient,
    token: &str,
    project_id: &str,
    region_id: &str,
    request: &VmCreationRequest,
) -> Result<CreationAck, ProvisionError> {
    let endpoint = format!("/projects/{}/physical-regions/{}/instances", project_id, region_id);
    let body = serde_json::to_value(request)
        .map_err(|e| ProvisionError::Config(format!("cannot encode VM request: {}", e)))?;
    let resp = api.request(Method::POST, &endpoint, Some(token), Some(&body)).await?;
    if !resp.is_success() {
        return Err(ProvisionError::Creation {
            status: resp.status.as_u16(),
            body: resp.body_text(),
        });
    }
    Ok(CreationAck {
        status: resp.status.as_u16(),
        body: resp.body,
    })
}
