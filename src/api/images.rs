use super::client::ApiClient;
use crate::error::ProvisionError;
use crate::models::Image;

/// List all source images. No authentication required; the body is a bare array.
pub async fn load_images(api: &ApiClient) -> Result<Vec<Image>, ProvisionError> {
    api.get_json("/images", None).await
}
