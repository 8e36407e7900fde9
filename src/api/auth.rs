use reqwest::Method;

use super::client::{decode, ApiClient};
use crate::error::ProvisionError;
use crate::models::{Credentials, LoginResponse, Session};

/// Exchange credentials for a bearer token and the active account/project.
/// Any non-success status is reported as an authentication failure.
pub async fn login(api: &ApiClient, credentials: &Credentials) -> Result<Session, ProvisionError> {
    let body = serde_json::to_value(credentials)
        .map_err(|e| ProvisionError::Config(format!("cannot encode credentials: {}", e)))?;
    let resp = api.request(Method::POST, "/user/login", None, Some(&body)).await?;
    if !resp.is_success() {
        return Err(ProvisionError::Authentication(format!(
            "HTTP {}: {}",
            resp.status.as_u16(),
            resp.body_text()
        )));
    }
    let login: LoginResponse = decode("/user/login", resp.body)?;
    Session::from_login(login)
}
