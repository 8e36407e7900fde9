use std::fmt;

use serde::Deserialize;

use super::deserialize_id;
use crate::error::{ProvisionError, ResourceKind};

#[derive(Deserialize, Clone, Debug)]
pub struct Project {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct CustomerAccount {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Body returned by `/user/login`
#[derive(Deserialize, Clone, Debug)]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub customer_accounts: Vec<CustomerAccount>,
}

/// Bearer token plus the active account and project, valid for the process lifetime.
#[derive(Clone)]
pub struct Session {
    pub token: String,
    pub customer_account_id: String,
    pub project_id: String,
}

impl Session {
    /// Takes the first customer account and its first project as the active ones.
    /// There is no selection rule beyond position.
    pub fn from_login(login: LoginResponse) -> Result<Self, ProvisionError> {
        if login.token.is_empty() {
            return Err(ProvisionError::UnexpectedResponse("login response carried an empty token".into()));
        }
        let account = login
            .customer_accounts
            .into_iter()
            .next()
            .ok_or(ProvisionError::NotFound(ResourceKind::CustomerAccount))?;
        let project = account
            .projects
            .into_iter()
            .next()
            .ok_or(ProvisionError::NotFound(ResourceKind::Project))?;
        Ok(Session {
            token: login.token,
            customer_account_id: account.id,
            project_id: project.id,
        })
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"***")
            .field("customer_account_id", &self.customer_account_id)
            .field("project_id", &self.project_id)
            .finish()
    }
}
