/// Error types for the provisioning run
use std::fmt;

use thiserror::Error;

/// Remote resource kinds a lookup can fail to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    CustomerAccount,
    Project,
    Region,
    Image,
    Flavor,
    Network,
    BackupSchedule,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::CustomerAccount => "customer_account",
            ResourceKind::Project => "project",
            ResourceKind::Region => "region",
            ResourceKind::Image => "image",
            ResourceKind::Flavor => "flavor",
            ResourceKind::Network => "network",
            ResourceKind::BackupSchedule => "backup_schedule",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while resolving identifiers or creating the VM
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Login was rejected by the API
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A listing had no entry matching the configured name
    #[error("No matching {0} found")]
    NotFound(ResourceKind),

    /// The request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// A lookup returned a non-success status
    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body was not JSON or lacked an expected field
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The create-VM call returned a non-success status
    #[error("VM creation failed: HTTP {status}: {body}")]
    Creation { status: u16, body: String },

    /// Invalid or incomplete configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ProvisionError {
    fn from(e: reqwest::Error) -> Self {
        ProvisionError::Transport(e.to_string())
    }
}
