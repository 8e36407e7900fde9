use std::env;
use std::path::Path;

use crate::error::ProvisionError;
use crate::models::Credentials;

// Default configuration constants
pub const DEFAULT_API_BASE_URL: &str = "https://api.omnicloud.io";
pub const DEFAULT_REGION_NAME: &str = "Singapore-Batam";
pub const DEFAULT_IMAGE_NAME: &str = "CentOS 9";
pub const DEFAULT_NETWORK_NAME: &str = "default-network";
pub const DEFAULT_BACKUP_SCHEDULE_NAME: &str = "daily";
pub const DEFAULT_VM_INSTANCE_NAME: &str = "test-vm";
pub const DEFAULT_ASSIGN_FLOATING_IP: bool = true;
pub const DEFAULT_SERVER_COUNT: u32 = 1;

/// Variables that have no sensible default and must come from the environment.
pub const REQUIRED_VARS: [&str; 5] = [
    "API_USERNAME",
    "API_PASSWORD",
    "DEDICATED_VM_FLAVOR_NAME",
    "SSH_KEY_NAME",
    "FIREWALL_NAME",
];

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()))
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parse a boolean flag the way shell users write them.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn var_or(name: &str, default: &str) -> String {
    non_empty_var(name).unwrap_or_else(|| default.to_string())
}

/// Names of required variables that are unset or blank, in declaration order.
pub fn missing_required_vars() -> Vec<&'static str> {
    REQUIRED_VARS
        .iter()
        .copied()
        .filter(|name| non_empty_var(name).is_none())
        .collect()
}

pub fn get_region_name() -> String {
    var_or("REGION_NAME", DEFAULT_REGION_NAME)
}

/// Login credentials only, for commands that do not need the full configuration.
pub fn get_credentials() -> Result<Credentials, ProvisionError> {
    let missing: Vec<&str> = ["API_USERNAME", "API_PASSWORD"]
        .into_iter()
        .filter(|name| non_empty_var(name).is_none())
        .collect();
    if !missing.is_empty() {
        return Err(ProvisionError::Config(format!(
            "missing required environment variables: {}",
            missing.join(", ")
        )));
    }
    Ok(Credentials {
        username: var_or("API_USERNAME", ""),
        password: env::var("API_PASSWORD").unwrap_or_default(),
    })
}

/// Everything one provisioning run needs, read from the process environment.
#[derive(Clone, Debug)]
pub struct ProvisionConfig {
    pub api_base_url: String,
    pub credentials: Credentials,
    pub region_name: String,
    pub image_name: String,
    pub flavor_name: String,
    pub network_name: String,
    pub backup_schedule_name: String,
    pub vm_instance_name: String,
    pub ssh_key_name: String,
    pub firewall_name: String,
    pub assign_floating_ip: bool,
    pub server_count: u32,
}

impl ProvisionConfig {
    pub fn from_env() -> Result<Self, ProvisionError> {
        let missing = missing_required_vars();
        if !missing.is_empty() {
            return Err(ProvisionError::Config(format!(
                "missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        let assign_floating_ip = match non_empty_var("ASSIGN_FLOATING_IP") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ProvisionError::Config(format!("ASSIGN_FLOATING_IP has an invalid value: {}", raw))
            })?,
            None => DEFAULT_ASSIGN_FLOATING_IP,
        };

        let server_count = match non_empty_var("SERVER_COUNT") {
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ProvisionError::Config(format!("SERVER_COUNT must be a positive integer, got {}", raw))
                })?,
            None => DEFAULT_SERVER_COUNT,
        };

        Ok(Self {
            api_base_url: get_api_base_url(),
            credentials: get_credentials()?,
            region_name: get_region_name(),
            image_name: var_or("IMAGE_NAME", DEFAULT_IMAGE_NAME),
            flavor_name: var_or("DEDICATED_VM_FLAVOR_NAME", ""),
            network_name: var_or("NETWORK_NAME", DEFAULT_NETWORK_NAME),
            backup_schedule_name: var_or("BACKUP_SCHEDULE_NAME", DEFAULT_BACKUP_SCHEDULE_NAME),
            vm_instance_name: var_or("VM_INSTANCE_NAME", DEFAULT_VM_INSTANCE_NAME),
            ssh_key_name: var_or("SSH_KEY_NAME", ""),
            firewall_name: var_or("FIREWALL_NAME", ""),
            assign_floating_ip,
            server_count,
        })
    }
}
