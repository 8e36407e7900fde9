use omnivm::config;
use omnivm::error::ProvisionError;
use std::env;
use std::sync::Mutex;

// Tests below mutate the process environment; run them one at a time.
static ENV_LOCK: Mutex<()> = Mutex::new(());

const ALL_VARS: [&str; 13] = [
    "API_BASE_URL",
    "API_USERNAME",
    "API_PASSWORD",
    "DEDICATED_VM_FLAVOR_NAME",
    "SSH_KEY_NAME",
    "FIREWALL_NAME",
    "REGION_NAME",
    "IMAGE_NAME",
    "NETWORK_NAME",
    "BACKUP_SCHEDULE_NAME",
    "VM_INSTANCE_NAME",
    "ASSIGN_FLOATING_IP",
    "SERVER_COUNT",
];

fn clear_env() {
    for name in ALL_VARS {
        env::remove_var(name);
    }
}

fn set_required() {
    env::set_var("API_USERNAME", "alice");
    env::set_var("API_PASSWORD", "s3cret");
    env::set_var("DEDICATED_VM_FLAVOR_NAME", "p16.16");
    env::set_var("SSH_KEY_NAME", "alice-key");
    env::set_var("FIREWALL_NAME", "web");
}

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.omnicloud.io/"),
        "https://api.omnicloud.io"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("http://localhost:6543///"),
        "http://localhost:6543"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://api.omnicloud.io/  "),
        "https://api.omnicloud.io"
    );
}

#[test]
fn test_sanitize_base_url_blank_uses_default() {
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_API_BASE_URL);
}

#[test]
fn test_parse_flag() {
    assert_eq!(config::parse_flag("true"), Some(true));
    assert_eq!(config::parse_flag(" YES "), Some(true));
    assert_eq!(config::parse_flag("1"), Some(true));
    assert_eq!(config::parse_flag("off"), Some(false));
    assert_eq!(config::parse_flag("0"), Some(false));
    assert_eq!(config::parse_flag("maybe"), None);
}

#[test]
fn test_from_env_uses_defaults() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    set_required();

    let cfg = config::ProvisionConfig::from_env().unwrap();

    assert_eq!(cfg.api_base_url, "https://api.omnicloud.io");
    assert_eq!(cfg.credentials.username, "alice");
    assert_eq!(cfg.credentials.password, "s3cret");
    assert_eq!(cfg.flavor_name, "p16.16");
    assert_eq!(cfg.region_name, "Singapore-Batam");
    assert_eq!(cfg.image_name, "CentOS 9");
    assert_eq!(cfg.network_name, "default-network");
    assert_eq!(cfg.backup_schedule_name, "daily");
    assert_eq!(cfg.vm_instance_name, "test-vm");
    assert!(cfg.assign_floating_ip);
    assert_eq!(cfg.server_count, 1);

    clear_env();
}

#[test]
fn test_from_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    set_required();
    env::set_var("API_BASE_URL", "http://localhost:6543/");
    env::set_var("REGION_NAME", "Jakarta");
    env::set_var("NETWORK_NAME", "private");
    env::set_var("ASSIGN_FLOATING_IP", "no");
    env::set_var("SERVER_COUNT", "3");

    let cfg = config::ProvisionConfig::from_env().unwrap();

    assert_eq!(cfg.api_base_url, "http://localhost:6543");
    assert_eq!(cfg.region_name, "Jakarta");
    assert_eq!(cfg.network_name, "private");
    assert!(!cfg.assign_floating_ip);
    assert_eq!(cfg.server_count, 3);

    clear_env();
}

#[test]
fn test_from_env_reports_every_missing_variable() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("API_USERNAME", "alice");
    env::set_var("SSH_KEY_NAME", "   ");

    assert_eq!(
        config::missing_required_vars(),
        vec!["API_PASSWORD", "DEDICATED_VM_FLAVOR_NAME", "SSH_KEY_NAME", "FIREWALL_NAME"]
    );
    match config::ProvisionConfig::from_env() {
        Err(ProvisionError::Config(msg)) => {
            assert!(msg.contains("API_PASSWORD"));
            assert!(msg.contains("FIREWALL_NAME"));
            assert!(!msg.contains("API_USERNAME"));
        }
        other => panic!("expected a config error, got {:?}", other),
    }

    clear_env();
}

#[test]
fn test_from_env_rejects_zero_server_count() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    set_required();
    env::set_var("SERVER_COUNT", "0");

    assert!(matches!(
        config::ProvisionConfig::from_env(),
        Err(ProvisionError::Config(_))
    ));

    clear_env();
}

#[test]
fn test_get_credentials_only_needs_login_vars() {
    let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clear_env();
    env::set_var("API_USERNAME", "alice");
    env::set_var("API_PASSWORD", "s3cret");

    let creds = config::get_credentials().unwrap();
    assert_eq!(creds.username, "alice");
    assert_eq!(creds.password, "s3cret");
    assert_eq!(config::get_region_name(), "Singapore-Batam");

    clear_env();
}
