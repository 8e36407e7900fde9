use super::client::ApiClient;
use crate::error::ProvisionError;
use crate::models::{BackupSchedule, BackupScheduleList};

/// List backup schedules defined for a customer account.
pub async fn load_backup_schedules(
    api: &ApiClient,
    token: &str,
    customer_account_id: &str,
) -> Result<Vec<BackupSchedule>, ProvisionError> {
    let endpoint = format!("/customer-accounts/{}/backup-schedules", customer_account_id);
    let list: BackupScheduleList = api.get_json(&endpoint, Some(token)).await?;
    Ok(list.backup_schedules)
}
