use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deserialize_id;

/// Provider-managed recurring snapshot policy, scoped to a customer account.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BackupSchedule {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
pub struct BackupScheduleList {
    pub backup_schedules: Vec<BackupSchedule>,
}
