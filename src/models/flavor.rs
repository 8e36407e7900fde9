use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deserialize_id;

/// VM sizing template, scoped to a project and region.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Flavor {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub display_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
pub struct FlavorList {
    pub dedicated_vm_flavors: Vec<Flavor>,
}
