use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deserialize_id;

/// A physical region. `region_id` and `physical_region_id` are interchangeable in the API.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Region {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    // remaining fields are only shown by `list`
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
pub struct RegionList {
    pub regions: Vec<Region>,
}
