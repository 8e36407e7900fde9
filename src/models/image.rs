use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deserialize_id;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Image {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub display_name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
