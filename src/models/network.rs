use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::deserialize_id;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Network {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
pub struct NetworkList {
    pub networks: Vec<Network>,
}
