use serde::Serialize;
use serde_json::Value;

/// Body of `POST /projects/{project_id}/physical-regions/{region_id}/instances`
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct VmCreationRequest {
    pub vm_instance_name: String,
    /// Always "image"
    pub source_type: String,
    /// Image id
    pub source_object_id: String,
    /// Always "local_disk"
    pub destination_type: String,
    /// Null for local disk
    pub volume_type: Option<String>,
    /// Flavor id
    pub consumable_product_flavor_id: String,
    pub network_id: String,
    pub assign_floating_ip: bool,
    pub ssh_key_name: String,
    pub firewall_name: String,
    /// Null since the SSH key is injected
    pub rootpwd: Option<String>,
    pub userdata: Option<String>,
    pub backup_schedule_id: String,
    pub server_count: u32,
}

/// What the API hands back once the creation has been queued.
/// The VM itself is built asynchronously on the server.
#[derive(Clone, Debug)]
pub struct CreationAck {
    pub status: u16,
    pub body: Value,
}
