pub mod credentials;
pub mod session;
pub mod region;
pub mod image;
pub mod flavor;
pub mod network;
pub mod backup_schedule;
pub mod vm_request;

pub use credentials::Credentials;
pub use session::{CustomerAccount, LoginResponse, Project, Session};
pub use region::{Region, RegionList};
pub use image::Image;
pub use flavor::{Flavor, FlavorList};
pub use network::{Network, NetworkList};
pub use backup_schedule::{BackupSchedule, BackupScheduleList};
pub use vm_request::{CreationAck, VmCreationRequest};

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

/// Identifiers are opaque; the API may send them as strings or numbers.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}
