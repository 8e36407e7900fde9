// One module per remote endpoint
pub mod client;
pub mod auth;
pub mod regions;
pub mod images;
pub mod flavors;
pub mod networks;
pub mod backup_schedules;
pub mod instances;

// Re-export commonly used functions
pub use client::{ApiClient, ApiResponse};
pub use auth::login;
pub use regions::load_regions;
pub use images::load_images;
pub use flavors::load_flavors;
pub use networks::load_networks;
pub use backup_schedules::load_backup_schedules;
pub use instances::create_instance;
