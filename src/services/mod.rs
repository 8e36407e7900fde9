pub mod provision_service;

// Re-export commonly used functions
pub use provision_service::{
    build_request, provision, resolve, CreationOutcome, ProvisionContext, ProvisionReport,
};
