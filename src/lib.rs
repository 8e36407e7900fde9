//! Provision a VM through the OmniCloud public REST API.
//!
//! The run is a fixed, strictly sequential pipeline: log in, resolve the
//! region, image, flavor, network and backup schedule identifiers with one
//! GET each, then POST a single create-VM request built from them.
//!
//! ```no_run
//! use omnivm::api::ApiClient;
//! use omnivm::config::ProvisionConfig;
//! use omnivm::services::{provision, CreationOutcome};
//!
//! # async fn example() -> Result<(), omnivm::error::ProvisionError> {
//! let config = ProvisionConfig::from_env()?;
//! let api = ApiClient::new(&config.api_base_url)?;
//! let report = provision(&api, &config, false).await?;
//! if let CreationOutcome::Failed(e) = report.creation {
//!     eprintln!("creation failed: {}", e);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
