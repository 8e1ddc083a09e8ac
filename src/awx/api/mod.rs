//! AWX API client module
//!
//! Provides authenticated access to the AWX REST API (v2) for jobs,
//! inventories, hosts and job templates.
//!
//! # Example
//!
//! ```rust,ignore
//! use awx_mcp::awx::api::AwxApiClient;
//! use awx_mcp::awx::AwxTransport;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let overrides = awx_mcp::config::types::PartialConfig::from_env();
//!     let config = awx_mcp::config::load_config(None, overrides)?;
//!     let client = AwxApiClient::new(&config)?;
//!
//!     let job = client.get_job(42).await?;
//!     println!("Job {} is {}", job.id, job.status);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use client::AwxApiClient;
pub use error::{AwxApiError, Result};
pub use types::{Host, Inventory, Job, JobStatus, JobTemplate, Page};
