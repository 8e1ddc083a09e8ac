//! # AWX MCP Server
//!
//! A Model Context Protocol server giving assistants read-only access to an
//! AWX (Ansible Tower) instance over its REST API.
//!
//! ## Features
//!
//! - **Job Logs**: Fetch job output once, or follow it until the job finishes
//! - **Inventories**: Page through inventories and list every host of one
//! - **Hosts**: Look up hosts by ID or FQDN and read their variables
//! - **Jobs & Templates**: Job status, recent jobs, template search
//!
//! ## Example
//!
//! ```rust,no_run
//! use awx_mcp::awx::{AwxApiClient, fetch_job_log};
//! use awx_mcp::config::{load_config, types::PartialConfig};
//!
//! # async fn run() -> awx_mcp::Result<()> {
//! let config = load_config(None, PartialConfig::from_env())?;
//! let client = AwxApiClient::new(&config)?;
//! let log = fetch_job_log(&client, 42, true).await?;
//! println!("{}", log);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod awx;
pub mod cli;
pub mod config;
pub mod error;
pub mod server;

// Re-export commonly used types and functions
pub use awx::{AwxApiClient, AwxTransport, fetch_all_hosts, fetch_job_log};
pub use config::types::AwxConfig;
pub use error::{AwxMcpError, Result};
pub use server::{AwxMcpServer, serve_stdio};

/// The current version of the server
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
