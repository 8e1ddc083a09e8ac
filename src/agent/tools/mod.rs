//! Agent tools using Rig's Tool trait
//!
//! These tools wrap the AWX API client for agents and MCP hosts.
//!
//! ## Available Tools
//!
//! ### AWX (read-only)
//! - `GetJobStatusTool` - Job status, timing and related resources
//! - `StreamJobLogsTool` - Job stdout, optionally followed until the job finishes
//! - `ListInventoriesTool` - Paged inventory listing
//! - `GetInventoryHostsTool` - All hosts of an inventory
//! - `GetHostVariablesTool` - Host variables as JSON
//! - `SearchJobTemplatesTool` - Job template search
//! - `ListRecentJobsTool` - Recent job executions
//!
//! ## Error Handling Pattern
//!
//! Tools use the shared error utilities in `error.rs`:
//!
//! 1. Each tool keeps its own error type (e.g., `GetJobStatusError`)
//! 2. AWX failures are rendered with `format_api_error` as `AWX Error: ...`
//! 3. Unusable arguments are rendered with `format_validation_error`

pub mod awx;
pub mod error;

pub use awx::{
    AwxTools, GetHostVariablesTool, GetInventoryHostsTool, GetJobStatusTool, ListInventoriesTool,
    ListRecentJobsTool, SearchJobTemplatesTool, StreamJobLogsTool,
};
pub use error::{ErrorCategory, format_api_error, format_validation_error};
