//! AWX tools
//!
//! Read-only tools over the AWX REST API. Every tool holds a shared
//! [`AwxApiClient`] and renders its result as markdown text.
//!
//! ## Tools
//!
//! - `GetJobStatusTool` - Status and details of one job
//! - `StreamJobLogsTool` - Job output, optionally followed until completion
//! - `ListInventoriesTool` - One page of inventories with host counts
//! - `GetInventoryHostsTool` - Every host of an inventory (all pages)
//! - `GetHostVariablesTool` - Variables of one host
//! - `SearchJobTemplatesTool` - Job templates by name substring
//! - `ListRecentJobsTool` - Most recent jobs, optionally by status

mod get_host_variables;
mod get_inventory_hosts;
mod get_job_status;
mod list_inventories;
mod list_recent_jobs;
pub mod render;
mod search_job_templates;
mod stream_job_logs;

use std::sync::Arc;

use crate::awx::AwxApiClient;

pub use get_host_variables::{GetHostVariablesArgs, GetHostVariablesError, GetHostVariablesTool};
pub use get_inventory_hosts::{GetInventoryHostsArgs, GetInventoryHostsError, GetInventoryHostsTool};
pub use get_job_status::{GetJobStatusArgs, GetJobStatusError, GetJobStatusTool};
pub use list_inventories::{ListInventoriesArgs, ListInventoriesError, ListInventoriesTool};
pub use list_recent_jobs::{ListRecentJobsArgs, ListRecentJobsError, ListRecentJobsTool};
pub use search_job_templates::{SearchJobTemplatesArgs, SearchJobTemplatesError, SearchJobTemplatesTool};
pub use stream_job_logs::{StreamJobLogsArgs, StreamJobLogsError, StreamJobLogsTool};

/// All AWX tools, sharing one client
#[derive(Debug, Clone)]
pub struct AwxTools {
    pub get_job_status: GetJobStatusTool,
    pub stream_job_logs: StreamJobLogsTool,
    pub list_inventories: ListInventoriesTool,
    pub get_inventory_hosts: GetInventoryHostsTool,
    pub get_host_variables: GetHostVariablesTool,
    pub search_job_templates: SearchJobTemplatesTool,
    pub list_recent_jobs: ListRecentJobsTool,
}

impl AwxTools {
    pub fn new(client: Arc<AwxApiClient>) -> Self {
        Self {
            get_job_status: GetJobStatusTool::new(client.clone()),
            stream_job_logs: StreamJobLogsTool::new(client.clone()),
            list_inventories: ListInventoriesTool::new(client.clone()),
            get_inventory_hosts: GetInventoryHostsTool::new(client.clone()),
            get_host_variables: GetHostVariablesTool::new(client.clone()),
            search_job_templates: SearchJobTemplatesTool::new(client.clone()),
            list_recent_jobs: ListRecentJobsTool::new(client),
        }
    }
}
