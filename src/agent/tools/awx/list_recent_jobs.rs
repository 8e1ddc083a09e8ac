//! List recent jobs tool for the agent

use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::render::render_recent_jobs;
use crate::agent::tools::error::{format_api_error, format_validation_error};
use crate::awx::AwxApiClient;

/// Sort order: newest job first
const NEWEST_FIRST: &str = "-id";

fn default_limit() -> u32 {
    20
}

/// Arguments for the list recent jobs tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListRecentJobsArgs {
    /// Filter by status (successful, failed, running, pending, canceled, error)
    pub status: Option<String>,
    /// Maximum results to return (default: 20)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Error type for list recent jobs operations
///
/// Required by Rig's `Tool` trait; never returned, since AWX failures are
/// rendered into the tool output.
#[derive(Debug, thiserror::Error)]
#[error("List recent jobs error: {0}")]
pub struct ListRecentJobsError(String);

/// Tool to list the most recent job executions
#[derive(Debug, Clone)]
pub struct ListRecentJobsTool {
    client: Arc<AwxApiClient>,
}

impl ListRecentJobsTool {
    /// Create a new ListRecentJobsTool
    pub fn new(client: Arc<AwxApiClient>) -> Self {
        Self { client }
    }
}

impl Tool for ListRecentJobsTool {
    const NAME: &'static str = "awx_list_recent_jobs";

    type Error = ListRecentJobsError;
    type Args = ListRecentJobsArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: r#"List recent AWX job executions, newest first.

Returns each job's ID, name, status, start time and finish time (when finished).
Optionally filter by status."#
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "status": {
                        "type": "string",
                        "description": "Filter by status (successful, failed, running, pending, canceled, error)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum results to return (default: 20)"
                    }
                }
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        if args.limit == 0 {
            return Ok(format_validation_error(Self::NAME, "limit must be at least 1"));
        }

        let status = args.status.as_deref().filter(|s| !s.is_empty());
        match self.client.list_jobs(status, args.limit, NEWEST_FIRST).await {
            Ok(jobs) => Ok(render_recent_jobs(status, &jobs)),
            Err(e) => Ok(format_api_error(Self::NAME, &e)),
        }
    }
}
