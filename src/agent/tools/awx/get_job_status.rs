//! Get job status tool for the agent
//!
//! Allows the agent to check the status and details of an AWX job.

use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::render::render_job_status;
use crate::agent::tools::error::format_api_error;
use crate::awx::{AwxApiClient, AwxTransport};

/// Arguments for the get job status tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetJobStatusArgs {
    /// The AWX job ID to query
    pub job_id: u64,
}

/// Error type for get job status operations
///
/// Required by Rig's `Tool` trait; never returned, since AWX failures are
/// rendered into the tool output.
#[derive(Debug, thiserror::Error)]
#[error("Get job status error: {0}")]
pub struct GetJobStatusError(String);

/// Tool to get the status of an AWX job
#[derive(Debug, Clone)]
pub struct GetJobStatusTool {
    client: Arc<AwxApiClient>,
}

impl GetJobStatusTool {
    /// Create a new GetJobStatusTool
    pub fn new(client: Arc<AwxApiClient>) -> Self {
        Self { client }
    }
}

impl Tool for GetJobStatusTool {
    const NAME: &'static str = "awx_get_job_status";

    type Error = GetJobStatusError;
    type Args = GetJobStatusArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: r#"Get the status and details of an AWX job.

Returns the job name, status, type, start/finish timestamps, elapsed time
and the related job template, inventory and project.

**Status Values:**
- pending, running: job still in progress
- successful, failed, canceled, error: job finished"#
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "job_id": {
                        "type": "integer",
                        "description": "The AWX job ID to query"
                    }
                },
                "required": ["job_id"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        match self.client.get_job(args.job_id).await {
            Ok(job) => Ok(render_job_status(&job)),
            Err(e) => Ok(format_api_error(Self::NAME, &e)),
        }
    }
}
