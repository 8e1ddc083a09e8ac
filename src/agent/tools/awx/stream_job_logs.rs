//! Stream job logs tool for the agent
//!
//! Returns a job's stdout, optionally waiting for the job to finish while
//! collecting output as it is produced.

use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use crate::agent::tools::error::format_api_error;
use crate::awx::{AwxApiClient, JobLogPoller};

/// Arguments for the stream job logs tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct StreamJobLogsArgs {
    /// The AWX job ID to retrieve logs for
    pub job_id: u64,
    /// If true, poll for new output until the job completes
    #[serde(default)]
    pub follow: bool,
}

/// Error type for stream job logs operations
///
/// Required by Rig's `Tool` trait; never returned, since AWX failures are
/// rendered into the tool output.
#[derive(Debug, thiserror::Error)]
#[error("Stream job logs error: {0}")]
pub struct StreamJobLogsError(String);

/// Tool to retrieve or follow job output
#[derive(Debug, Clone)]
pub struct StreamJobLogsTool {
    client: Arc<AwxApiClient>,
}

impl StreamJobLogsTool {
    /// Create a new StreamJobLogsTool
    pub fn new(client: Arc<AwxApiClient>) -> Self {
        Self { client }
    }
}

impl Tool for StreamJobLogsTool {
    const NAME: &'static str = "awx_stream_job_logs";

    type Error = StreamJobLogsError;
    type Args = StreamJobLogsArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: r#"Stream or retrieve job execution logs.

With follow=false (default) the complete current output is returned at once.
With follow=true the job is polled every 2 seconds and the call returns only
when the job reaches successful, failed, canceled or error.

**Note:** follow=true has no time limit; use it only for jobs expected to finish."#
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "job_id": {
                        "type": "integer",
                        "description": "The AWX job ID to retrieve logs for"
                    },
                    "follow": {
                        "type": "boolean",
                        "description": "If true, poll for new output until the job completes (default: false)"
                    }
                },
                "required": ["job_id"]
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let poller = JobLogPoller::new(self.client.as_ref());
        match poller.fetch_job_log(args.job_id, args.follow).await {
            Ok(logs) => Ok(logs),
            Err(e) => Ok(format_api_error(Self::NAME, &e)),
        }
    }
}
