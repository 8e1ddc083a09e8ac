//! Search job templates tool for the agent

use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::render::render_job_templates;
use crate::agent::tools::error::{format_api_error, format_validation_error};
use crate::awx::AwxApiClient;

fn default_limit() -> u32 {
    50
}

/// Arguments for the search job templates tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchJobTemplatesArgs {
    /// Filter by template name (case-insensitive substring match)
    pub name_filter: Option<String>,
    /// Maximum results to return (default: 50)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Error type for search job templates operations
///
/// Required by Rig's `Tool` trait; never returned, since AWX failures are
/// rendered into the tool output.
#[derive(Debug, thiserror::Error)]
#[error("Search job templates error: {0}")]
pub struct SearchJobTemplatesError(String);

/// Tool to search job templates by name
#[derive(Debug, Clone)]
pub struct SearchJobTemplatesTool {
    client: Arc<AwxApiClient>,
}

impl SearchJobTemplatesTool {
    /// Create a new SearchJobTemplatesTool
    pub fn new(client: Arc<AwxApiClient>) -> Self {
        Self { client }
    }
}

impl Tool for SearchJobTemplatesTool {
    const NAME: &'static str = "awx_search_job_templates";

    type Error = SearchJobTemplatesError;
    type Args = SearchJobTemplatesArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: r#"Search for AWX job templates.

Returns matching templates with their IDs, playbooks and descriptions.
Without name_filter all templates (up to limit) are listed."#
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "name_filter": {
                        "type": "string",
                        "description": "Filter by template name (substring match)"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum results to return (default: 50)"
                    }
                }
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        if args.limit == 0 {
            return Ok(format_validation_error(Self::NAME, "limit must be at least 1"));
        }

        let filter = args.name_filter.as_deref().filter(|f| !f.is_empty());
        match self.client.search_job_templates(filter, args.limit).await {
            Ok(templates) => Ok(render_job_templates(filter, &templates)),
            Err(e) => Ok(format_api_error(Self::NAME, &e)),
        }
    }
}
