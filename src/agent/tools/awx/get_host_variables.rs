//! Get host variables tool for the agent

use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::render::render_host_variables;
use crate::agent::tools::error::{format_api_error, format_validation_error};
use crate::awx::AwxApiClient;
use crate::awx::api::Host;

/// Arguments for the get host variables tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetHostVariablesArgs {
    /// Host ID (use this OR host_name)
    pub host_id: Option<u64>,
    /// Host FQDN (use this OR host_id)
    pub host_name: Option<String>,
}

/// Error type for get host variables operations
///
/// Required by Rig's `Tool` trait; never returned, since AWX failures are
/// rendered into the tool output.
#[derive(Debug, thiserror::Error)]
#[error("Get host variables error: {0}")]
pub struct GetHostVariablesError(String);

/// Tool to show the variables defined on a host
#[derive(Debug, Clone)]
pub struct GetHostVariablesTool {
    client: Arc<AwxApiClient>,
}

impl GetHostVariablesTool {
    /// Create a new GetHostVariablesTool
    pub fn new(client: Arc<AwxApiClient>) -> Self {
        Self { client }
    }
}

impl Tool for GetHostVariablesTool {
    const NAME: &'static str = "awx_get_host_variables";

    type Error = GetHostVariablesError;
    type Args = GetHostVariablesArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: r#"Get variables for a specific host.

Identify the host either by host_id or by its exact host_name (FQDN).
Returns the host variables formatted as JSON."#
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "host_id": {
                        "type": "integer",
                        "description": "Host ID (use this OR host_name)"
                    },
                    "host_name": {
                        "type": "string",
                        "description": "Host FQDN (use this OR host_id)"
                    }
                }
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let host: Host = match (args.host_id, args.host_name.as_deref()) {
            (Some(id), _) => match self.client.get_host(id).await {
                Ok(host) => host,
                Err(e) => return Ok(format_api_error(Self::NAME, &e)),
            },
            (None, Some(name)) => match self.client.find_host_by_name(name).await {
                Ok(Some(host)) => host,
                Ok(None) => {
                    return Ok(format_validation_error(
                        Self::NAME,
                        &format!("Host not found: {}", name),
                    ));
                }
                Err(e) => return Ok(format_api_error(Self::NAME, &e)),
            },
            (None, None) => {
                return Ok(format_validation_error(
                    Self::NAME,
                    "Must provide host_id or host_name",
                ));
            }
        };

        match self.client.get_host_variables(host.id).await {
            Ok(variables) => Ok(render_host_variables(&host, &variables)),
            Err(e) => Ok(format_api_error(Self::NAME, &e)),
        }
    }
}
