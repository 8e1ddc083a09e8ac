//! Get inventory hosts tool for the agent
//!
//! Resolves an inventory by ID or exact name and lists every host in it,
//! walking all pages of the host collection.

use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::render::render_inventory_hosts;
use crate::agent::tools::error::{format_api_error, format_validation_error};
use crate::awx::api::Inventory;
use crate::awx::{AwxApiClient, fetch_all_hosts};

/// Arguments for the get inventory hosts tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetInventoryHostsArgs {
    /// Inventory ID (use this OR inventory_name)
    pub inventory_id: Option<u64>,
    /// Inventory name (use this OR inventory_id)
    pub inventory_name: Option<String>,
}

/// Error type for get inventory hosts operations
///
/// Required by Rig's `Tool` trait; never returned, since AWX failures are
/// rendered into the tool output.
#[derive(Debug, thiserror::Error)]
#[error("Get inventory hosts error: {0}")]
pub struct GetInventoryHostsError(String);

/// Tool to list all hosts of an inventory
#[derive(Debug, Clone)]
pub struct GetInventoryHostsTool {
    client: Arc<AwxApiClient>,
}

impl GetInventoryHostsTool {
    /// Create a new GetInventoryHostsTool
    pub fn new(client: Arc<AwxApiClient>) -> Self {
        Self { client }
    }
}

impl Tool for GetInventoryHostsTool {
    const NAME: &'static str = "awx_get_inventory_hosts";

    type Error = GetInventoryHostsError;
    type Args = GetInventoryHostsArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: r#"Get all hosts in an AWX inventory.

Identify the inventory either by inventory_id or by its exact inventory_name.
Returns every host (all pages) with its ID, enabled state and description."#
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "inventory_id": {
                        "type": "integer",
                        "description": "Inventory ID (use this OR inventory_name)"
                    },
                    "inventory_name": {
                        "type": "string",
                        "description": "Inventory name (use this OR inventory_id)"
                    }
                }
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        let inventory: Inventory = match (args.inventory_id, args.inventory_name.as_deref()) {
            (Some(id), _) => match self.client.get_inventory(id).await {
                Ok(inv) => inv,
                Err(e) => return Ok(format_api_error(Self::NAME, &e)),
            },
            (None, Some(name)) => match self.client.find_inventory_by_name(name).await {
                Ok(Some(inv)) => inv,
                Ok(None) => {
                    return Ok(format_validation_error(
                        Self::NAME,
                        &format!("Inventory not found: {}", name),
                    ));
                }
                Err(e) => return Ok(format_api_error(Self::NAME, &e)),
            },
            (None, None) => {
                return Ok(format_validation_error(
                    Self::NAME,
                    "Must provide inventory_id or inventory_name",
                ));
            }
        };

        match fetch_all_hosts(self.client.as_ref(), inventory.id).await {
            Ok(hosts) => Ok(render_inventory_hosts(&inventory, &hosts)),
            Err(e) => Ok(format_api_error(Self::NAME, &e)),
        }
    }
}
