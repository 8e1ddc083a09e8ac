//! List inventories tool for the agent
//!
//! Allows the agent to browse AWX inventories one page at a time.

use std::sync::Arc;

use rig::completion::ToolDefinition;
use rig::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

use super::render::render_inventories;
use crate::agent::tools::error::{format_api_error, format_validation_error};
use crate::awx::AwxApiClient;

/// Default number of inventories per page
const DEFAULT_PAGE_SIZE: u32 = 50;

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Arguments for the list inventories tool
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListInventoriesArgs {
    /// Page number (default: 1)
    #[serde(default = "default_page")]
    pub page: u32,
    /// Results per page (default: 50)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Error type for list inventories operations
///
/// Required by Rig's `Tool` trait; never returned, since AWX failures are
/// rendered into the tool output.
#[derive(Debug, thiserror::Error)]
#[error("List inventories error: {0}")]
pub struct ListInventoriesError(String);

/// Tool to list AWX inventories with host counts
#[derive(Debug, Clone)]
pub struct ListInventoriesTool {
    client: Arc<AwxApiClient>,
}

impl ListInventoriesTool {
    /// Create a new ListInventoriesTool
    pub fn new(client: Arc<AwxApiClient>) -> Self {
        Self { client }
    }
}

impl Tool for ListInventoriesTool {
    const NAME: &'static str = "awx_list_inventories";

    type Error = ListInventoriesError;
    type Args = ListInventoriesArgs;
    type Output = String;

    async fn definition(&self, _prompt: String) -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME.to_string(),
            description: r#"List available AWX inventories.

Returns one page of inventories with their IDs, host counts and descriptions,
plus the total number of inventories."#
                .to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "page": {
                        "type": "integer",
                        "description": "Page number (default: 1)"
                    },
                    "page_size": {
                        "type": "integer",
                        "description": "Results per page (default: 50)"
                    }
                }
            }),
        }
    }

    async fn call(&self, args: Self::Args) -> Result<Self::Output, Self::Error> {
        if args.page == 0 || args.page_size == 0 {
            return Ok(format_validation_error(
                Self::NAME,
                "page and page_size must be at least 1",
            ));
        }

        match self.client.list_inventories(args.page, args.page_size).await {
            Ok(page) => Ok(render_inventories(&page, args.page)),
            Err(e) => Ok(format_api_error(Self::NAME, &e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_name() {
        assert_eq!(ListInventoriesTool::NAME, "awx_list_inventories");
    }

    #[test]
    fn test_default_args() {
        let args: ListInventoriesArgs = serde_json::from_value(json!({})).unwrap();
        assert_eq!(args.page, 1);
        assert_eq!(args.page_size, 50);
    }
}
