//! MCP tool handler routing calls to the AWX tools

use rig::tool::Tool;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, ErrorData as McpError, Implementation, ProtocolVersion,
    ServerCapabilities, ServerInfo,
};
use rmcp::{ServerHandler, tool, tool_handler, tool_router};

use crate::agent::tools::awx::{
    AwxTools, GetHostVariablesArgs, GetInventoryHostsArgs, GetJobStatusArgs, ListInventoriesArgs,
    ListRecentJobsArgs, SearchJobTemplatesArgs, StreamJobLogsArgs,
};

/// Name reported to MCP clients during initialization
pub const SERVER_NAME: &str = "awx-mcp-server";

const INSTRUCTIONS: &str = "Read-only access to an AWX instance. \
Use awx_list_recent_jobs or awx_search_job_templates to discover IDs, \
awx_get_job_status for details and awx_stream_job_logs for output \
(follow=true waits until the job finishes). \
Inventories and hosts can be addressed by ID or exact name.";

/// MCP server exposing the AWX tools
#[derive(Clone)]
pub struct AwxMcpServer {
    tools: AwxTools,
    tool_router: ToolRouter<Self>,
}

/// Run a Rig tool and wrap its text output as an MCP result
async fn run_tool<T>(tool: &T, args: T::Args) -> Result<CallToolResult, McpError>
where
    T: Tool<Output = String>,
{
    let text = tool
        .call(args)
        .await
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl AwxMcpServer {
    pub fn new(tools: AwxTools) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the tools offered to MCP clients
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| t.name.to_string())
            .collect()
    }

    #[tool(
        annotations(read_only_hint = true, open_world_hint = true),
        description = "Get the status and details of an AWX job. Returns status with emoji, timing and related template/inventory/project IDs."
    )]
    async fn awx_get_job_status(
        &self,
        Parameters(args): Parameters<GetJobStatusArgs>,
    ) -> Result<CallToolResult, McpError> {
        log::info!("awx_get_job_status job_id={}", args.job_id);
        run_tool(&self.tools.get_job_status, args).await
    }

    #[tool(
        annotations(read_only_hint = true, open_world_hint = true),
        description = "Stream or retrieve job execution logs. follow=false returns the current output; follow=true polls every 2 seconds until the job completes and returns the full log."
    )]
    async fn awx_stream_job_logs(
        &self,
        Parameters(args): Parameters<StreamJobLogsArgs>,
    ) -> Result<CallToolResult, McpError> {
        log::info!(
            "awx_stream_job_logs job_id={} follow={}",
            args.job_id,
            args.follow
        );
        run_tool(&self.tools.stream_job_logs, args).await
    }

    #[tool(
        annotations(read_only_hint = true, open_world_hint = true),
        description = "List available AWX inventories with host counts, one page at a time."
    )]
    async fn awx_list_inventories(
        &self,
        Parameters(args): Parameters<ListInventoriesArgs>,
    ) -> Result<CallToolResult, McpError> {
        log::info!(
            "awx_list_inventories page={} page_size={}",
            args.page,
            args.page_size
        );
        run_tool(&self.tools.list_inventories, args).await
    }

    #[tool(
        annotations(read_only_hint = true, open_world_hint = true),
        description = "Get all hosts in an AWX inventory, identified by inventory_id or exact inventory_name."
    )]
    async fn awx_get_inventory_hosts(
        &self,
        Parameters(args): Parameters<GetInventoryHostsArgs>,
    ) -> Result<CallToolResult, McpError> {
        log::info!(
            "awx_get_inventory_hosts id={:?} name={:?}",
            args.inventory_id,
            args.inventory_name
        );
        run_tool(&self.tools.get_inventory_hosts, args).await
    }

    #[tool(
        annotations(read_only_hint = true, open_world_hint = true),
        description = "Get variables for a specific host, identified by host_id or exact host_name (FQDN). Returns JSON."
    )]
    async fn awx_get_host_variables(
        &self,
        Parameters(args): Parameters<GetHostVariablesArgs>,
    ) -> Result<CallToolResult, McpError> {
        log::info!(
            "awx_get_host_variables id={:?} name={:?}",
            args.host_id,
            args.host_name
        );
        run_tool(&self.tools.get_host_variables, args).await
    }

    #[tool(
        annotations(read_only_hint = true, open_world_hint = true),
        description = "Search AWX job templates by case-insensitive name substring. Returns IDs, playbooks and descriptions."
    )]
    async fn awx_search_job_templates(
        &self,
        Parameters(args): Parameters<SearchJobTemplatesArgs>,
    ) -> Result<CallToolResult, McpError> {
        log::info!(
            "awx_search_job_templates filter={:?} limit={}",
            args.name_filter,
            args.limit
        );
        run_tool(&self.tools.search_job_templates, args).await
    }

    #[tool(
        annotations(read_only_hint = true, open_world_hint = true),
        description = "List recent AWX job executions, newest first, optionally filtered by status."
    )]
    async fn awx_list_recent_jobs(
        &self,
        Parameters(args): Parameters<ListRecentJobsArgs>,
    ) -> Result<CallToolResult, McpError> {
        log::info!(
            "awx_list_recent_jobs status={:?} limit={}",
            args.status,
            args.limit
        );
        run_tool(&self.tools.list_recent_jobs, args).await
    }
}

#[tool_handler]
impl ServerHandler for AwxMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}
