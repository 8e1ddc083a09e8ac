//! MCP Server
//!
//! Exposes the AWX tools to Model Context Protocol clients over stdio.
//! Logging goes to stderr so stdout stays reserved for protocol frames.
//!
//! # Architecture
//!
//! ```text
//! MCP client (IDE / assistant)
//!     ↓ JSON-RPC over stdio
//! AwxMcpServer (this module)
//!     ↓ AwxTools
//! AwxApiClient
//!     ↓ HTTPS + basic auth
//! AWX /api/v2/
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use awx_mcp::agent::tools::awx::AwxTools;
//! use awx_mcp::awx::AwxApiClient;
//! use awx_mcp::server::{AwxMcpServer, serve_stdio};
//!
//! let client = Arc::new(AwxApiClient::new(&config)?);
//! let server = AwxMcpServer::new(AwxTools::new(client));
//! serve_stdio(server).await?;
//! ```

mod handler;

use rmcp::ServiceExt;

use crate::error::{AwxMcpError, Result};

pub use handler::{AwxMcpServer, SERVER_NAME};

/// Serve MCP requests on stdin/stdout until the client disconnects
pub async fn serve_stdio(server: AwxMcpServer) -> Result<()> {
    log::info!("Serving MCP over stdio");

    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| AwxMcpError::Server(format!("failed to initialize MCP session: {}", e)))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| AwxMcpError::Server(format!("MCP service task failed: {}", e)))?;

    log::info!("MCP session ended: {:?}", reason);
    Ok(())
}
