use clap::Parser;
use awx_mcp::{
    agent::tools::awx::AwxTools,
    awx::AwxApiClient,
    cli::Cli,
    config,
    server::{self, AwxMcpServer},
};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> awx_mcp::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    // Load configuration
    let config = config::load_config(cli.config.as_deref(), cli.overrides())?;

    log::info!("AWX MCP Server starting (v{})", awx_mcp::VERSION);

    let client = Arc::new(AwxApiClient::new(&config)?);
    log::info!("Connected to AWX at {}", client.base_url());

    let server = AwxMcpServer::new(AwxTools::new(client));
    server::serve_stdio(server).await
}
