use clap::Parser;
use std::path::PathBuf;

use crate::config::types::PartialConfig;

#[derive(Parser)]
#[command(name = "awx-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP server exposing read-only AWX tools over stdio")]
#[command(long_about = "Serves Model Context Protocol requests on stdin/stdout, giving assistants read-only access to an AWX instance: job status and logs, inventories, hosts, host variables and job templates.")]
pub struct Cli {
    /// Path to configuration file (defaults to ~/.awx-mcp.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// AWX base URL, e.g. https://awx.example.com
    #[arg(long, env = "AWX_URL", value_name = "URL")]
    pub url: Option<String>,

    /// AWX username
    #[arg(long, env = "AWX_USERNAME")]
    pub username: Option<String>,

    /// AWX password
    #[arg(long, env = "AWX_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(long, env = "AWX_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    ///
    /// Logs always go to stderr; stdout carries the MCP protocol.
    pub fn init_logging(&self) {
        let level = if self.quiet {
            log::LevelFilter::Error
        } else {
            match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            }
        };

        // An explicit flag wins over RUST_LOG; otherwise RUST_LOG is used as is
        let mut builder = env_logger::Builder::from_default_env();
        if self.quiet || self.verbose > 0 || std::env::var_os("RUST_LOG").is_none() {
            builder.filter_level(level);
        }
        builder.target(env_logger::Target::Stderr).init();
    }

    /// Connection settings given on the command line or via environment
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            url: self.url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout_secs: self.timeout,
        }
    }
}
