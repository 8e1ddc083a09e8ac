//! AWX integration
//!
//! This module provides:
//! - An API client for the AWX REST API
//! - The transport contract used by the log poller and pagination walker
//! - Job log following and collection pagination built on that contract

pub mod api;
pub mod logs;
pub mod pagination;
pub mod transport;

pub use api::{AwxApiClient, AwxApiError};
pub use logs::{JobLogPoller, LogCursor, POLL_INTERVAL, fetch_job_log};
pub use pagination::{HOST_PAGE_SIZE, PageCursor, collect_all_pages, fetch_all_hosts};
pub use transport::{AwxTransport, PageRequest};
