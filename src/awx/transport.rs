//! Transport contract consumed by the log poller and the pagination walker
//!
//! [`AwxApiClient`](super::api::AwxApiClient) is the production implementation;
//! tests drive the poller and walker with scripted implementations.

use serde::de::DeserializeOwned;
use std::future::Future;

use super::api::types::{Job, Page};
use super::api::Result;

/// Query for one page of a paginated collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
}

/// Minimal set of AWX calls the core orchestration needs
pub trait AwxTransport: Send + Sync {
    /// Fetch job details including current status
    fn get_job(&self, job_id: u64) -> impl Future<Output = Result<Job>> + Send;

    /// Fetch plain-text output from `start_line` onward
    ///
    /// Returns an empty string when no new output exists.
    fn get_job_output(
        &self,
        job_id: u64,
        start_line: usize,
    ) -> impl Future<Output = Result<String>> + Send;

    /// Fetch one page of the collection at `endpoint` (relative to `/api/v2/`)
    fn list_page<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        request: PageRequest,
    ) -> impl Future<Output = Result<Page<T>>> + Send;
}
