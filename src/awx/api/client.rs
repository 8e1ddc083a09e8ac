//! AWX API client
//!
//! Provides authenticated access to the AWX REST API (v2) for jobs,
//! inventories, hosts and job templates.

use super::error::{AwxApiError, Result};
use super::types::{Host, Inventory, Job, JobTemplate, Page};
use crate::awx::transport::{AwxTransport, PageRequest};
use crate::config::types::AwxConfig;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// User agent for API requests
const USER_AGENT: &str = concat!("awx-mcp/", env!("CARGO_PKG_VERSION"));

/// Path of the versioned API root, relative to the AWX base URL
const API_ROOT: &str = "/api/v2/";

/// Client for interacting with the AWX API
pub struct AwxApiClient {
    /// HTTP client with configured timeout and headers
    http_client: Client,
    /// AWX base URL without trailing slash
    base_url: String,
    /// Versioned API root (`{base_url}/api/v2/`)
    api_base: String,
    username: String,
    password: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for AwxApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwxApiClient")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl AwxApiClient {
    /// Create a client from a validated configuration
    pub fn new(config: &AwxConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| AwxApiError::RequestFailed(e.to_string()))?;

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let api_base = format!("{}{}", base_url, API_ROOT);

        Ok(Self {
            http_client,
            base_url,
            api_base,
            username: config.username.clone(),
            password: config.password.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// Get the configured AWX base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the versioned API root
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_base, endpoint.trim_start_matches('/'))
    }

    /// Issue an authenticated GET and map failures to [`AwxApiError`]
    async fn request(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Response> {
        let url = self.endpoint_url(endpoint);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .http_client
            .get(&url)
            .basic_auth(&self.username, Some(&self.password))
            .query(query)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        log::warn!("AWX request {} failed with status {}", endpoint, status);
        Err(AwxApiError::from_status(status.as_u16(), endpoint, &body))
    }

    /// Make an authenticated GET request and decode the JSON body
    ///
    /// Failures while reading the body are transport errors; only a body that
    /// arrived completely but does not decode is a [`AwxApiError::ParseError`].
    async fn get<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<T> {
        let body = self
            .request(endpoint, query)
            .await?
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&body).map_err(|e| AwxApiError::ParseError(e.to_string()))
    }

    /// Make an authenticated GET request and return the raw body
    async fn get_text(&self, endpoint: &str, query: &[(&str, String)]) -> Result<String> {
        self.request(endpoint, query)
            .await?
            .text()
            .await
            .map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, error: reqwest::Error) -> AwxApiError {
        if error.is_timeout() {
            AwxApiError::Timeout(self.timeout_secs)
        } else if error.is_connect() {
            AwxApiError::ConnectionFailed(self.base_url.clone())
        } else {
            AwxApiError::RequestFailed(error.to_string())
        }
    }

    // =========================================================================
    // Job API methods
    // =========================================================================

    /// List recent jobs, optionally filtered by status
    ///
    /// Endpoint: GET /api/v2/jobs/
    pub async fn list_jobs(
        &self,
        status: Option<&str>,
        limit: u32,
        order_by: &str,
    ) -> Result<Vec<Job>> {
        let mut query = vec![
            ("page_size", limit.to_string()),
            ("order_by", order_by.to_string()),
        ];
        if let Some(s) = status {
            query.push(("status", s.to_string()));
        }
        let page: Page<Job> = self.get("jobs/", &query).await?;
        Ok(page.results)
    }

    // =========================================================================
    // Inventory API methods
    // =========================================================================

    /// List inventories, one page at a time
    ///
    /// Endpoint: GET /api/v2/inventories/
    pub async fn list_inventories(&self, page: u32, page_size: u32) -> Result<Page<Inventory>> {
        self.list_page("inventories/", PageRequest { page, page_size })
            .await
    }

    /// Get an inventory by ID
    ///
    /// Endpoint: GET /api/v2/inventories/:id/
    pub async fn get_inventory(&self, inventory_id: u64) -> Result<Inventory> {
        self.get(&format!("inventories/{}/", inventory_id), &[]).await
    }

    /// Find an inventory by exact name
    pub async fn find_inventory_by_name(&self, name: &str) -> Result<Option<Inventory>> {
        let page: Page<Inventory> = self
            .get("inventories/", &[("name", name.to_string())])
            .await?;
        Ok(page.results.into_iter().next())
    }

    // =========================================================================
    // Host API methods
    // =========================================================================

    /// Get a host by ID
    ///
    /// Endpoint: GET /api/v2/hosts/:id/
    pub async fn get_host(&self, host_id: u64) -> Result<Host> {
        self.get(&format!("hosts/{}/", host_id), &[]).await
    }

    /// Find a host by exact name
    pub async fn find_host_by_name(&self, name: &str) -> Result<Option<Host>> {
        let page: Page<Host> = self.get("hosts/", &[("name", name.to_string())]).await?;
        Ok(page.results.into_iter().next())
    }

    /// Get the variables attached to a host
    ///
    /// Endpoint: GET /api/v2/hosts/:id/variable_data/
    pub async fn get_host_variables(&self, host_id: u64) -> Result<serde_json::Value> {
        self.get(&format!("hosts/{}/variable_data/", host_id), &[])
            .await
    }

    // =========================================================================
    // Job template API methods
    // =========================================================================

    /// Search job templates by case-insensitive name substring
    ///
    /// Endpoint: GET /api/v2/job_templates/
    pub async fn search_job_templates(
        &self,
        name_filter: Option<&str>,
        limit: u32,
    ) -> Result<Vec<JobTemplate>> {
        let mut query = vec![("page_size", limit.to_string())];
        if let Some(filter) = name_filter {
            query.push(("name__icontains", filter.to_string()));
        }
        let page: Page<JobTemplate> = self.get("job_templates/", &query).await?;
        Ok(page.results)
    }
}

impl AwxTransport for AwxApiClient {
    /// Endpoint: GET /api/v2/jobs/:id/
    async fn get_job(&self, job_id: u64) -> Result<Job> {
        self.get(&format!("jobs/{}/", job_id), &[]).await
    }

    /// Endpoint: GET /api/v2/jobs/:id/stdout/?format=txt
    async fn get_job_output(&self, job_id: u64, start_line: usize) -> Result<String> {
        let mut query = vec![("format", "txt".to_string())];
        if start_line > 0 {
            query.push(("start_line", start_line.to_string()));
        }
        self.get_text(&format!("jobs/{}/stdout/", job_id), &query)
            .await
    }

    async fn list_page<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        request: PageRequest,
    ) -> Result<Page<T>> {
        let query = [
            ("page", request.page.to_string()),
            ("page_size", request.page_size.to_string()),
        ];
        self.get(endpoint, &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> AwxConfig {
        AwxConfig {
            base_url: url.to_string(),
            username: "admin".to_string(),
            password: "secret".to_string(),
            timeout_secs: 30,
        }
    }

    #[test]
    fn test_client_construction() {
        let client = AwxApiClient::new(&config("https://awx.example.com/")).unwrap();
        assert_eq!(client.base_url(), "https://awx.example.com");
        assert_eq!(client.api_base(), "https://awx.example.com/api/v2/");
    }

    #[test]
    fn test_endpoint_url() {
        let client = AwxApiClient::new(&config("https://awx.example.com")).unwrap();
        assert_eq!(
            client.endpoint_url("/jobs/42/stdout/"),
            "https://awx.example.com/api/v2/jobs/42/stdout/"
        );
        assert_eq!(
            client.endpoint_url("inventories/3/hosts/"),
            "https://awx.example.com/api/v2/inventories/3/hosts/"
        );
    }

    #[test]
    fn test_debug_hides_password() {
        let client = AwxApiClient::new(&config("https://awx.example.com")).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("awx-mcp/"));
    }
}
