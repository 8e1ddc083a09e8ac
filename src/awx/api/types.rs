//! API response types for the AWX REST API (v2)
//!
//! Only the fields the tools read are modelled; everything else in the AWX
//! payloads is ignored during deserialization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Paginated collection envelope returned by every AWX list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Total number of records in the collection
    #[serde(default)]
    pub count: u64,
    /// URL of the next page, absent on the last page
    #[serde(default)]
    pub next: Option<String>,
    /// URL of the previous page
    #[serde(default)]
    pub previous: Option<String>,
    /// Records on this page, in server order
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Whether the server reports another page after this one
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Execution status of a job
///
/// AWX may report values outside the known set (`new`, `waiting`, ...);
/// they are kept verbatim in [`JobStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Pending,
    Running,
    Successful,
    Failed,
    Canceled,
    Error,
    Other(String),
}

impl JobStatus {
    /// Whether no further transition can occur from this status
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Successful | Self::Failed | Self::Canceled | Self::Error
        )
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Successful => "successful",
            Self::Failed => "failed",
            Self::Canceled => "canceled",
            Self::Error => "error",
            Self::Other(s) => s,
        }
    }

    /// Emoji used when rendering this status
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Successful => "✅",
            Self::Failed => "❌",
            Self::Running => "🔄",
            Self::Pending => "⏳",
            Self::Canceled => "🚫",
            Self::Error => "💥",
            Self::Other(_) => "❓",
        }
    }
}

impl Default for JobStatus {
    fn default() -> Self {
        Self::Other("unknown".to_string())
    }
}

impl From<String> for JobStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "pending" => Self::Pending,
            "running" => Self::Running,
            "successful" => Self::Successful,
            "failed" => Self::Failed,
            "canceled" => Self::Canceled,
            "error" => Self::Error,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for JobStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A job execution (`GET /api/v2/jobs/:id/`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: JobStatus,
    /// ISO timestamp, null until the job starts
    #[serde(default)]
    pub started: Option<String>,
    /// ISO timestamp, null until the job finishes
    #[serde(default)]
    pub finished: Option<String>,
    /// Wall-clock seconds spent running
    #[serde(default)]
    pub elapsed: f64,
    /// Job type (`run`, `check`, ...)
    #[serde(rename = "type", default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub job_template: Option<u64>,
    #[serde(default)]
    pub inventory: Option<u64>,
    #[serde(default)]
    pub project: Option<u64>,
}

/// Inventory summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Number of hosts in the inventory
    #[serde(default)]
    pub total_hosts: u64,
}

/// Host entry within an inventory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Host {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Job template summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobTemplate {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub playbook: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_job_status_parsing() {
        let job: Job = serde_json::from_value(json!({
            "id": 7,
            "name": "deploy",
            "status": "running",
            "started": "2024-01-01T00:00:00Z",
            "finished": null,
            "elapsed": 12.5,
            "type": "job"
        }))
        .unwrap();
        assert_eq!(job.status, JobStatus::Running);
        assert!(!job.status.is_terminal());
        assert_eq!(job.finished, None);
        assert_eq!(job.job_type.as_deref(), Some("job"));
    }

    #[test]
    fn test_unknown_status_preserved() {
        let status: JobStatus = serde_json::from_value(json!("waiting")).unwrap();
        assert_eq!(status, JobStatus::Other("waiting".to_string()));
        assert!(!status.is_terminal());
        assert_eq!(status.emoji(), "❓");
        assert_eq!(serde_json::to_value(&status).unwrap(), json!("waiting"));
    }

    #[test]
    fn test_missing_status_defaults_to_unknown() {
        let job: Job = serde_json::from_value(json!({ "id": 1 })).unwrap();
        assert_eq!(job.status.as_str(), "unknown");
        assert_eq!(job.elapsed, 0.0);
    }

    #[test]
    fn test_terminal_set() {
        for s in ["successful", "failed", "canceled", "error"] {
            assert!(JobStatus::from(s).is_terminal(), "{s} should be terminal");
        }
        for s in ["pending", "running", "new", "waiting"] {
            assert!(!JobStatus::from(s).is_terminal(), "{s} should not be terminal");
        }
    }

    #[test]
    fn test_page_has_next() {
        let page: Page<Host> = serde_json::from_value(json!({
            "count": 1,
            "next": "/api/v2/hosts/?page=2",
            "previous": null,
            "results": [{ "id": 1, "name": "web01" }]
        }))
        .unwrap();
        assert!(page.has_next());
        assert!(page.results[0].enabled);

        let last: Page<Host> =
            serde_json::from_value(json!({ "count": 0, "next": "", "results": [] })).unwrap();
        assert!(!last.has_next());

        let missing: Page<Host> = serde_json::from_value(json!({ "results": [] })).unwrap();
        assert!(!missing.has_next());
    }
}
