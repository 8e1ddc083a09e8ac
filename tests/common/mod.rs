//! Scripted AWX transport shared by the integration tests
//!
//! Each call pops the next scripted response for its kind and records the
//! arguments it was called with. An exhausted script fails the call.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use awx_mcp::awx::api::{AwxApiError, Job, Page, Result};
use awx_mcp::awx::{AwxTransport, PageRequest};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

#[derive(Default)]
pub struct ScriptedTransport {
    jobs: Mutex<VecDeque<Result<Job>>>,
    outputs: Mutex<VecDeque<Result<String>>>,
    pages: Mutex<VecDeque<Result<Value>>>,
    job_calls: Mutex<Vec<u64>>,
    output_calls: Mutex<Vec<(u64, usize)>>,
    page_calls: Mutex<Vec<(String, PageRequest)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_job(&self, job: Result<Job>) -> &Self {
        self.jobs.lock().unwrap().push_back(job);
        self
    }

    pub fn push_status(&self, job_id: u64, status: &str) -> &Self {
        self.push_job(Ok(job(job_id, status)))
    }

    pub fn push_output(&self, output: Result<String>) -> &Self {
        self.outputs.lock().unwrap().push_back(output);
        self
    }

    pub fn push_text(&self, text: &str) -> &Self {
        self.push_output(Ok(text.to_string()))
    }

    pub fn push_page(&self, page: Result<Value>) -> &Self {
        self.pages.lock().unwrap().push_back(page);
        self
    }

    pub fn job_calls(&self) -> Vec<u64> {
        self.job_calls.lock().unwrap().clone()
    }

    pub fn output_calls(&self) -> Vec<(u64, usize)> {
        self.output_calls.lock().unwrap().clone()
    }

    pub fn page_calls(&self) -> Vec<(String, PageRequest)> {
        self.page_calls.lock().unwrap().clone()
    }
}

fn exhausted(what: &str) -> AwxApiError {
    AwxApiError::RequestFailed(format!("no scripted {} response left", what))
}

impl AwxTransport for ScriptedTransport {
    async fn get_job(&self, job_id: u64) -> Result<Job> {
        self.job_calls.lock().unwrap().push(job_id);
        let next = self.jobs.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(exhausted("job")))
    }

    async fn get_job_output(&self, job_id: u64, start_line: usize) -> Result<String> {
        self.output_calls.lock().unwrap().push((job_id, start_line));
        let next = self.outputs.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(exhausted("output")))
    }

    async fn list_page<T: DeserializeOwned + Send>(
        &self,
        endpoint: &str,
        request: PageRequest,
    ) -> Result<Page<T>> {
        self.page_calls
            .lock()
            .unwrap()
            .push((endpoint.to_string(), request));
        let next = self.pages.lock().unwrap().pop_front();
        let value = next.unwrap_or_else(|| Err(exhausted("page")))?;
        serde_json::from_value(value).map_err(|e| AwxApiError::ParseError(e.to_string()))
    }
}

pub fn job(job_id: u64, status: &str) -> Job {
    serde_json::from_value(json!({
        "id": job_id,
        "name": "deploy",
        "status": status,
    }))
    .unwrap()
}

pub fn host(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("host{}.example.com", id),
        "description": "",
        "enabled": true,
    })
}

/// Split `total` hosts into pages of `page_size` the way AWX serves them
pub fn host_pages(total: u64, page_size: u64) -> Vec<Value> {
    let page_count = if total == 0 {
        1
    } else {
        total.div_ceil(page_size)
    };

    (0..page_count)
        .map(|index| {
            let first = index * page_size + 1;
            let last = ((index + 1) * page_size).min(total);
            let results: Vec<Value> = (first..=last).map(host).collect();
            let next = if index + 1 < page_count {
                Value::String(format!("/api/v2/hosts/?page={}", index + 2))
            } else {
                Value::Null
            };
            json!({
                "count": total,
                "next": next,
                "previous": Value::Null,
                "results": results,
            })
        })
        .collect()
}
