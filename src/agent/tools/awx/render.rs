//! Markdown rendering of AWX resources for tool output

use crate::awx::api::types::{Host, Inventory, Job, JobTemplate, Page};

const NOT_AVAILABLE: &str = "N/A";

fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

fn id_or_na(value: Option<u64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |id| id.to_string())
}

fn name_or_na(name: &str) -> &str {
    if name.is_empty() { NOT_AVAILABLE } else { name }
}

/// Detailed status card for one job
pub fn render_job_status(job: &Job) -> String {
    format!(
        "{emoji} Job {id}: {name}\n\
         \n\
         **Status**: {status}\n\
         **Type**: {job_type}\n\
         **Started**: {started}\n\
         **Finished**: {finished}\n\
         **Elapsed**: {elapsed:.1}s\n\
         \n\
         **Related Resources**:\n\
         - Job Template ID: {template}\n\
         - Inventory ID: {inventory}\n\
         - Project: {project}\n",
        emoji = job.status.emoji(),
        id = job.id,
        name = name_or_na(&job.name),
        status = job.status,
        job_type = or_na(job.job_type.as_deref()),
        started = or_na(job.started.as_deref()),
        finished = or_na(job.finished.as_deref()),
        elapsed = job.elapsed,
        template = id_or_na(job.job_template),
        inventory = id_or_na(job.inventory),
        project = id_or_na(job.project),
    )
}

/// One page of inventories with host counts
pub fn render_inventories(page: &Page<Inventory>, page_number: u32) -> String {
    let mut lines = vec![format!(
        "📦 Found {} inventories (showing page {}):\n",
        page.count, page_number
    )];
    for inv in &page.results {
        lines.push(format!(
            "- **{}** (ID: {}) - {} hosts",
            inv.name, inv.id, inv.total_hosts
        ));
        if !inv.description.is_empty() {
            lines.push(format!("  {}", inv.description));
        }
    }
    lines.join("\n")
}

/// Every host of an inventory
pub fn render_inventory_hosts(inventory: &Inventory, hosts: &[Host]) -> String {
    let mut lines = vec![
        format!(
            "🖥️ Hosts in inventory '{}' (ID: {}):\n",
            inventory.name, inventory.id
        ),
        format!("Total hosts: {}\n", hosts.len()),
    ];
    for host in hosts {
        let enabled = if host.enabled { "✅" } else { "❌" };
        lines.push(format!("{} **{}** (ID: {})", enabled, host.name, host.id));
        if !host.description.is_empty() {
            lines.push(format!("  {}", host.description));
        }
    }
    lines.join("\n")
}

/// Host variables as a fenced JSON block
pub fn render_host_variables(host: &Host, variables: &serde_json::Value) -> String {
    let pretty = serde_json::to_string_pretty(variables).unwrap_or_else(|_| variables.to_string());
    [
        format!("🔧 Variables for host '{}' (ID: {}):\n", host.name, host.id),
        "```json".to_string(),
        pretty,
        "```".to_string(),
    ]
    .join("\n")
}

/// Job templates with their playbooks
pub fn render_job_templates(name_filter: Option<&str>, templates: &[JobTemplate]) -> String {
    let mut lines = vec![match name_filter {
        Some(filter) => format!("🔍 Job templates matching '{}':\n", filter),
        None => "📋 Available job templates:\n".to_string(),
    }];
    lines.push(format!("Found {} templates\n", templates.len()));
    for tmpl in templates {
        lines.push(format!("- **{}** (ID: {})", tmpl.name, tmpl.id));
        lines.push(format!("  Playbook: `{}`", or_na(tmpl.playbook.as_deref())));
        if !tmpl.description.is_empty() {
            lines.push(format!("  {}", tmpl.description));
        }
    }
    lines.join("\n")
}

/// Recent jobs, newest first
pub fn render_recent_jobs(status_filter: Option<&str>, jobs: &[Job]) -> String {
    let mut lines = vec![match status_filter {
        Some(status) => format!("📜 Recent jobs with status '{}':\n", status),
        None => "📜 Recent jobs:\n".to_string(),
    }];
    lines.push(format!("Showing {} jobs\n", jobs.len()));
    for job in jobs {
        lines.push(format!(
            "{} **Job {}**: {}",
            job.status.emoji(),
            job.id,
            name_or_na(&job.name)
        ));
        lines.push(format!("  Status: {}", job.status));
        lines.push(format!("  Started: {}", or_na(job.started.as_deref())));
        if let Some(finished) = &job.finished {
            lines.push(format!("  Finished: {}", finished));
        }
    }
    lines.join("\n")
}
