//! Job log retrieval
//!
//! Either fetches a job's complete output in one call, or follows a running
//! job: each round reads the job status and the output past the last line
//! already seen, until the status becomes terminal.
//!
//! Follow mode has no overall deadline and no iteration cap. It ends when the
//! job reaches a terminal status or a request fails; on failure the lines
//! gathered so far are dropped and only the error is returned.

use std::time::Duration;

use super::api::Result;
use super::transport::AwxTransport;

/// Delay between two polling rounds in follow mode
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Number of output lines already retrieved for one job
///
/// Lives for a single follow call and only moves forward.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogCursor {
    line: usize,
}

impl LogCursor {
    /// Line offset to request next (`start_line`)
    pub fn position(&self) -> usize {
        self.line
    }

    fn advance(&mut self, lines: usize) {
        self.line += lines;
    }
}

/// Fetches or follows the output of one job
#[derive(Debug)]
pub struct JobLogPoller<'a, T> {
    transport: &'a T,
    poll_interval: Duration,
}

impl<'a, T: AwxTransport> JobLogPoller<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            poll_interval: POLL_INTERVAL,
        }
    }

    /// Override the delay between polling rounds
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Return the job's output
    ///
    /// Without `follow` this is exactly the transport's output at offset 0.
    /// With `follow` the job is polled until it finishes and every line seen
    /// is returned joined by `\n`.
    pub async fn fetch_job_log(&self, job_id: u64, follow: bool) -> Result<String> {
        if !follow {
            return self.transport.get_job_output(job_id, 0).await;
        }
        self.follow(job_id).await
    }

    /// Poll until the job is terminal
    ///
    /// Chunks are split with `str::lines` (`\n` or `\r\n`), the same line
    /// breaks AWX counts for `start_line`; a lone `\r` from progress output
    /// stays inside its line so the cursor never runs ahead of the server.
    async fn follow(&self, job_id: u64) -> Result<String> {
        let mut cursor = LogCursor::default();
        let mut lines: Vec<String> = Vec::new();
        let mut round: u64 = 0;

        loop {
            round += 1;
            let job = self.transport.get_job(job_id).await?;
            let chunk = self
                .transport
                .get_job_output(job_id, cursor.position())
                .await?;

            let before = lines.len();
            lines.extend(chunk.lines().map(str::to_owned));
            cursor.advance(lines.len() - before);

            log::debug!(
                "job {} round {}: status={} new_lines={} cursor={}",
                job_id,
                round,
                job.status,
                lines.len() - before,
                cursor.position()
            );

            if job.status.is_terminal() {
                log::info!(
                    "job {} finished with status {} after {} polls ({} lines)",
                    job_id,
                    job.status,
                    round,
                    lines.len()
                );
                break;
            }

            tokio::time::sleep(self.poll_interval).await;
        }

        Ok(lines.join("\n"))
    }
}

/// Fetch a job's log with the default poll interval
pub async fn fetch_job_log<T: AwxTransport>(
    transport: &T,
    job_id: u64,
    follow: bool,
) -> Result<String> {
    JobLogPoller::new(transport)
        .fetch_job_log(job_id, follow)
        .await
}
