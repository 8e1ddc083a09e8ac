mod common;

use std::time::Duration;

use awx_mcp::awx::api::AwxApiError;
use awx_mcp::awx::{JobLogPoller, POLL_INTERVAL, fetch_job_log};
use common::ScriptedTransport;
use tokio::time::Instant;

#[tokio::test]
async fn test_without_follow_returns_output_unchanged() {
    let transport = ScriptedTransport::new();
    transport.push_text("PLAY [all]\n\nTASK [ping]\nok: [web1]\n");

    let log = fetch_job_log(&transport, 42, false).await.unwrap();

    assert_eq!(log, "PLAY [all]\n\nTASK [ping]\nok: [web1]\n");
    assert!(transport.job_calls().is_empty());
    assert_eq!(transport.output_calls(), vec![(42, 0)]);
}

#[tokio::test]
async fn test_without_follow_propagates_error() {
    let transport = ScriptedTransport::new();
    transport.push_output(Err(AwxApiError::NotFound("jobs/42/stdout/".to_string())));

    let err = fetch_job_log(&transport, 42, false).await.unwrap_err();
    assert!(matches!(err, AwxApiError::NotFound(_)));
}

#[tokio::test(start_paused = true)]
async fn test_follow_collects_lines_until_terminal() {
    let transport = ScriptedTransport::new();
    transport
        .push_status(42, "running")
        .push_status(42, "running")
        .push_status(42, "successful");
    transport.push_text("a\nb").push_text("c").push_text("d");

    let started = Instant::now();
    let log = fetch_job_log(&transport, 42, true).await.unwrap();

    assert_eq!(log, "a\nb\nc\nd");
    assert_eq!(transport.job_calls(), vec![42, 42, 42]);
    assert_eq!(transport.output_calls(), vec![(42, 0), (42, 2), (42, 3)]);

    // Two sleeps between three rounds, none after the terminal one
    let elapsed = started.elapsed();
    assert!(elapsed >= POLL_INTERVAL * 2);
    assert!(elapsed < POLL_INTERVAL * 3);
}

#[tokio::test(start_paused = true)]
async fn test_follow_already_finished_job_polls_once() {
    let transport = ScriptedTransport::new();
    transport.push_status(7, "failed");
    transport.push_text("fatal: [db1]: UNREACHABLE!\n");

    let started = Instant::now();
    let log = fetch_job_log(&transport, 7, true).await.unwrap();

    assert_eq!(log, "fatal: [db1]: UNREACHABLE!");
    assert_eq!(transport.job_calls().len(), 1);
    assert!(started.elapsed() < POLL_INTERVAL);
}

#[tokio::test(start_paused = true)]
async fn test_follow_empty_round_keeps_cursor() {
    let transport = ScriptedTransport::new();
    transport
        .push_status(9, "pending")
        .push_status(9, "running")
        .push_status(9, "canceled");
    transport.push_text("a").push_text("").push_text("b\n");

    let log = fetch_job_log(&transport, 9, true).await.unwrap();

    assert_eq!(log, "a\nb");
    assert_eq!(transport.output_calls(), vec![(9, 0), (9, 1), (9, 1)]);
}

#[tokio::test(start_paused = true)]
async fn test_follow_keeps_carriage_returns_inside_lines() {
    let transport = ScriptedTransport::new();
    transport
        .push_status(5, "running")
        .push_status(5, "successful");
    transport
        .push_text("10%\r50%\r100%\r\nunpacked\n")
        .push_text("done");

    let log = fetch_job_log(&transport, 5, true).await.unwrap();

    assert_eq!(log, "10%\r50%\r100%\nunpacked\ndone");
    assert_eq!(transport.output_calls(), vec![(5, 0), (5, 2)]);
}

#[tokio::test(start_paused = true)]
async fn test_follow_stops_on_every_terminal_status() {
    for status in ["successful", "failed", "canceled", "error"] {
        let transport = ScriptedTransport::new();
        transport.push_status(1, status);
        transport.push_text("done");

        let log = fetch_job_log(&transport, 1, true).await.unwrap();
        assert_eq!(log, "done", "status {}", status);
        assert_eq!(transport.job_calls().len(), 1, "status {}", status);
    }
}

#[tokio::test(start_paused = true)]
async fn test_follow_status_error_discards_collected_lines() {
    let transport = ScriptedTransport::new();
    transport
        .push_status(42, "running")
        .push_job(Err(AwxApiError::ServerError {
            status: 502,
            message: "Bad Gateway".to_string(),
        }));
    transport.push_text("a\nb");

    let err = fetch_job_log(&transport, 42, true).await.unwrap_err();

    assert!(matches!(err, AwxApiError::ServerError { status: 502, .. }));
    assert_eq!(transport.job_calls().len(), 2);
    assert_eq!(transport.output_calls(), vec![(42, 0)]);
}

#[tokio::test(start_paused = true)]
async fn test_follow_output_error_stops_polling() {
    let transport = ScriptedTransport::new();
    transport
        .push_status(42, "running")
        .push_status(42, "running")
        .push_status(42, "running");
    transport
        .push_text("a")
        .push_output(Err(AwxApiError::Timeout(30)));

    let err = fetch_job_log(&transport, 42, true).await.unwrap_err();

    assert!(matches!(err, AwxApiError::Timeout(30)));
    assert_eq!(transport.job_calls().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_custom_poll_interval() {
    let transport = ScriptedTransport::new();
    transport
        .push_status(3, "running")
        .push_status(3, "successful");
    transport.push_text("x").push_text("y");

    let interval = Duration::from_millis(250);
    let started = Instant::now();
    let log = JobLogPoller::new(&transport)
        .with_poll_interval(interval)
        .fetch_job_log(3, true)
        .await
        .unwrap();

    assert_eq!(log, "x\ny");
    let elapsed = started.elapsed();
    assert!(elapsed >= interval);
    assert!(elapsed < POLL_INTERVAL);
}
