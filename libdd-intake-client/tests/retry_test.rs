// Copyright 2026-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use httpmock::prelude::*;
use libdd_intake_client::{HttpClient, HttpClientError, HttpRequest, RetryConfig};
use std::time::Duration;

fn transient_client(max_retries: u32) -> HttpClient {
    HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .retry(
            RetryConfig::transient()
                .max_retries(max_retries)
                .with_jitter(false)
                .initial_delay(Duration::from_millis(5)),
        )
        .build()
        .unwrap()
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_post_sends_headers_and_body() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/api/v2/logs")
                .header("DD-API-KEY", "test-key")
                .header("content-type", "application/json")
                .body("[]");
            then.status(202).body("{}");
        })
        .await;

    let client = transient_client(4);
    let req = HttpRequest::post(server.url("/api/v2/logs"))
        .header("DD-API-KEY", "test-key")
        .header("Content-Type", "application/json")
        .body(b"[]".to_vec());
    let response = client.send(req).await.unwrap();

    assert_eq!(response.status_code, 202);
    assert_eq!(response.text(), "{}");
    mock.assert_calls_async(1).await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_retries_transient_status_until_budget_is_spent() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/v0.2/traces");
            then.status(503).body("unavailable");
        })
        .await;

    let client = transient_client(4);
    let req = HttpRequest::post(server.url("/api/v0.2/traces"));
    let result = client.send(req).await;

    assert!(matches!(
        result,
        Err(HttpClientError::RequestFailed { status: 503, .. })
    ));
    // Initial request + 4 retries
    mock.assert_calls_async(5).await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_retries_forbidden() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/forbidden");
            then.status(403).body("forbidden");
        })
        .await;

    let client = transient_client(2);
    let req = HttpRequest::post(server.url("/forbidden"));
    let result = client.send(req).await;

    assert!(matches!(
        result,
        Err(HttpClientError::RequestFailed { status: 403, .. })
    ));
    mock.assert_calls_async(3).await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_status_outside_forcelist_fails_immediately() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/bad");
            then.status(400).body("bad request");
        })
        .await;

    let client = transient_client(4);
    let req = HttpRequest::post(server.url("/bad"));
    let result = client.send(req).await;

    match result {
        Err(HttpClientError::RequestFailed { status, body }) => {
            assert_eq!(status, 400);
            assert_eq!(body, "bad request");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    mock.assert_calls_async(1).await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_no_retry_when_not_configured() {
    let server = MockServer::start_async().await;

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/fail");
            then.status(503).body("unavailable");
        })
        .await;

    let client = HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let req = HttpRequest::post(server.url("/fail"));
    let result = client.send(req).await;

    assert!(result.is_err());
    mock.assert_calls_async(1).await;
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_retries_on_connection_error() {
    // Nothing listens on port 1.
    let client = transient_client(1);
    let req = HttpRequest::post("http://127.0.0.1:1/api/v2/logs");
    let result = client.send(req).await;

    assert!(matches!(result, Err(HttpClientError::ConnectionFailed(_))));
}

#[cfg_attr(miri, ignore)]
#[tokio::test]
async fn test_backoff_increases() {
    let server = MockServer::start_async().await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/slow-retry");
            then.status(429).body("slow down");
        })
        .await;

    let client = HttpClient::builder()
        .timeout(Duration::from_secs(5))
        .retry(
            RetryConfig::transient()
                .max_retries(3)
                .with_jitter(false)
                .initial_delay(Duration::from_millis(50)),
        )
        .build()
        .unwrap();

    let start = std::time::Instant::now();
    let req = HttpRequest::post(server.url("/slow-retry"));
    let _ = client.send(req).await;
    let elapsed = start.elapsed();

    // Without jitter: 50ms + 100ms + 200ms = 350ms minimum
    assert!(
        elapsed >= Duration::from_millis(300),
        "expected at least 300ms of backoff delay, got {:?}",
        elapsed
    );
}
