use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};

use super::report;
use super::result::{Classification, ProbeOutcome};
use crate::config::Target;

/// Wall-clock limit for a single probe, counted from request initiation.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

pub fn classify(status: StatusCode) -> Classification {
    if status.as_u16() < 400 {
        Classification::Success
    } else {
        Classification::Failed
    }
}

/// Issue exactly one GET against `target` and classify what happened.
///
/// Elapsed time runs from just before the request is dispatched until the
/// response headers arrive or the request fails. Connection failures and
/// timeouts are logged and classified as [`Classification::ConnError`]; this
/// function never fails.
pub async fn probe_url(client: &Client, target: &Target, timeout: Duration) -> ProbeOutcome {
    let start = Instant::now();
    let result = client.get(target.url().clone()).timeout(timeout).send().await;
    let elapsed = start.elapsed();

    let classification = match result {
        Ok(response) => classify(response.status()),
        Err(err) if err.is_timeout() => {
            log::error!("Request to {target} timed out after {timeout:?}.");
            Classification::ConnError
        }
        Err(err) => {
            log::error!("Failed to connect to {target}. Reason: {}", report(&err));
            Classification::ConnError
        }
    };
    log::debug!("Probe of {target}: {classification} in {elapsed:?}");

    ProbeOutcome {
        target: target.clone(),
        classification,
        elapsed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::capture;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mount(server: &MockServer, route: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(server)
            .await;
    }

    fn target(server: &MockServer, route: &str) -> Target {
        Target::parse(&format!("{}{}", server.uri(), route)).unwrap()
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(StatusCode::OK), Classification::Success);
        assert_eq!(classify(StatusCode::NO_CONTENT), Classification::Success);
        assert_eq!(classify(StatusCode::NOT_MODIFIED), Classification::Success);
        assert_eq!(classify(StatusCode::BAD_REQUEST), Classification::Failed);
        assert_eq!(classify(StatusCode::NOT_FOUND), Classification::Failed);
        assert_eq!(classify(StatusCode::INTERNAL_SERVER_ERROR), Classification::Failed);
        assert_eq!(classify(StatusCode::SERVICE_UNAVAILABLE), Classification::Failed);
    }

    #[tokio::test]
    async fn test_probe_success() {
        let server = MockServer::start().await;
        mount(&server, "/ok", ResponseTemplate::new(200)).await;

        let client = Client::new();
        let target = target(&server, "/ok");
        let outcome = probe_url(&client, &target, PROBE_TIMEOUT).await;

        assert_eq!(outcome.classification, Classification::Success);
        assert_eq!(outcome.target, target);
        assert!(outcome.elapsed > Duration::ZERO);
    }

    #[tokio::test]
    async fn test_server_error_is_failed_not_conn_error() {
        capture::start();
        let server = MockServer::start().await;
        mount(&server, "/boom", ResponseTemplate::new(500)).await;
        mount(&server, "/gone", ResponseTemplate::new(404)).await;

        let client = Client::new();
        let boom = probe_url(&client, &target(&server, "/boom"), PROBE_TIMEOUT).await;
        let gone = probe_url(&client, &target(&server, "/gone"), PROBE_TIMEOUT).await;

        assert_eq!(boom.classification, Classification::Failed);
        assert_eq!(gone.classification, Classification::Failed);
        assert!(capture::errors().is_empty());
    }

    #[tokio::test]
    async fn test_timeout_is_conn_error_and_logged() {
        capture::start();
        let server = MockServer::start().await;
        mount(
            &server,
            "/slow",
            ResponseTemplate::new(200).set_delay(Duration::from_secs(3)),
        )
        .await;

        let client = Client::new();
        let timeout = Duration::from_millis(200);
        let slow = target(&server, "/slow");
        let outcome = probe_url(&client, &slow, timeout).await;

        assert_eq!(outcome.classification, Classification::ConnError);
        assert!(outcome.elapsed >= timeout);
        assert!(outcome.elapsed < Duration::from_secs(3));

        let errors = capture::errors();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains(slow.as_str()));
        assert!(errors[0].contains("timed out"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_conn_error_and_logged() {
        capture::start();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new();
        let target = Target::parse(&format!("http://{addr}/")).unwrap();
        let outcome = probe_url(&client, &target, PROBE_TIMEOUT).await;

        assert_eq!(outcome.classification, Classification::ConnError);

        let errors = capture::errors();
        assert_eq!(errors.len(), 1, "{errors:?}");
        assert!(errors[0].contains(target.as_str()));
        assert!(errors[0].contains("Reason: "));
    }
}
