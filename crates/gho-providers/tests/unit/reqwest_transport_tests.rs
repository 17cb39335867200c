//! Tests for the reqwest transport against a mock upstream

use std::time::Duration;

use gho_domain::{AcceptFormat, DataTransport, Error};
use gho_providers::constants::ERROR_MSG_REQUEST_TIMEOUT;
use gho_providers::http::HttpClientConfig;
use gho_providers::transport::ReqwestTransport;
use mockito::Server;
use serde_json::json;
use tokio::net::TcpListener;

fn transport() -> ReqwestTransport {
    ReqwestTransport::from_config(&HttpClientConfig::with_timeout(Duration::from_secs(5)))
        .expect("Failed to build transport")
}

#[tokio::test]
async fn test_fetch_decodes_json_body() {
    let mut server = Server::new_async().await;
    let body = json!({ "value": [{ "Code": "SEX", "Title": "Sex" }] });
    let mock = server
        .mock("GET", "/Dimension")
        .match_header("accept", "application/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create_async()
        .await;

    let url = format!("{}/Dimension", server.url());
    let value = transport()
        .fetch(&url, AcceptFormat::Json)
        .await
        .expect("fetch should succeed");

    mock.assert_async().await;
    assert_eq!(value, body);
}

#[tokio::test]
async fn test_fetch_decodes_xml_feed_into_value_list() {
    let mut server = Server::new_async().await;
    let feed = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom"
      xmlns:d="http://schemas.microsoft.com/ado/2007/08/dataservices"
      xmlns:m="http://schemas.microsoft.com/ado/2007/08/dataservices/metadata">
  <entry><content type="application/xml"><m:properties>
    <d:Code>SEX</d:Code><d:Title>Sex</d:Title>
  </m:properties></content></entry>
</feed>"#;
    let _mock = server
        .mock("GET", "/Dimension")
        .match_header("accept", "application/xml")
        .with_status(200)
        .with_header("content-type", "application/atom+xml")
        .with_body(feed)
        .create_async()
        .await;

    let url = format!("{}/Dimension", server.url());
    let value = transport()
        .fetch(&url, AcceptFormat::Xml)
        .await
        .expect("fetch should succeed");

    assert_eq!(value["value"][0]["Code"], "SEX");
    assert_eq!(value["value"][0]["Title"], "Sex");
}

#[tokio::test]
async fn test_not_found_is_upstream_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/NOPE")
        .with_status(404)
        .with_body("Resource not found")
        .create_async()
        .await;

    let url = format!("{}/NOPE", server.url());
    let err = transport()
        .fetch(&url, AcceptFormat::Json)
        .await
        .expect_err("404 should fail");

    assert!(matches!(err, Error::UpstreamRequestFailed { .. }));
    let message = err.to_string();
    assert!(message.contains("404"), "unexpected message: {message}");
    assert!(message.contains("Resource not found"));
}

#[tokio::test]
async fn test_server_error_is_upstream_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Indicator")
        .with_status(503)
        .with_body("busy")
        .create_async()
        .await;

    let url = format!("{}/Indicator", server.url());
    let err = transport()
        .fetch(&url, AcceptFormat::Json)
        .await
        .expect_err("503 should fail");

    assert_eq!(err.kind(), "upstream_request_failed");
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn test_undecodable_json_is_upstream_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Dimension")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let url = format!("{}/Dimension", server.url());
    let err = transport()
        .fetch(&url, AcceptFormat::Json)
        .await
        .expect_err("invalid body should fail");

    assert!(matches!(err, Error::UpstreamRequestFailed { .. }));
}

#[tokio::test]
async fn test_non_xml_body_is_upstream_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Dimension")
        .match_header("accept", "application/xml")
        .with_status(200)
        .with_body("not xml")
        .create_async()
        .await;

    let url = format!("{}/Dimension", server.url());
    let err = transport()
        .fetch(&url, AcceptFormat::Xml)
        .await
        .expect_err("non-XML body should fail");

    assert!(matches!(err, Error::UpstreamRequestFailed { .. }));
}

#[tokio::test]
async fn test_truncated_xml_body_is_upstream_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/Dimension")
        .with_status(200)
        .with_body(r#"<feed xmlns:d="d" xmlns:m="m"><entry><content><m:properties><d:Code>US"#)
        .create_async()
        .await;

    let url = format!("{}/Dimension", server.url());
    let err = transport()
        .fetch(&url, AcceptFormat::Xml)
        .await
        .expect_err("truncated body should fail");

    assert_eq!(err.kind(), "upstream_request_failed");
}

#[tokio::test]
async fn test_silent_upstream_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("listener address");
    let _server = tokio::spawn(async move {
        if let Ok((socket, _)) = listener.accept().await {
            tokio::time::sleep(Duration::from_secs(10)).await;
            drop(socket);
        }
    });

    let transport =
        ReqwestTransport::from_config(&HttpClientConfig::with_timeout(Duration::from_millis(200)))
            .expect("Failed to build transport");
    let url = format!("http://{addr}/Dimension");
    let err = transport
        .fetch(&url, AcceptFormat::Json)
        .await
        .expect_err("silent upstream should time out");

    assert!(matches!(err, Error::UpstreamRequestFailed { .. }));
    let message = err.to_string();
    assert!(
        message.contains(ERROR_MSG_REQUEST_TIMEOUT),
        "unexpected message: {message}"
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_transport_reports_name_and_timeout() {
    let transport = transport();
    assert_eq!(transport.transport_name(), "reqwest");
    assert_eq!(transport.timeout(), Duration::from_secs(5));
}
