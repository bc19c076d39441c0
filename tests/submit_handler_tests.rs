use formgate::api::submit;
use formgate::core::config::AppConfig;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Tests for the submit handler against a mock external store.
/// These verify the request/response contract: record creation relays the
/// new identifier, external rejections relay status and error body, and
/// local failures collapse to a fixed 500.

fn test_config(api_url: &str) -> AppConfig {
    AppConfig {
        airtable_api_key: "key_test".to_string(),
        airtable_base_id: "app_base".to_string(),
        airtable_table_id: "tbl_table".to_string(),
        airtable_api_url: api_url.to_string(),
    }
}

fn event(http_method: &str, body: Option<&str>) -> LambdaEvent<Value> {
    let mut payload = json!({
        "httpMethod": http_method,
        "headers": { "Content-Type": "application/json" },
    });
    if let Some(body) = body {
        payload["body"] = Value::from(body);
    }
    LambdaEvent::new(payload, Context::default())
}

fn response_body(response: &Value) -> Value {
    let body = response["body"].as_str().expect("body should be a string");
    serde_json::from_str(body).expect("body should be JSON")
}

#[tokio::test]
async fn created_record_id_is_relayed() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/app_base/tbl_table"))
        .and(header("Authorization", "Bearer key_test"))
        .and(body_json(
            json!({ "fields": { "email": "ada@example.com", "name": "Ada" } }),
        ))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "id": "rec123", "fields": {} })),
        )
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let response = submit::handler(
        &config,
        event("POST", Some(r#"{"email":"ada@example.com","name":"Ada"}"#)),
    )
    .await
    .unwrap();

    assert_eq!(response["statusCode"], 200);
    let body = response_body(&response);
    assert_eq!(body["success"], true);
    assert_eq!(body["recordId"], "rec123");
    assert!(!body["recordId"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn external_rejection_relays_status_and_error_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({ "error": { "type": "INVALID_VALUE_FOR_COLUMN" } })),
        )
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let response = submit::handler(&config, event("POST", Some(r#"{"email":42}"#)))
        .await
        .unwrap();

    assert_eq!(response["statusCode"], 422);
    let body = response_body(&response);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().expect("error should be relayed text");
    assert!(
        error.contains("INVALID_VALUE_FOR_COLUMN"),
        "external error body should be relayed, got: {error}"
    );
}

#[tokio::test]
async fn malformed_body_returns_500() {
    // No mock server: the handler must fail before any outbound call.
    let config = test_config("http://127.0.0.1:1");
    let response = submit::handler(&config, event("POST", Some("not json")))
        .await
        .unwrap();

    assert_eq!(response["statusCode"], 500);
    let body = response_body(&response);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn missing_body_returns_500() {
    let config = test_config("http://127.0.0.1:1");
    let response = submit::handler(&config, event("POST", None)).await.unwrap();

    assert_eq!(response["statusCode"], 500);
    let body = response_body(&response);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn network_failure_returns_500() {
    // Nothing listens on port 1; the outbound call fails locally.
    let config = test_config("http://127.0.0.1:1");
    let response = submit::handler(&config, event("POST", Some(r#"{"email":"a@b.c"}"#)))
        .await
        .unwrap();

    assert_eq!(response["statusCode"], 500);
    let body = response_body(&response);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn preflight_returns_cors_headers_regardless_of_body() {
    let config = test_config("http://127.0.0.1:1");
    let response = submit::handler(&config, event("OPTIONS", Some("garbage body")))
        .await
        .unwrap();

    assert_eq!(response["statusCode"], 200);
    let headers = &response["headers"];
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(headers["Access-Control-Allow-Methods"], "POST, OPTIONS");
    assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
}

#[tokio::test]
async fn non_post_method_is_rejected() {
    let config = test_config("http://127.0.0.1:1");
    let response = submit::handler(&config, event("GET", None)).await.unwrap();

    assert_eq!(response["statusCode"], 405);
    let body = response_body(&response);
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn http_api_v2_payload_format_is_accepted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/app_base/tbl_table"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "rec456" })))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let payload = json!({
        "requestContext": { "http": { "method": "POST" } },
        "body": r#"{"email":"ada@example.com"}"#,
    });
    let response = submit::handler(&config, LambdaEvent::new(payload, Context::default()))
        .await
        .unwrap();

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response_body(&response)["recordId"], "rec456");
}
