use serde_json::Value;

use crate::errors::GatewayError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Extracts the HTTP method from either API Gateway payload format
/// (v1 `httpMethod`, v2 `requestContext.http.method`).
#[must_use]
pub fn request_method(payload: &Value) -> &str {
    v_str(payload, &["httpMethod"])
        .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
        .unwrap_or("")
}

/// Extracts the request body string from the payload.
pub fn request_body(payload: &Value) -> Result<&str, GatewayError> {
    payload
        .get("body")
        .and_then(Value::as_str)
        .ok_or_else(|| GatewayError::ParseError("Missing request body".to_string()))
}
