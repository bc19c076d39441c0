//! Common helper functions for the handlers.
//!
//! This module provides response builders shared across handlers. Every
//! response carries permissive CORS headers so browser clients can call the
//! handlers cross-origin.

use serde_json::{Value, json};

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response to a CORS preflight request.
#[must_use]
pub fn preflight_response() -> Value {
    json!({
        "statusCode": 200,
        "headers": {
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": ""
    })
}

/// Returns a 405 response for methods other than POST and OPTIONS.
#[must_use]
pub fn method_not_allowed() -> Value {
    json_response(405, &json!({ "error": "Method not allowed" }))
}

/// Returns a JSON response with the given status code and body.
#[must_use]
pub fn json_response(status_code: u16, body: &Value) -> Value {
    json!({
        "statusCode": status_code,
        "headers": {
            "Content-Type": "application/json",
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Methods": "POST, OPTIONS",
            "Access-Control-Allow-Headers": "Content-Type",
        },
        "body": body.to_string()
    })
}

/// Returns the fixed local-exception response: 500 with the error message.
#[must_use]
pub fn exception_response(message: &str) -> Value {
    json_response(500, &json!({ "success": false, "error": message }))
}
