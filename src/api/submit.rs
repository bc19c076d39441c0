//! Submit handler - creates a record in the external store from a form payload.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::airtable::{AirtableClient, CreateRecordOutcome};
use crate::core::config::AppConfig;
use crate::errors::GatewayError;

pub use self::function_handler as handler;

/// Lambda handler for form submissions.
///
/// Forwards the JSON body verbatim as the fields of a new record. On external
/// success returns the new record identifier; on external rejection relays the
/// store's status code and error body; on any local failure returns a fixed
/// 500 with the error message.
#[tracing::instrument(level = "info", skip(config, event))]
pub async fn function_handler(
    config: &AppConfig,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let method = parsing::request_method(&event.payload);

    if method.eq_ignore_ascii_case("OPTIONS") {
        return Ok(helpers::preflight_response());
    }
    if !method.eq_ignore_ascii_case("POST") {
        return Ok(helpers::method_not_allowed());
    }

    match create_record(config, &event.payload).await {
        Ok(CreateRecordOutcome::Created { record_id }) => {
            info!(record_id = %record_id, "Record created");
            Ok(helpers::json_response(
                200,
                &json!({ "success": true, "recordId": record_id }),
            ))
        }
        Ok(CreateRecordOutcome::Rejected { status, body }) => {
            error!(status, "Airtable rejected record creation: {}", body);
            Ok(helpers::json_response(
                status,
                &json!({ "success": false, "error": body }),
            ))
        }
        Err(e) => {
            error!("Submission failed: {}", e);
            Ok(helpers::exception_response(&e.to_string()))
        }
    }
}

async fn create_record(
    config: &AppConfig,
    payload: &Value,
) -> Result<CreateRecordOutcome, GatewayError> {
    let body = parsing::request_body(payload)?;
    // No local schema validation; the store is authoritative for fields.
    let fields: Value = serde_json::from_str(body)?;

    AirtableClient::new(config).create_record(&fields).await
}
