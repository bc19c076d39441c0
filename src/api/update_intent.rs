//! Update handler - patches the purchase intent field on an existing record.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info};

use super::{helpers, parsing};
use crate::airtable::AirtableClient;
use crate::core::config::AppConfig;
use crate::core::models::UpdatePurchaseIntentRequest;
use crate::errors::GatewayError;

pub use self::function_handler as handler;

/// External attribute set by this handler.
const PURCHASE_INTENT_FIELD: &str = "purchase_intent";

/// Lambda handler for purchase-intent updates.
///
/// Success is derived solely from the external status code: exactly 200 means
/// success, anything else is relayed with `success: false`. Unlike the submit
/// handler, the external error body is not relayed.
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

    match update_record(config, &event.payload).await {
        Ok(status) => {
            info!(status, "Purchase intent update completed");
            Ok(helpers::json_response(
                status,
                &json!({ "success": (status == 200) }),
            ))
        }
        Err(e) => {
            error!("Purchase intent update failed: {}", e);
            Ok(helpers::exception_response(&e.to_string()))
        }
    }
}

async fn update_record(config: &AppConfig, payload: &Value) -> Result<u16, GatewayError> {
    let body = parsing::request_body(payload)?;
    let request: UpdatePurchaseIntentRequest = serde_json::from_str(body)?;

    AirtableClient::new(config)
        .update_record_field(
            &request.record_id,
            PURCHASE_INTENT_FIELD,
            &request.purchase_intent,
        )
        .await
}
