//! Health handler - reports which credentials the process was started with.

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};

use super::helpers;
use crate::core::config::AppConfig;

pub use self::function_handler as handler;

/// Lambda handler for the health probe.
///
/// Always returns 200; the `env` block shows which credential variables were
/// set at process start without exposing their values.
pub async fn function_handler(
    config: &AppConfig,
    _event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    Ok(helpers::json_response(
        200,
        &json!({
            "status": "ok",
            "timestamp": Utc::now().to_rfc3339(),
            "env": {
                "hasAirtableKey": !config.airtable_api_key.is_empty(),
                "hasBaseId": !config.airtable_base_id.is_empty(),
                "hasTableId": !config.airtable_table_id.is_empty(),
            }
        }),
    ))
}
