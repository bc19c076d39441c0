use serde::Deserialize;
use serde_json::Value;

/// Body of an update-purchase-intent request.
///
/// `purchase_intent` is an opaque JSON value; the external store is
/// authoritative for its typing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePurchaseIntentRequest {
    pub record_id: String,
    pub purchase_intent: Value,
}
