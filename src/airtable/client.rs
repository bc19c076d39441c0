//! Airtable REST client module
//!
//! Encapsulates the record-creation and partial-update calls against the
//! external store. The store is authoritative for field existence and typing;
//! payloads are forwarded verbatim.

use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use std::time::Duration;

use crate::core::config::AppConfig;
use crate::errors::GatewayError;

static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});

/// Subset of the record-creation response.
#[derive(Debug, Deserialize)]
struct RecordCreated {
    id: String,
}

/// Outcome of a record-creation call.
#[derive(Debug)]
pub enum CreateRecordOutcome {
    /// The store accepted the record and issued an identifier.
    Created { record_id: String },
    /// The store rejected the call; status and raw error body are relayed.
    Rejected { status: u16, body: String },
}

/// Airtable API client scoped to a single base and table.
pub struct AirtableClient {
    api_key: String,
    table_url: String,
}

impl AirtableClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_key: config.airtable_api_key.clone(),
            table_url: format!(
                "{}/{}/{}",
                config.airtable_api_url, config.airtable_base_id, config.airtable_table_id
            ),
        }
    }

    /// Creates a record with the given fields.
    ///
    /// Only transport and response-parse failures surface as errors; a non-200
    /// status from the store is a normal `Rejected` outcome.
    pub async fn create_record(&self, fields: &Value) -> Result<CreateRecordOutcome, GatewayError> {
        let response = HTTP_CLIENT
            .post(&self.table_url)
            .bearer_auth(&self.api_key)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            return Ok(CreateRecordOutcome::Rejected { status, body });
        }

        let record: RecordCreated = serde_json::from_str(&body).map_err(|e| {
            GatewayError::ApiError(format!("Invalid record-creation response: {}", e))
        })?;

        Ok(CreateRecordOutcome::Created {
            record_id: record.id,
        })
    }

    /// Patches a single field on an existing record.
    ///
    /// Returns the external status code verbatim; the caller decides what a
    /// non-200 status means.
    pub async fn update_record_field(
        &self,
        record_id: &str,
        field: &str,
        value: &Value,
    ) -> Result<u16, GatewayError> {
        let mut fields = Map::new();
        fields.insert(field.to_string(), value.clone());

        let response = HTTP_CLIENT
            .patch(format!("{}/{}", self.table_url, record_id))
            .bearer_auth(&self.api_key)
            .json(&json!({ "fields": fields }))
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}
