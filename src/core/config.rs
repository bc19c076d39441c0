use std::env;

const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com/v0";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub airtable_api_key: String,
    pub airtable_base_id: String,
    pub airtable_table_id: String,
    pub airtable_api_url: String,
}

impl AppConfig {
    /// Assembles configuration from the process environment.
    ///
    /// Credentials are not validated for presence: missing variables become
    /// empty strings and the external store rejects the resulting call, which
    /// is then relayed like any other external failure. The health handler
    /// reports which variables are set.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            airtable_api_key: env::var("AIRTABLE_API_KEY").unwrap_or_default(),
            airtable_base_id: env::var("AIRTABLE_BASE_ID").unwrap_or_default(),
            airtable_table_id: env::var("AIRTABLE_TABLE_ID").unwrap_or_default(),
            airtable_api_url: env::var("AIRTABLE_API_URL")
                .unwrap_or_else(|_| DEFAULT_AIRTABLE_API_URL.to_string()),
        }
    }
}
