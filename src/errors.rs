use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to access Airtable API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        GatewayError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::ParseError(error.to_string())
    }
}
