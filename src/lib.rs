//! Formgate - serverless handlers that forward form submissions to Airtable.
//!
//! This crate implements three independent Lambda entry points:
//! 1. A submit handler that creates a record from an arbitrary JSON form payload
//! 2. An update handler that patches the `purchase_intent` field on an existing record
//! 3. A health handler that reports which credentials are configured
//!
//! # Architecture
//!
//! Each handler is stateless and invoked per request by the hosting runtime.
//! Requests arrive as API Gateway proxy documents and responses are returned
//! in the same shape (`statusCode`, `headers`, `body`). Configuration is
//! assembled once at process start and passed into the handler by reference;
//! the only outbound dependency is a single HTTP call to the Airtable REST API
//! per invocation.

// Module declarations
pub mod airtable;
pub mod api;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Sets up tracing-subscriber with a JSON formatter suitable for `CloudWatch`
/// Logs integration. Call this once at the start of each Lambda binary.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
