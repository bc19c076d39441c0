//! Client for the external tabular store.

mod client;

pub use client::{AirtableClient, CreateRecordOutcome};
