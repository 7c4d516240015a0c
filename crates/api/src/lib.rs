//! # Tablero API
//!
//! HTTP client for the backend REST API the dashboard displays. All
//! queries go through [`ApiClient::fetch_route`], which executes a plan
//! produced by the query controller and collapses every failure mode into
//! the `NotFound` page outcome; mutations return structured errors so the
//! UI can toast them.

pub mod client;

// Re-exports for convenience
pub use client::{ApiClient, ClientError};
