// This crate holds the non-visual half of the symptom query UI:
// - Request/response data structures for the check-symptoms endpoint
// - HTTP client for that endpoint
// - Configuration loading
// - Shared error types

// Export client module - HTTP client for the classification endpoint
pub mod client;
pub use client::*;

// Export types module - Request/response data structures
pub mod types;
pub use types::*;

// Export config module - Configuration loading
pub mod config;
pub use config::*;

// Export errors module - Shared error types
pub mod errors;
pub use errors::*;
