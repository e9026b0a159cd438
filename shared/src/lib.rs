//! Shared types for the payment engine
//!
//! Data models and error types used across the payment engine and the
//! surrounding intake, receipt, and document-rendering layers.

pub mod error;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ConfigurationWarning, CreditError, EngineError, EngineResult};
