//! Data models
//!
//! Value objects crossing the engine boundary. Monetary amounts are stored
//! as `f64` (2-decimal currency); all arithmetic happens in the engine with
//! `Decimal` precision.

pub mod client;
pub mod credit;
pub mod discount;
pub mod payment;
pub mod receipt;
pub mod schedule;

// Re-exports
pub use client::*;
pub use credit::*;
pub use discount::*;
pub use payment::*;
pub use receipt::*;
pub use schedule::*;
