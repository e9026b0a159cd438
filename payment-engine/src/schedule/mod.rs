//! Entrada allocation and installment schedule generation
//!
//! The post-discount remainder is split into an entrada (down payment) and
//! N equal parcelas. The remaining-balance math is identical regardless of
//! how the entrada is funded; only cash-flow reporting differs.

mod down_payment;
mod generator;

pub use down_payment::*;
pub use generator::*;
