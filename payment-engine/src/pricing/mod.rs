//! Price composition and discount resolution
//!
//! The gross travel price is composed from the base traveler price plus
//! companion prices; the single negotiated discount is then resolved
//! against it. Both steps are pure functions.

mod composition;
mod discount;

pub use composition::*;
pub use discount::*;
