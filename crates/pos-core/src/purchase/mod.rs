//! Purchase list module.
//!
//! Contains the purchase list, line items and totals.

mod list;
mod pricing;

pub use list::{AddOutcome, LineItem, PurchaseList};
pub use pricing::PurchaseTotals;
