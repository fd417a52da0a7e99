//! Purchase totals.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals shown under the purchase list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Subtotal with consumption tax, rounded down.
    pub total_with_tax: Money,
}
