//! Purchase list and line item types.

use crate::catalog::Product;
use crate::error::PosError;
use crate::ids::ProductId;
use crate::money::{Money, CONSUMPTION_TAX};
use crate::purchase::PurchaseTotals;
use crate::wire::PurchaseItem;
use serde::{Deserialize, Serialize};

/// The items rung up in the current transaction.
///
/// Holds at most one line per product id, in the order the products were
/// first added.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseList {
    lines: Vec<LineItem>,
}

/// What adding a product did to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Inserted,
    /// An existing line's quantity went up.
    Incremented { quantity: u32 },
}

impl PurchaseList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If a line for the product already exists its quantity is increased by
    /// one; otherwise a new line with quantity one is appended.
    pub fn add(&mut self, product: &Product) -> Result<AddOutcome, PosError> {
        if let Some(existing) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            existing.quantity = existing
                .quantity
                .checked_add(1)
                .ok_or(PosError::Overflow)?;
            return Ok(AddOutcome::Incremented {
                quantity: existing.quantity,
            });
        }

        self.lines.push(LineItem::from_product(product));
        Ok(AddOutcome::Inserted)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Get the line for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Subtotal and tax-inclusive total.
    pub fn totals(&self) -> Result<PurchaseTotals, PosError> {
        let line_totals = self
            .lines
            .iter()
            .map(LineItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = Money::try_sum(line_totals.iter()).ok_or(PosError::Overflow)?;
        let total_with_tax = subtotal
            .try_with_tax(CONSUMPTION_TAX)
            .ok_or(PosError::Overflow)?;

        Ok(PurchaseTotals {
            subtotal,
            total_with_tax,
        })
    }

    /// Flatten the list into one purchase item per unit, in list order.
    pub fn expand(&self) -> Vec<PurchaseItem> {
        self.lines
            .iter()
            .flat_map(|line| {
                let item = PurchaseItem::from(line);
                std::iter::repeat(item).take(line.quantity as usize)
            })
            .collect()
    }
}

/// A product in the purchase list at some quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: ProductId,
    pub code: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

impl LineItem {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            code: product.code.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// `unit_price * quantity`.
    pub fn line_total(&self) -> Result<Money, PosError> {
        self.unit_price
            .try_multiply(i64::from(self.quantity))
            .ok_or(PosError::Overflow)
    }
}
