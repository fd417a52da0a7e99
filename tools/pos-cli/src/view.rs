//! Register screen rendering.
//!
//! Text is built by plain functions so it can be checked without a
//! terminal; the `print_*` helpers only route it to [`Output`].

use pos_core::prelude::*;

use crate::output::Output;

pub const LOOKUP_FAILED: &str = "Product lookup failed";
pub const SELECT_VALID_PRODUCT: &str = "Select a valid product first";
pub const NO_ITEMS: &str = "No items to purchase";
pub const PURCHASE_FAILED: &str = "Purchase failed";
pub const EMPTY_LIST: &str = "No items added";

/// Name and unit price panel for the loaded product.
pub fn product_panel(current: Option<&LookupResult>) -> [(&'static str, String); 2] {
    let name = current.map(|c| c.name_label().to_string()).unwrap_or_default();
    let price = current.map(LookupResult::price_label).unwrap_or_default();
    [("Name", name), ("Unit price", price)]
}

/// One purchase list row: name, quantity, unit price and line total.
pub fn line_row(line: &LineItem) -> Result<String, PosError> {
    Ok(format!(
        "{} x{}  {}  {}",
        line.name,
        line.quantity,
        line.unit_price.display_unit(),
        line.line_total()?.display()
    ))
}

/// Alert text for a committed purchase.
pub fn receipt_message(receipt: &Receipt) -> String {
    format!(
        "Purchase complete. Total (tax incl.): {}",
        receipt.total_with_tax.display()
    )
}

pub fn print_product(output: &Output, current: Option<&LookupResult>) {
    for (label, value) in product_panel(current) {
        output.kv(label, &value);
    }
}

pub fn print_list(output: &Output, list: &PurchaseList) -> Result<(), PosError> {
    output.header("Purchase list");

    if list.is_empty() {
        output.placeholder(EMPTY_LIST);
    }
    for line in list.lines() {
        output.list_item(&line_row(line)?);
    }

    let totals = list.totals()?;
    output.total("Subtotal", &totals.subtotal.display());
    output.kv(
        &format!("Total incl. tax ({}%)", CONSUMPTION_TAX.as_percent()),
        &totals.total_with_tax.display(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tea() -> Product {
        Product::new(7, "4901234567890", "Green Tea", Money::new(1200))
    }

    #[test]
    fn test_empty_panel() {
        let [(_, name), (_, price)] = product_panel(None);
        assert_eq!(name, "");
        assert_eq!(price, "");
    }

    #[test]
    fn test_not_registered_panel() {
        let [(_, name), (_, price)] = product_panel(Some(&LookupResult::NotRegistered));
        assert_eq!(name, NOT_REGISTERED_MESSAGE);
        assert_eq!(price, "");
    }

    #[test]
    fn test_found_panel() {
        let [(_, name), (_, price)] = product_panel(Some(&LookupResult::Found(tea())));
        assert_eq!(name, "Green Tea");
        assert_eq!(price, "1200\u{5186}");
    }

    #[test]
    fn test_line_row() {
        let mut list = PurchaseList::new();
        list.add(&tea()).unwrap();
        list.add(&tea()).unwrap();

        let row = line_row(&list.lines()[0]).unwrap();
        assert_eq!(row, "Green Tea x2  1200\u{5186}  \u{00a5}2,400");
    }

    #[test]
    fn test_receipt_message() {
        let receipt = Receipt {
            total_amount: Money::new(350),
            total_with_tax: Money::new(385),
            units: 5,
            completed_at: chrono::Utc::now(),
        };
        assert_eq!(
            receipt_message(&receipt),
            "Purchase complete. Total (tax incl.): \u{00a5}385"
        );
    }
}
