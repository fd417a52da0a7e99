//! Product and lookup result types.

use crate::error::PosError;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Message shown in place of a product name when the code is unknown.
pub const NOT_REGISTERED_MESSAGE: &str = "Product is not registered in the master";

/// A product as returned by `GET /api/product/{code}`.
///
/// The backend answers an unknown code with every field set to `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "PRD_ID", default)]
    pub id: Option<ProductId>,
    #[serde(rename = "CODE", default)]
    pub code: Option<String>,
    #[serde(rename = "NAME", default)]
    pub name: Option<String>,
    #[serde(rename = "PRICE", default)]
    pub price: Option<Money>,
}

impl ProductRecord {
    /// The record the backend sends for an unknown code.
    pub fn not_found() -> Self {
        Self::default()
    }

    /// Interpret the record.
    ///
    /// A missing id means the code is not registered, whatever the other
    /// fields say. An id without code, name or price is a malformed response.
    pub fn into_lookup(self) -> Result<LookupResult, PosError> {
        let Some(id) = self.id else {
            return Ok(LookupResult::NotRegistered);
        };

        let missing = |field: &str| {
            PosError::MalformedResponse(format!("product {} has no {}", id, field))
        };

        Ok(LookupResult::Found(Product {
            id,
            code: self.code.ok_or_else(|| missing("CODE"))?,
            name: self.name.ok_or_else(|| missing("NAME"))?,
            price: self.price.ok_or_else(|| missing("PRICE"))?,
        }))
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            code: Some(product.code.clone()),
            name: Some(product.name.clone()),
            price: Some(product.price),
        }
    }
}

/// A registered product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Backend product identifier.
    pub id: ProductId,
    /// Product (bar)code.
    pub code: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
}

impl Product {
    pub fn new(
        id: impl Into<ProductId>,
        code: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            code: code.into(),
            name: name.into(),
            price,
        }
    }
}

/// Outcome of looking a code up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "product", rename_all = "snake_case")]
pub enum LookupResult {
    /// The code belongs to a registered product.
    Found(Product),
    /// The code is not in the product master.
    NotRegistered,
}

impl LookupResult {
    /// The registered product, if any.
    pub fn product(&self) -> Option<&Product> {
        match self {
            LookupResult::Found(product) => Some(product),
            LookupResult::NotRegistered => None,
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }

    /// Text for the name panel.
    pub fn name_label(&self) -> &str {
        match self {
            LookupResult::Found(product) => &product.name,
            LookupResult::NotRegistered => NOT_REGISTERED_MESSAGE,
        }
    }

    /// Text for the unit price panel; empty when not registered.
    pub fn price_label(&self) -> String {
        self.product()
            .map(|p| p.price.display_unit())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_null_record_is_not_registered() {
        let record: ProductRecord =
            serde_json::from_str(r#"{"PRD_ID":null,"CODE":null,"NAME":null,"PRICE":null}"#)
                .unwrap();
        let lookup = record.into_lookup().unwrap();

        assert_eq!(lookup, LookupResult::NotRegistered);
        assert!(!lookup.is_registered());
        assert_eq!(lookup.name_label(), NOT_REGISTERED_MESSAGE);
        assert_eq!(lookup.price_label(), "");
    }

    #[test]
    fn test_missing_fields_default_to_null() {
        let record: ProductRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ProductRecord::not_found());
    }

    #[test]
    fn test_registered_record() {
        let record: ProductRecord = serde_json::from_str(
            r#"{"PRD_ID":7,"CODE":"4901234567890","NAME":"Green Tea","PRICE":120}"#,
        )
        .unwrap();
        let lookup = record.into_lookup().unwrap();

        let product = lookup.product().unwrap();
        assert_eq!(product.id, ProductId::new(7));
        assert_eq!(product.code, "4901234567890");
        assert_eq!(lookup.name_label(), "Green Tea");
        assert_eq!(lookup.price_label(), "120\u{5186}");
    }

    #[test]
    fn test_null_id_wins_over_other_fields() {
        let record = ProductRecord {
            id: None,
            code: Some("123".to_string()),
            name: Some("Ghost".to_string()),
            price: Some(Money::new(10)),
        };
        assert_eq!(record.into_lookup().unwrap(), LookupResult::NotRegistered);
    }

    #[test]
    fn test_id_without_price_is_malformed() {
        let record = ProductRecord {
            id: Some(ProductId::new(3)),
            code: Some("123".to_string()),
            name: Some("Half".to_string()),
            price: None,
        };
        let err = record.into_lookup().unwrap_err();
        assert!(matches!(err, PosError::MalformedResponse(_)));
    }
}
