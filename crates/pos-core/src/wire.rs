//! Request and response bodies for the purchase endpoint.

use crate::ids::ProductId;
use crate::money::Money;
use crate::purchase::LineItem;
use serde::{Deserialize, Serialize};

/// Identity of the operator and register sent with every purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterIdentity {
    /// Operator (employee) code.
    #[serde(rename = "EMP_CD")]
    pub employee_code: String,
    /// Store code.
    #[serde(rename = "STORE_CD")]
    pub store_code: String,
    /// Register number within the store.
    #[serde(rename = "POS_NO")]
    pub pos_no: String,
}

impl Default for RegisterIdentity {
    fn default() -> Self {
        Self {
            employee_code: "9999999999".to_string(),
            store_code: "30".to_string(),
            pos_no: "90".to_string(),
        }
    }
}

/// One purchased unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseItem {
    #[serde(rename = "PRD_ID")]
    pub product_id: ProductId,
    #[serde(rename = "PRD_CODE")]
    pub code: String,
    #[serde(rename = "PRD_NAME")]
    pub name: String,
    #[serde(rename = "PRD_PRICE")]
    pub price: Money,
}

impl From<&LineItem> for PurchaseItem {
    fn from(line: &LineItem) -> Self {
        Self {
            product_id: line.product_id,
            code: line.code.clone(),
            name: line.name.clone(),
            price: line.unit_price,
        }
    }
}

/// Body of `POST /api/purchase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRequest {
    #[serde(flatten)]
    pub identity: RegisterIdentity,
    pub items: Vec<PurchaseItem>,
}

/// Response of `POST /api/purchase`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseResponse {
    pub success: bool,
    /// Pre-tax total as computed by the backend.
    #[serde(default)]
    pub total_amount: Option<Money>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_format() {
        let request = PurchaseRequest {
            identity: RegisterIdentity::default(),
            items: vec![PurchaseItem {
                product_id: ProductId::new(7),
                code: "4901234567890".to_string(),
                name: "Green Tea".to_string(),
                price: Money::new(120),
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "EMP_CD": "9999999999",
                "STORE_CD": "30",
                "POS_NO": "90",
                "items": [{
                    "PRD_ID": 7,
                    "PRD_CODE": "4901234567890",
                    "PRD_NAME": "Green Tea",
                    "PRD_PRICE": 120
                }]
            })
        );
    }

    #[test]
    fn test_failed_response_without_total() {
        let response: PurchaseResponse = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.total_amount, None);
    }

    #[test]
    fn test_successful_response() {
        let response: PurchaseResponse =
            serde_json::from_str(r#"{"success":true,"total_amount":350}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.total_amount, Some(Money::new(350)));
    }
}
