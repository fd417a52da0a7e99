//! Register domain types and session logic for the POS terminal.
//!
//! This crate holds everything a register needs that is independent of the
//! user interface and of the transport:
//!
//! - **Catalog**: products as the backend returns them, and lookup results
//! - **Purchase**: the purchase list, line items, totals and tax
//! - **Wire**: request/response bodies for the purchase endpoint
//! - **Register**: the session state machine driving lookup, add and commit
//!
//! # Example
//!
//! ```rust,ignore
//! use pos_core::prelude::*;
//!
//! let mut session = RegisterSession::new(backend, RegisterIdentity::default());
//! session.set_code("4901234567890");
//! session.load_product().await?;
//! session.add_to_list()?;
//!
//! let receipt = session.purchase().await?;
//! println!("Total: {}", receipt.total_with_tax);
//! ```

pub mod backend;
pub mod error;
pub mod ids;
pub mod money;
pub mod wire;

pub mod catalog;
pub mod purchase;
pub mod register;

pub use backend::PosBackend;
pub use error::PosError;
pub use ids::ProductId;
pub use money::{Money, TaxRate};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::backend::PosBackend;
    pub use crate::error::PosError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Money, TaxRate, CONSUMPTION_TAX};

    // Catalog
    pub use crate::catalog::{LookupResult, Product, ProductRecord, NOT_REGISTERED_MESSAGE};

    // Purchase
    pub use crate::purchase::{AddOutcome, LineItem, PurchaseList, PurchaseTotals};

    // Wire
    pub use crate::wire::{PurchaseItem, PurchaseRequest, PurchaseResponse, RegisterIdentity};

    // Register
    pub use crate::register::{Receipt, RegisterSession};
}
