//! Product catalog module.
//!
//! Contains the product record the backend returns and the lookup result
//! the register works with.

mod product;

pub use product::{LookupResult, Product, ProductRecord, NOT_REGISTERED_MESSAGE};
