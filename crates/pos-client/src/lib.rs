//! HTTP client for the POS backend API.
//!
//! Implements [`pos_core::PosBackend`] over `reqwest`:
//!
//! - `GET  {base}/api/product/{code}`
//! - `POST {base}/api/purchase`

pub mod client;
pub mod error;
pub mod timeout;

pub use client::{HttpBackend, DEFAULT_API_URL};
pub use error::ClientError;
pub use timeout::TimeoutConfig;
