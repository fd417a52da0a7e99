//! Backend interface used by the register.

use async_trait::async_trait;

use crate::catalog::ProductRecord;
use crate::error::PosError;
use crate::wire::{PurchaseRequest, PurchaseResponse};

/// The two calls a register makes against its backend.
#[async_trait]
pub trait PosBackend: Send + Sync {
    /// `GET /api/product/{code}`.
    async fn fetch_product(&self, code: &str) -> Result<ProductRecord, PosError>;

    /// `POST /api/purchase`.
    async fn submit_purchase(&self, request: &PurchaseRequest)
        -> Result<PurchaseResponse, PosError>;
}

#[async_trait]
impl<T: PosBackend + ?Sized> PosBackend for std::sync::Arc<T> {
    async fn fetch_product(&self, code: &str) -> Result<ProductRecord, PosError> {
        (**self).fetch_product(code).await
    }

    async fn submit_purchase(
        &self,
        request: &PurchaseRequest,
    ) -> Result<PurchaseResponse, PosError> {
        (**self).submit_purchase(request).await
    }
}
