//! Backend client over HTTP.

use async_trait::async_trait;
use pos_core::catalog::ProductRecord;
use pos_core::wire::{PurchaseRequest, PurchaseResponse};
use pos_core::{PosBackend, PosError};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::ClientError;
use crate::timeout::TimeoutConfig;

/// Base URL used when none is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// POS backend reached over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    /// Create a client for the backend at `base_url`.
    ///
    /// Trailing slashes on the base URL are ignored.
    pub fn new(base_url: &str, timeout: TimeoutConfig) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let base = Url::parse(trimmed)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder()
            .connect_timeout(timeout.connect)
            .timeout(timeout.total)
            .build()?;

        Ok(Self { client, base })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// URL of the product lookup endpoint for `code`.
    ///
    /// The code is percent-encoded as a single path segment.
    pub fn product_url(&self, code: &str) -> Result<Url, ClientError> {
        self.endpoint(&["api", "product", code])
    }

    /// URL of the purchase endpoint.
    pub fn purchase_url(&self) -> Result<Url, ClientError> {
        self.endpoint(&["api", "purchase"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl PosBackend for HttpBackend {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn fetch_product(&self, code: &str) -> Result<ProductRecord, PosError> {
        let url = self.product_url(code)?;
        debug!(%url, "GET product");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ClientError::from)?;
        Ok(Self::read_json(response).await?)
    }

    #[instrument(skip(self, request), fields(base = %self.base, items = request.items.len()))]
    async fn submit_purchase(
        &self,
        request: &PurchaseRequest,
    ) -> Result<PurchaseResponse, PosError> {
        let url = self.purchase_url()?;
        debug!(%url, "POST purchase");

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(ClientError::from)?;
        Ok(Self::read_json(response).await?)
    }
}
