//! Register session: the state behind one POS screen.
//!
//! A session holds the code being typed, the product last looked up, the
//! purchase list, and a loading flag that is set while a backend call is in
//! flight. Nothing is mutated until the backend has answered successfully,
//! so a failed call leaves the session exactly as it was.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::backend::PosBackend;
use crate::catalog::LookupResult;
use crate::error::PosError;
use crate::money::{Money, CONSUMPTION_TAX};
use crate::purchase::{AddOutcome, PurchaseList, PurchaseTotals};
use crate::wire::{PurchaseRequest, RegisterIdentity};

/// Result of a committed purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Pre-tax total.
    pub total_amount: Money,
    /// Total with consumption tax, rounded down.
    pub total_with_tax: Money,
    /// Number of units sent.
    pub units: usize,
    pub completed_at: DateTime<Utc>,
}

/// State of one register.
pub struct RegisterSession<B> {
    backend: B,
    identity: RegisterIdentity,
    code: String,
    current: Option<LookupResult>,
    list: PurchaseList,
    loading: bool,
}

impl<B: PosBackend> RegisterSession<B> {
    /// Create an empty session.
    pub fn new(backend: B, identity: RegisterIdentity) -> Self {
        Self {
            backend,
            identity,
            code: String::new(),
            current: None,
            list: PurchaseList::new(),
            loading: false,
        }
    }

    /// The code in the input field.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    /// The last lookup result, if any.
    pub fn current(&self) -> Option<&LookupResult> {
        self.current.as_ref()
    }

    pub fn list(&self) -> &PurchaseList {
        &self.list
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the code input and lookup control accept input.
    pub fn can_lookup(&self) -> bool {
        !self.loading
    }

    /// Whether the add control is enabled.
    pub fn can_add(&self) -> bool {
        !self.loading && self.current.as_ref().is_some_and(LookupResult::is_registered)
    }

    /// Whether the purchase control is enabled.
    pub fn can_purchase(&self) -> bool {
        !self.loading && !self.list.is_empty()
    }

    /// Current subtotal and tax-inclusive total of the list.
    pub fn totals(&self) -> Result<PurchaseTotals, PosError> {
        self.list.totals()
    }

    /// Clear the code input and the loaded product.
    pub fn clear_input(&mut self) {
        self.code.clear();
        self.current = None;
    }

    /// Look up the product for the current code.
    ///
    /// Returns `Ok(None)` without calling the backend when the code is
    /// empty. On failure the previously loaded product is kept.
    pub async fn load_product(&mut self) -> Result<Option<&LookupResult>, PosError> {
        if self.code.is_empty() {
            return Ok(None);
        }

        let code = self.code.clone();
        debug!(code = %code, "Looking up product");

        let fetched = {
            let _loading = Loading::start(&mut self.loading);
            self.backend.fetch_product(&code).await
        };

        let lookup = fetched.and_then(|record| record.into_lookup()).map_err(|e| {
            error!(code = %code, error = %e, "Product lookup failed");
            e
        })?;

        match &lookup {
            LookupResult::Found(product) => {
                info!(code = %code, product_id = %product.id, price = product.price.amount(), "Product loaded");
            }
            LookupResult::NotRegistered => {
                info!(code = %code, "Product not registered");
            }
        }

        let current: &LookupResult = self.current.insert(lookup);
        Ok(Some(current))
    }

    /// Add the loaded product to the purchase list.
    ///
    /// Clears the code input and loaded product afterwards.
    pub fn add_to_list(&mut self) -> Result<AddOutcome, PosError> {
        let Some(product) = self.current.as_ref().and_then(LookupResult::product) else {
            warn!("Add requested without a registered product");
            return Err(PosError::NoValidProduct);
        };

        let outcome = self.list.add(product)?;
        debug!(product_id = %product.id, ?outcome, "Added to purchase list");

        self.clear_input();
        Ok(outcome)
    }

    /// Commit the purchase list to the backend.
    ///
    /// On success the list and input are cleared. On any failure the list
    /// is left intact so the operator can retry.
    pub async fn purchase(&mut self) -> Result<Receipt, PosError> {
        if self.list.is_empty() {
            warn!("Purchase requested with an empty list");
            return Err(PosError::EmptyPurchaseList);
        }

        let request = PurchaseRequest {
            identity: self.identity.clone(),
            items: self.list.expand(),
        };
        let units = request.items.len();
        info!(units, lines = self.list.len(), "Submitting purchase");

        let submitted = {
            let _loading = Loading::start(&mut self.loading);
            self.backend.submit_purchase(&request).await
        };

        let response = submitted.map_err(|e| {
            error!(error = %e, "Purchase failed");
            e
        })?;

        if !response.success {
            error!("Purchase rejected by backend");
            return Err(PosError::PurchaseRejected);
        }

        let total_amount = match response.total_amount {
            Some(total) => total,
            None => {
                let local = self.list.totals()?.subtotal;
                warn!(subtotal = local.amount(), "Backend omitted total_amount, using local subtotal");
                local
            }
        };
        let total_with_tax = total_amount
            .try_with_tax(CONSUMPTION_TAX)
            .ok_or(PosError::Overflow)?;

        info!(
            total = total_amount.amount(),
            total_with_tax = total_with_tax.amount(),
            "Purchase complete"
        );

        self.list.clear();
        self.clear_input();

        Ok(Receipt {
            total_amount,
            total_with_tax,
            units,
            completed_at: Utc::now(),
        })
    }
}

/// Holds the loading flag up for the duration of a backend call.
struct Loading<'a>(&'a mut bool);

impl<'a> Loading<'a> {
    fn start(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}
