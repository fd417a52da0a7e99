//! Register error types.

use thiserror::Error;

/// Errors that can occur while operating a register session.
///
/// A product that is not in the master is not an error; it is reported as
/// [`LookupResult::NotRegistered`](crate::catalog::LookupResult::NotRegistered).
#[derive(Error, Debug)]
pub enum PosError {
    /// The backend could not be reached or answered with a failure status.
    #[error("Backend error: {0}")]
    Backend(String),

    /// The backend answered with a body the register cannot use.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The backend processed the purchase but reported it as unsuccessful.
    #[error("Purchase rejected by backend")]
    PurchaseRejected,

    /// Add was requested without a registered product loaded.
    #[error("No valid product is loaded")]
    NoValidProduct,

    /// Purchase was requested with nothing in the list.
    #[error("Purchase list is empty")]
    EmptyPurchaseList,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl PosError {
    /// Whether the error came from talking to the backend rather than from
    /// a precondition the operator can fix locally.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            PosError::Backend(_)
                | PosError::MalformedResponse(_)
                | PosError::PurchaseRejected
        )
    }
}
