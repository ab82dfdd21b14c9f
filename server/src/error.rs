use thiserror::Error;

/// Everything that can go wrong while placing or updating an order. All
/// variants are local and synchronous; a failure leaves the board and the
/// cart exactly as they were.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("missing location")]
    MissingLocation,
    #[error("empty cart")]
    EmptyCart,
    #[error("order {0} not found")]
    NotFound(u64),
}
