//! Domain error types.

use common::MoneyError;
use thiserror::Error;

use crate::order::OrderError;
use crate::product::ProductError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the order aggregate.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// An error occurred in the product aggregate.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// A money value could not be built or combined.
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
