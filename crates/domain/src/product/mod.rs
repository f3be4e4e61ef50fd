//! Product aggregate and related types.

mod aggregate;
mod events;
mod value_objects;

pub use aggregate::Product;
pub use events::{ProductCreatedData, ProductEvent, ProductPriceChangedData};
pub use value_objects::{ProductId, ProductName};

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// Product ID was blank.
    #[error("ProductId must not be empty")]
    EmptyProductId,

    /// Product name was blank.
    #[error("ProductName must not be empty")]
    EmptyProductName,
}
