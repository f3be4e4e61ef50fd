//! Order aggregate and related types.

mod aggregate;
mod events;
mod state;
mod value_objects;

pub use aggregate::Order;
pub use events::{OrderEvent, OrderPlacedData, PlacedLine};
pub use state::OrderStatus;
pub use value_objects::{OrderId, OrderLine, Quantity};

use common::{Money, MoneyError};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Order ID was blank.
    #[error("OrderId must not be empty")]
    EmptyOrderId,

    /// Quantity below one.
    #[error("quantity must be at least 1")]
    QuantityTooSmall,

    /// Quantity had a fractional part.
    #[error("quantity must be an integer")]
    QuantityNotInteger,

    /// Quantity does not fit in a line.
    #[error("quantity is too large")]
    QuantityTooLarge,

    /// Lines were changed, or the order placed, outside the Draft status.
    #[error("cannot {action} order that is not Draft")]
    NotDraft {
        current_status: OrderStatus,
        action: &'static str,
    },

    /// Order has no lines to place.
    #[error("cannot place order with no lines")]
    NoLines,

    /// No line at the given index.
    #[error("line index {index} out of range for order with {len} lines")]
    LineIndexOutOfRange { index: usize, len: usize },

    /// A stored line total disagrees with its unit price and quantity.
    #[error("line total {found} does not equal unit price times quantity ({expected})")]
    LineTotalMismatch { expected: Money, found: Money },

    /// A line's currency differs from the order's currency.
    #[error("line currency {found} does not match order currency {expected}")]
    CurrencyMismatch { expected: String, found: String },

    /// The requested status transition does not exist.
    #[error("cannot move order from {from} to {to}")]
    UnsupportedTransition { from: OrderStatus, to: OrderStatus },

    /// A money computation failed.
    #[error(transparent)]
    Money(#[from] MoneyError),
}
