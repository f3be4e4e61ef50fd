//! Domain layer for order placement and product pricing.
//!
//! This crate provides the core domain abstractions including:
//! - AggregateRoot trait and the per-aggregate domain event buffer
//! - Order aggregate with its Draft/Placed state machine
//! - Product aggregate with price-change tracking
//! - Event envelopes for handing recorded events to an outbox

pub mod aggregate;
pub mod envelope;
pub mod error;
pub mod order;
pub mod product;

pub use aggregate::{AggregateRoot, DomainEvent, EventBuffer};
pub use common::{DEFAULT_CURRENCY, Money, MoneyError};
pub use envelope::{EventEnvelope, collect_envelopes};
pub use error::DomainError;
pub use order::{
    Order, OrderError, OrderEvent, OrderId, OrderLine, OrderPlacedData, OrderStatus, PlacedLine,
    Quantity,
};
pub use product::{
    Product, ProductCreatedData, ProductError, ProductEvent, ProductId, ProductName,
    ProductPriceChangedData,
};
