//! Product domain events.

use chrono::{DateTime, Utc};
use common::Money;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{ProductId, ProductName};

/// Events that can occur on a product aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ProductEvent {
    /// Product was added to the catalog.
    ProductCreated(ProductCreatedData),

    /// Product price was changed.
    ProductPriceChanged(ProductPriceChangedData),
}

impl DomainEvent for ProductEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::ProductCreated(_) => "ProductCreated",
            ProductEvent::ProductPriceChanged(_) => "ProductPriceChanged",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::ProductCreated(data) => data.occurred_at,
            ProductEvent::ProductPriceChanged(data) => data.occurred_at,
        }
    }
}

/// Data for ProductCreated event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreatedData {
    /// The product that was created.
    pub product_id: ProductId,

    /// Product name.
    pub name: ProductName,

    /// Initial price.
    pub price: Money,

    /// When the product was created.
    pub occurred_at: DateTime<Utc>,
}

/// Data for ProductPriceChanged event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPriceChangedData {
    /// The product whose price changed.
    pub product_id: ProductId,

    /// Price before the change.
    pub old_price: Money,

    /// Price after the change.
    pub new_price: Money,

    /// When the price changed.
    pub occurred_at: DateTime<Utc>,
}

// Convenience constructors for events
impl ProductEvent {
    /// Creates a ProductCreated event.
    pub fn product_created(product_id: ProductId, name: ProductName, price: Money) -> Self {
        ProductEvent::ProductCreated(ProductCreatedData {
            product_id,
            name,
            price,
            occurred_at: Utc::now(),
        })
    }

    /// Creates a ProductPriceChanged event.
    pub fn product_price_changed(product_id: ProductId, old_price: Money, new_price: Money) -> Self {
        ProductEvent::ProductPriceChanged(ProductPriceChangedData {
            product_id,
            old_price,
            new_price,
            occurred_at: Utc::now(),
        })
    }
}
