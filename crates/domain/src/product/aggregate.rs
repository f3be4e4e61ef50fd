//! Product aggregate implementation.

use common::Money;

use crate::aggregate::{AggregateRoot, EventBuffer};

use super::{ProductEvent, ProductId, ProductName};

/// Product aggregate root.
///
/// Holds a name and a price. The price only changes through
/// [`Product::change_price`], which records the old and new values.
#[derive(Debug, Clone)]
pub struct Product {
    id: ProductId,
    name: ProductName,
    price: Money,
    events: EventBuffer<ProductEvent>,
}

impl Product {
    /// Creates a product and records `ProductCreated`.
    ///
    /// The inputs are already validated by their own constructors.
    #[tracing::instrument(skip_all, fields(product_id = %id))]
    pub fn create(id: ProductId, name: ProductName, price: Money) -> Self {
        let mut events = EventBuffer::new();
        events.record(ProductEvent::product_created(
            id.clone(),
            name.clone(),
            price.clone(),
        ));

        tracing::debug!(%price, "product created");

        Self {
            id,
            name,
            price,
            events,
        }
    }

    /// Returns the product name.
    pub fn name(&self) -> &ProductName {
        &self.name
    }

    /// Returns the current price.
    pub fn price(&self) -> &Money {
        &self.price
    }

    /// Replaces the price and records `ProductPriceChanged`.
    #[tracing::instrument(skip_all, fields(product_id = %self.id))]
    pub fn change_price(&mut self, new_price: Money) {
        let old_price = std::mem::replace(&mut self.price, new_price.clone());

        tracing::debug!(%old_price, %new_price, "price changed");

        self.events.record(ProductEvent::product_price_changed(
            self.id.clone(),
            old_price,
            new_price,
        ));

        tracing::debug!(pending = self.events.len(), "price change recorded");
    }
}

impl AggregateRoot for Product {
    type Event = ProductEvent;
    type Id = ProductId;

    fn aggregate_type() -> &'static str {
        "Product"
    }

    fn id(&self) -> &ProductId {
        &self.id
    }

    fn pending_events(&self) -> &[ProductEvent] {
        self.events.as_slice()
    }

    fn clear_domain_events(&mut self) {
        self.events.clear();
    }

    fn take_domain_events(&mut self) -> Vec<ProductEvent> {
        self.events.take()
    }
}
