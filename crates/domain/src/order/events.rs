//! Order domain events.

use chrono::{DateTime, Utc};
use common::Money;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;
use crate::product::ProductId;

use super::{OrderId, OrderLine, Quantity};

/// Events that can occur on an order aggregate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    /// Order was placed.
    OrderPlaced(OrderPlacedData),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderPlaced(_) => "OrderPlaced",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            OrderEvent::OrderPlaced(data) => data.occurred_at,
        }
    }
}

/// A line as captured at placement time.
///
/// Carries the inputs of the line only; the line total is not part of the event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedLine {
    /// The product ordered.
    pub product_id: ProductId,

    /// Quantity ordered.
    pub quantity: Quantity,

    /// Unit price at placement time.
    pub unit_price: Money,
}

impl From<&OrderLine> for PlacedLine {
    fn from(line: &OrderLine) -> Self {
        Self {
            product_id: line.product_id().clone(),
            quantity: line.units(),
            unit_price: line.unit_price().clone(),
        }
    }
}

/// Data for OrderPlaced event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderPlacedData {
    /// The order that was placed.
    pub order_id: OrderId,

    /// Lines in insertion order.
    pub lines: Vec<PlacedLine>,

    /// Order total at placement time.
    pub total: Money,

    /// When the order was placed.
    pub occurred_at: DateTime<Utc>,
}

impl OrderEvent {
    /// Creates an OrderPlaced event stamped with the current time.
    pub fn order_placed(order_id: OrderId, lines: &[OrderLine], total: Money) -> Self {
        OrderEvent::OrderPlaced(OrderPlacedData {
            order_id,
            lines: lines.iter().map(PlacedLine::from).collect(),
            total,
            occurred_at: Utc::now(),
        })
    }
}
