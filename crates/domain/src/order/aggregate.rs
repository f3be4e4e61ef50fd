//! Order aggregate implementation.

use common::Money;

use crate::aggregate::{AggregateRoot, EventBuffer};
use crate::product::ProductId;

use super::{OrderError, OrderEvent, OrderId, OrderLine, OrderStatus, Quantity};

/// Order aggregate root.
///
/// Owns an ordered list of lines and a status. Lines can only change while the
/// order is a draft; placing the order freezes them and records `OrderPlaced`.
///
/// All lines share one currency, fixed by the first line added.
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique order identifier.
    id: OrderId,

    /// Current status of the order.
    status: OrderStatus,

    /// Lines in insertion order.
    lines: Vec<OrderLine>,

    /// Running total of all line totals.
    total: Money,

    /// Events recorded but not yet handed off.
    events: EventBuffer<OrderEvent>,
}

impl Order {
    /// Creates an empty draft order.
    pub fn new(id: OrderId) -> Self {
        Self {
            id,
            status: OrderStatus::Draft,
            lines: Vec::new(),
            total: Money::default(),
            events: EventBuffer::new(),
        }
    }
}

impl AggregateRoot for Order {
    type Event = OrderEvent;
    type Id = OrderId;

    fn aggregate_type() -> &'static str {
        "Order"
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn pending_events(&self) -> &[OrderEvent] {
        self.events.as_slice()
    }

    fn clear_domain_events(&mut self) {
        self.events.clear();
    }

    fn take_domain_events(&mut self) -> Vec<OrderEvent> {
        self.events.take()
    }
}

// Query methods
impl Order {
    /// Returns the current status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the lines in insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the order has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the sum of all line totals.
    ///
    /// An empty order totals zero in the default currency.
    pub fn total(&self) -> Money {
        self.total.clone()
    }

    /// Returns the currency every line must use, if one has been fixed.
    pub fn currency(&self) -> Option<&str> {
        self.lines.first().map(|line| line.unit_price().currency())
    }
}

// Command methods
impl Order {
    /// Appends a line to a draft order.
    pub fn add_line<Q>(
        &mut self,
        product_id: ProductId,
        quantity: Q,
        unit_price: Money,
    ) -> Result<(), OrderError>
    where
        Q: TryInto<Quantity, Error = OrderError>,
    {
        self.ensure_draft("add line to")?;

        let line = OrderLine::new(product_id, quantity, unit_price)?;

        let total = match self.currency() {
            None => line.line_total().clone(),
            Some(expected) if expected != line.unit_price().currency() => {
                return Err(OrderError::CurrencyMismatch {
                    expected: expected.to_string(),
                    found: line.unit_price().currency().to_string(),
                });
            }
            Some(_) => self.total.add(line.line_total())?,
        };

        tracing::debug!(
            order_id = %self.id,
            product_id = %line.product_id(),
            quantity = line.quantity(),
            "line added"
        );

        self.lines.push(line);
        self.total = total;
        Ok(())
    }

    /// Removes the line at `index` from a draft order, shifting later lines down.
    pub fn remove_line(&mut self, index: usize) -> Result<(), OrderError> {
        self.ensure_draft("remove line from")?;

        let len = self.lines.len();
        if index >= len {
            return Err(OrderError::LineIndexOutOfRange { index, len });
        }

        let total = if len == 1 {
            Money::default()
        } else {
            self.total.subtract(self.lines[index].line_total())?
        };

        let removed = self.lines.remove(index);
        self.total = total;

        tracing::debug!(
            order_id = %self.id,
            product_id = %removed.product_id(),
            index,
            "line removed"
        );
        Ok(())
    }

    /// Places a draft order that has at least one line.
    ///
    /// Records exactly one `OrderPlaced` event.
    #[tracing::instrument(skip(self), fields(order_id = %self.id))]
    pub fn place(&mut self) -> Result<(), OrderError> {
        if !self.status.can_place() {
            return Err(self.not_draft("place"));
        }

        if self.lines.is_empty() {
            tracing::debug!("rejected: order has no lines");
            return Err(OrderError::NoLines);
        }

        let event = OrderEvent::order_placed(self.id.clone(), &self.lines, self.total());
        self.status = OrderStatus::Placed;
        self.events.record(event);

        tracing::debug!(
            total = %self.total,
            lines = self.lines.len(),
            pending = self.events.len(),
            "order placed"
        );
        Ok(())
    }

    /// Ships the order.
    ///
    /// No transition into `Shipped` exists yet, so this always fails.
    pub fn ship(&mut self) -> Result<(), OrderError> {
        Err(OrderError::UnsupportedTransition {
            from: self.status,
            to: OrderStatus::Shipped,
        })
    }

    fn ensure_draft(&self, action: &'static str) -> Result<(), OrderError> {
        if self.status.can_modify_lines() {
            return Ok(());
        }
        Err(self.not_draft(action))
    }

    fn not_draft(&self, action: &'static str) -> OrderError {
        tracing::debug!(order_id = %self.id, status = %self.status, action, "rejected: not draft");
        OrderError::NotDraft {
            current_status: self.status,
            action,
        }
    }
}
