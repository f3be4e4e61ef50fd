//! Envelopes for handing recorded events to an outbox.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aggregate::{AggregateRoot, DomainEvent};
use crate::error::DomainError;

/// A recorded domain event along with the metadata an outbox needs to publish it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique identifier for this event, for de-duplication downstream.
    pub event_id: Uuid,

    /// The type of the event (e.g., "OrderPlaced", "ProductPriceChanged").
    pub event_type: String,

    /// The type of aggregate (e.g., "Order", "Product").
    pub aggregate_type: String,

    /// The aggregate this event belongs to.
    pub aggregate_id: String,

    /// When the event occurred.
    pub occurred_at: DateTime<Utc>,

    /// The event as JSON, in its tagged `{"type", "data"}` form.
    pub payload: serde_json::Value,
}

impl EventEnvelope {
    /// Wraps one event recorded by `aggregate`.
    pub fn from_event<A: AggregateRoot>(
        aggregate: &A,
        event: &A::Event,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            event_id: Uuid::new_v4(),
            event_type: event.event_type().to_string(),
            aggregate_type: A::aggregate_type().to_string(),
            aggregate_id: aggregate.id().to_string(),
            occurred_at: event.occurred_at(),
            payload: serde_json::to_value(event)?,
        })
    }

    /// Deserializes the payload back into a typed event.
    pub fn decode<E: DomainEvent>(&self) -> Result<E, DomainError> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

/// Wraps every pending event of `aggregate` and clears its buffer.
///
/// The buffer is only cleared once every event has been wrapped, so a
/// serialization failure leaves the pending events in place.
pub fn collect_envelopes<A: AggregateRoot>(
    aggregate: &mut A,
) -> Result<Vec<EventEnvelope>, DomainError> {
    let envelopes = aggregate
        .pending_events()
        .iter()
        .map(|event| EventEnvelope::from_event(&*aggregate, event))
        .collect::<Result<Vec<_>, _>>()?;

    aggregate.clear_domain_events();

    tracing::debug!(
        aggregate_type = A::aggregate_type(),
        aggregate_id = %aggregate.id(),
        count = envelopes.len(),
        "collected domain events"
    );

    Ok(envelopes)
}
