//! Core aggregate and domain event traits.

use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable snapshots and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    ///
    /// This is used to route the event once it leaves the aggregate.
    fn event_type(&self) -> &'static str;

    /// Returns the wall-clock time of the call that produced the event.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Append-only buffer of events recorded by an aggregate but not yet handed off.
///
/// The buffer is owned by its aggregate. Callers only ever see copies.
#[derive(Debug, Clone)]
pub struct EventBuffer<E> {
    pending: Vec<E>,
}

impl<E> Default for EventBuffer<E> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<E: Clone> EventBuffer<E> {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event.
    pub fn record(&mut self, event: E) {
        self.pending.push(event);
    }

    /// Returns a read-only view of the pending events in recording order.
    pub fn as_slice(&self) -> &[E] {
        &self.pending
    }

    /// Removes and returns all pending events.
    pub fn take(&mut self) -> Vec<E> {
        std::mem::take(&mut self.pending)
    }

    /// Discards all pending events.
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Returns the number of pending events.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns true if nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Trait for aggregate roots that record domain events.
///
/// An aggregate is a cluster of domain objects that can be treated as a single unit.
/// The aggregate root ensures consistency of changes being made within the aggregate,
/// and records a domain event for each fact it wants published.
///
/// The owning application service reads the pending events after a use case,
/// hands them to an outbox, then clears them before persisting.
pub trait AggregateRoot {
    /// The type of events this aggregate records.
    type Event: DomainEvent;

    /// The identity type of the aggregate.
    type Id: std::fmt::Display;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Returns the aggregate's identity.
    fn id(&self) -> &Self::Id;

    /// Returns a read-only view of the events recorded since the last clear.
    fn pending_events(&self) -> &[Self::Event];

    /// Discards all pending events.
    fn clear_domain_events(&mut self);

    /// Returns the pending events and clears the buffer in one step.
    fn take_domain_events(&mut self) -> Vec<Self::Event>;

    /// Returns a copy of the events recorded since the last clear.
    fn domain_events(&self) -> Vec<Self::Event> {
        self.pending_events().to_vec()
    }
}
