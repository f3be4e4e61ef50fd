//! Order state machine.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// State transitions:
/// ```text
/// Draft ──place──► Placed        Shipped (declared, no transition)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order is being built, lines can be added/removed.
    #[default]
    Draft,

    /// Order has been placed, lines are frozen.
    Placed,

    /// Order has been shipped. No operation currently reaches this status.
    Shipped,
}

impl OrderStatus {
    /// Returns true if lines can be added or removed in this status.
    pub fn can_modify_lines(&self) -> bool {
        matches!(self, OrderStatus::Draft)
    }

    /// Returns true if the order can be placed in this status.
    pub fn can_place(&self) -> bool {
        matches!(self, OrderStatus::Draft)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "Draft",
            OrderStatus::Placed => "Placed",
            OrderStatus::Shipped => "Shipped",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
