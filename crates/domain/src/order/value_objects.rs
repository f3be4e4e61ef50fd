//! Value objects for the order domain.

use common::Money;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::product::ProductId;

use super::OrderError;

/// Unique identifier for an order.
///
/// Stores the trimmed input; blank input is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order ID from a string, trimming surrounding whitespace.
    pub fn new(value: impl Into<String>) -> Result<Self, OrderError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(OrderError::EmptyOrderId);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Creates a new random order ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for OrderId {
    type Error = OrderError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for OrderId {
    type Error = OrderError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.0
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Number of units on an order line. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Returns the quantity as an integer.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = OrderError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 {
            return Err(OrderError::QuantityTooSmall);
        }
        u32::try_from(value)
            .map(Self)
            .map_err(|_| OrderError::QuantityTooLarge)
    }
}

impl TryFrom<i32> for Quantity {
    type Error = OrderError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = OrderError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_from(i64::from(value))
    }
}

impl TryFrom<f64> for Quantity {
    type Error = OrderError;

    /// The at-least-one check runs before the integral check.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_nan() || value < 1.0 {
            return Err(OrderError::QuantityTooSmall);
        }
        if value.fract() != 0.0 {
            return Err(OrderError::QuantityNotInteger);
        }
        if value > f64::from(u32::MAX) {
            return Err(OrderError::QuantityTooLarge);
        }
        Ok(Self(value as u32))
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

/// A line on an order: a product, how many, and at what unit price.
///
/// Deserialization rebuilds the line through [`OrderLine::new`]; a stored
/// `line_total` is only accepted if it matches the recomputed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrderLineRepr", into = "OrderLineRepr")]
pub struct OrderLine {
    product_id: ProductId,
    quantity: Quantity,
    unit_price: Money,
    line_total: Money,
}

impl OrderLine {
    /// Creates a new order line, validating the quantity.
    ///
    /// The line total is `unit_price * quantity` in the unit price's currency.
    pub fn new<Q>(product_id: ProductId, quantity: Q, unit_price: Money) -> Result<Self, OrderError>
    where
        Q: TryInto<Quantity, Error = OrderError>,
    {
        let quantity = quantity.try_into()?;
        let line_total = unit_price.multiply(quantity.get())?;

        Ok(Self {
            product_id,
            quantity,
            unit_price,
            line_total,
        })
    }

    /// Returns the product on this line.
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Returns the quantity ordered.
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    pub(super) fn units(&self) -> Quantity {
        self.quantity
    }

    /// Returns the price per unit.
    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    /// Returns the total for this line.
    pub fn line_total(&self) -> &Money {
        &self.line_total
    }
}

/// Wire form of [`OrderLine`].
#[derive(Serialize, Deserialize)]
struct OrderLineRepr {
    product_id: ProductId,
    quantity: i64,
    unit_price: Money,
    #[serde(default)]
    line_total: Option<Money>,
}

impl TryFrom<OrderLineRepr> for OrderLine {
    type Error = OrderError;

    fn try_from(repr: OrderLineRepr) -> Result<Self, Self::Error> {
        let line = OrderLine::new(repr.product_id, repr.quantity, repr.unit_price)?;

        match repr.line_total {
            Some(found) if found != line.line_total => Err(OrderError::LineTotalMismatch {
                expected: line.line_total,
                found,
            }),
            _ => Ok(line),
        }
    }
}

impl From<OrderLine> for OrderLineRepr {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id,
            quantity: i64::from(line.quantity.get()),
            unit_price: line.unit_price,
            line_total: Some(line.line_total),
        }
    }
}
