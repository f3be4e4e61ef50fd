//! Money value object shared by the ordering and catalog contexts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Currency used when a caller does not name one.
pub const DEFAULT_CURRENCY: &str = "GBP";

/// Errors raised while constructing or combining [`Money`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    /// The amount was below zero.
    #[error("amount must be non-negative")]
    NegativeAmount { amount: i64 },

    /// The currency was empty or whitespace only.
    #[error("currency must not be empty")]
    EmptyCurrency,

    /// Two amounts in different currencies were combined.
    #[error("cannot add Money with different currencies ({left} and {right})")]
    CurrencyMismatch { left: String, right: String },

    /// The result does not fit in the amount representation.
    #[error("money amount overflow")]
    Overflow,
}

/// An immutable, non-negative amount in a single currency.
///
/// The amount is held in the currency's minor unit (pence for GBP) so that
/// equality and addition are exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "MoneyRepr")]
pub struct Money {
    amount: i64,
    currency: String,
}

impl Money {
    /// Creates a new amount in the given currency.
    ///
    /// The currency is stored as given; it is only checked for emptiness.
    pub fn new(amount: i64, currency: impl Into<String>) -> Result<Self, MoneyError> {
        let currency = currency.into();

        if amount < 0 {
            return Err(MoneyError::NegativeAmount { amount });
        }

        if currency.trim().is_empty() {
            return Err(MoneyError::EmptyCurrency);
        }

        Ok(Self { amount, currency })
    }

    /// Creates a new amount in [`DEFAULT_CURRENCY`].
    pub fn in_default_currency(amount: i64) -> Result<Self, MoneyError> {
        Self::new(amount, DEFAULT_CURRENCY)
    }

    /// Returns a zero amount in the given currency.
    pub fn zero(currency: impl Into<String>) -> Result<Self, MoneyError> {
        Self::new(0, currency)
    }

    /// Returns the amount in minor units.
    pub fn amount(&self) -> i64 {
        self.amount
    }

    /// Returns the currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns true if both values share a currency.
    pub fn same_currency(&self, other: &Money) -> bool {
        self.currency == other.currency
    }

    /// Adds another amount of the same currency, returning a new value.
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if !self.same_currency(other) {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }

        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(MoneyError::Overflow)?;

        Ok(Money {
            amount,
            currency: self.currency.clone(),
        })
    }

    /// Subtracts another amount of the same currency, returning a new value.
    ///
    /// Fails if the result would be negative.
    pub fn subtract(&self, other: &Money) -> Result<Money, MoneyError> {
        if !self.same_currency(other) {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency.clone(),
                right: other.currency.clone(),
            });
        }

        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(MoneyError::Overflow)?;

        Money::new(amount, self.currency.clone())
    }

    /// Multiplies by a quantity, returning a new value in the same currency.
    pub fn multiply(&self, quantity: u32) -> Result<Money, MoneyError> {
        let amount = self
            .amount
            .checked_mul(i64::from(quantity))
            .ok_or(MoneyError::Overflow)?;

        Ok(Money {
            amount,
            currency: self.currency.clone(),
        })
    }
}

/// Zero in [`DEFAULT_CURRENCY`].
impl Default for Money {
    fn default() -> Self {
        Self {
            amount: 0,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}.{:02} {}",
            self.amount / 100,
            self.amount % 100,
            self.currency
        )
    }
}

/// Wire form of [`Money`]; converting back re-runs validation.
#[derive(Serialize, Deserialize)]
struct MoneyRepr {
    amount: i64,
    currency: String,
}

impl TryFrom<MoneyRepr> for Money {
    type Error = MoneyError;

    fn try_from(repr: MoneyRepr) -> Result<Self, Self::Error> {
        Money::new(repr.amount, repr.currency)
    }
}

impl From<Money> for MoneyRepr {
    fn from(money: Money) -> Self {
        Self {
            amount: money.amount,
            currency: money.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gbp(amount: i64) -> Money {
        Money::new(amount, "GBP").unwrap()
    }

    #[test]
    fn test_new_stores_amount_and_currency() {
        let money = Money::new(100, "GBP").unwrap();
        assert_eq!(money.amount(), 100);
        assert_eq!(money.currency(), "GBP");
    }

    #[test]
    fn test_negative_amount_fails() {
        let err = Money::new(-1, "GBP").unwrap_err();
        assert_eq!(err, MoneyError::NegativeAmount { amount: -1 });
        assert_eq!(err.to_string(), "amount must be non-negative");
    }

    #[test]
    fn test_empty_currency_fails() {
        assert_eq!(Money::new(100, ""), Err(MoneyError::EmptyCurrency));
        assert_eq!(Money::new(100, "   "), Err(MoneyError::EmptyCurrency));
    }

    #[test]
    fn test_currency_is_not_trimmed() {
        let money = Money::new(5, " GBP").unwrap();
        assert_eq!(money.currency(), " GBP");
        assert_ne!(money, gbp(5));
    }

    #[test]
    fn test_default_currency_is_gbp() {
        let money = Money::in_default_currency(100).unwrap();
        assert_eq!(money.currency(), DEFAULT_CURRENCY);
        assert_eq!(money, gbp(100));
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(gbp(50), gbp(50));
        assert_ne!(gbp(50), gbp(51));
        assert_ne!(gbp(50), Money::new(50, "USD").unwrap());
    }

    #[test]
    fn test_add_same_currency() {
        let a = gbp(30);
        let b = gbp(20);
        let sum = a.add(&b).unwrap();

        assert_eq!(sum, gbp(50));
        // operands are untouched
        assert_eq!(a, gbp(30));
        assert_eq!(b, gbp(20));
    }

    #[test]
    fn test_add_is_commutative_and_associative() {
        let (a, b, c) = (gbp(3), gbp(7), gbp(11));

        assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        assert_eq!(
            a.add(&b).unwrap().add(&c).unwrap(),
            a.add(&b.add(&c).unwrap()).unwrap()
        );
    }

    #[test]
    fn test_add_different_currencies_fails_either_way() {
        let gbp = gbp(30);
        let usd = Money::new(20, "USD").unwrap();

        assert!(matches!(
            gbp.add(&usd),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
        assert!(matches!(
            usd.add(&gbp),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_add_overflow_fails() {
        let max = gbp(i64::MAX);
        assert_eq!(max.add(&gbp(1)), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_subtract() {
        assert_eq!(gbp(30).subtract(&gbp(10)).unwrap(), gbp(20));
        assert_eq!(
            gbp(10).subtract(&gbp(30)),
            Err(MoneyError::NegativeAmount { amount: -20 })
        );
        assert!(matches!(
            gbp(10).subtract(&Money::new(1, "USD").unwrap()),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_default_is_zero_gbp() {
        let money = Money::default();
        assert_eq!(money.amount(), 0);
        assert_eq!(money, Money::new(0, "GBP").unwrap());
    }

    #[test]
    fn test_zero_is_validated() {
        assert_eq!(Money::zero("EUR").unwrap().amount(), 0);
        assert_eq!(Money::zero(""), Err(MoneyError::EmptyCurrency));
    }

    #[test]
    fn test_multiply() {
        assert_eq!(gbp(10).multiply(3).unwrap(), gbp(30));
        assert_eq!(gbp(i64::MAX).multiply(2), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_display() {
        assert_eq!(gbp(1234).to_string(), "12.34 GBP");
        assert_eq!(gbp(5).to_string(), "0.05 GBP");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let money = gbp(999);
        let json = serde_json::to_string(&money).unwrap();
        assert_eq!(json, r#"{"amount":999,"currency":"GBP"}"#);

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, money);
    }

    #[test]
    fn test_deserialization_revalidates() {
        let result: Result<Money, _> = serde_json::from_str(r#"{"amount":-5,"currency":"GBP"}"#);
        assert!(result.is_err());

        let result: Result<Money, _> = serde_json::from_str(r#"{"amount":5,"currency":" "}"#);
        assert!(result.is_err());
    }
}
