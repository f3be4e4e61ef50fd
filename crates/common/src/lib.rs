//! Shared kernel for the commerce domain.

pub mod money;

pub use money::{DEFAULT_CURRENCY, Money, MoneyError};
