//! Shared helpers for the domain integration tests.

#![allow(dead_code)]

use domain::{Money, ProductId};
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honouring `RUST_LOG` (default `warn`).
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn gbp(amount: i64) -> Money {
    Money::new(amount, "GBP").unwrap()
}

pub fn product(id: &str) -> ProductId {
    ProductId::new(id).unwrap()
}
