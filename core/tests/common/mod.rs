// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use once_cell::sync::Lazy;
use shopcart::{Catalog, Decimal, Product};
use tracing::Level;

// --- Common Catalogs ---
pub fn laptop_only_catalog() -> Catalog {
  Catalog::new(vec![Product::new(1, "Laptop", Decimal::new(99999, 2), 10)]).unwrap()
}

pub fn demo_catalog() -> Catalog {
  Catalog::default_seed()
}

pub fn price(cents: i64) -> Decimal {
  Decimal::new(cents, 2)
}

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer() // Important for tests to capture output
    .try_init()
    .ok(); // Allow multiple initializations in tests (ok if fails)
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}
