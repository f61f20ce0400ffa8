// storefront/src/lib.rs

//! HTTP storefront for the `shopcart` catalog and cart.
//!
//! Owns everything the core leaves out: routing, cookie sessions, request
//! parsing, JSON responses and the HTML catalog page.

pub mod config;
pub mod errors;
pub mod state;
pub mod telemetry;
pub mod web;
