//! Stumarcot Core - Shared types library.
//!
//! This crate provides common types used across all Stumarcot components:
//! - `storefront` - Cart, wishlist, catalog, and view logic
//! - `cli` - Terminal front-end driving the storefront stores
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! rendering. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe ids, money, quantities,
//!   emails, promo codes, and icon references

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
