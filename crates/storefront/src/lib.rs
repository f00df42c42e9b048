//! Stumarcot Storefront - cart, wishlist, catalog, and view logic.
//!
//! This crate is the state engine behind the Stumarcot construction
//! materials shop. It owns the cart and wishlist stores, synchronizes them
//! to a synchronous key-value store on every mutation, and derives the
//! order summary and declarative view values a front-end renders.
//!
//! # Architecture
//!
//! - [`storage`] - `KeyValueStore` trait with file-backed and in-memory
//!   backends; one JSON document per key, whole-value reads and writes
//! - [`cart`] - `CartStore`: line items, quantities, order summaries,
//!   promo codes, the checkout gate
//! - [`wishlist`] - `WishlistStore`: per-product toggle entries
//! - [`catalog`] - static product catalog and the id-to-icon mapping
//! - [`filters`] - category/price-range filtering and sorting
//! - [`forms`] - contact and newsletter form validation
//! - [`prompt`] - blocking confirm/alert surface and transient
//!   notifications, injected by the hosting front-end
//! - [`view`] - render functions mapping store state to view values
//!
//! There is no server and no network in this crate: execution is
//! single-threaded and synchronous, and every storage access is one
//! whole-value operation. Two processes pointed at the same data directory
//! overwrite each other, last write wins.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod forms;
pub mod prompt;
pub mod promo;
pub mod shipping;
pub mod storage;
pub mod view;
pub mod wishlist;

pub use cart::{CartStore, LineItem, OrderSummary};
pub use config::StorefrontConfig;
pub use error::StorefrontError;
pub use prompt::{Notification, NotificationLevel, UserPrompt};
pub use shipping::ShippingMethod;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use wishlist::WishlistStore;
