//! Core types for Stumarcot.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod icon;
pub mod id;
pub mod price;
pub mod promo;
pub mod quantity;

pub use email::{Email, EmailError};
pub use icon::Icon;
pub use id::*;
pub use price::{CurrencyCode, Price};
pub use promo::{PromoCode, PromoCodeError};
pub use quantity::{Quantity, QuantityError};
