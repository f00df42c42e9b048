//! Line-item quantity type.
//!
//! A cart never holds a line with quantity zero or below - such an update
//! collapses to removal - so the type makes zero unrepresentable. The
//! product-detail stepper additionally clamps adjustments to 1..=100.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A positive line-item quantity.
///
/// ## Constraints
///
/// - Always at least 1; construction from 0 fails, and deserializing a
///   stored quantity of 0 fails (the whole snapshot is then treated as
///   malformed and the cart starts empty).
/// - [`Quantity::stepped`] applies the product-detail stepper bounds
///   (minimum 1, maximum 100), clamping silently rather than rejecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The single-unit quantity.
    pub const ONE: Self = Self(1);

    /// Stepper maximum on the product detail page.
    pub const STEPPER_MAX: u32 = 100;

    /// Create a quantity, returning `None` for 0.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add another quantity, saturating on overflow.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Apply a stepper adjustment, clamping the result to 1..=100.
    #[must_use]
    pub fn stepped(self, delta: i64) -> Self {
        let next = i64::from(self.0) + delta;
        let clamped = next.clamp(1, i64::from(Self::STEPPER_MAX));
        // clamp keeps the value in u32 range
        Self(u32::try_from(clamped).unwrap_or(1))
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(QuantityError::Zero)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities start at 1; zero collapses to removal.
    #[error("quantity must be at least 1")]
    Zero,
}
