//! Shipping methods with flat costs.

use core::fmt;

use stumarcot_core::Price;

/// A flat-cost shipping method.
///
/// The summary reads the selection at computation time; the cart does not
/// own it. `None` (no selection yet) contributes a shipping cost of zero.
/// The set of methods and their costs are fixed constants of the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingMethod {
    /// Collect from the showroom, free.
    Pickup,
    /// Standard delivery, flat $5.00.
    Standard,
    /// Express delivery, flat $15.00.
    Express,
}

impl ShippingMethod {
    /// Every available method, in display order.
    pub const ALL: [Self; 3] = [Self::Pickup, Self::Standard, Self::Express];

    /// The flat cost of this method.
    #[must_use]
    pub const fn flat_cost(self) -> Price {
        match self {
            Self::Pickup => Price::zero(),
            Self::Standard => Price::from_cents(500),
            Self::Express => Price::from_cents(1500),
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pickup => "Store pickup",
            Self::Standard => "Standard delivery",
            Self::Express => "Express delivery",
        }
    }

    /// The slug used on the command line and in option lists.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::Standard => "standard",
            Self::Express => "express",
        }
    }
}

impl fmt::Display for ShippingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when parsing an unknown shipping method slug.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown shipping method {0:?} (expected pickup, standard, or express)")]
pub struct ParseShippingMethodError(String);

impl std::str::FromStr for ShippingMethod {
    type Err = ParseShippingMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pickup" => Ok(Self::Pickup),
            "standard" => Ok(Self::Standard),
            "express" => Ok(Self::Express),
            other => Err(ParseShippingMethodError(other.to_owned())),
        }
    }
}
