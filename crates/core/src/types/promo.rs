//! Promo code type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PromoCode`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PromoCodeError {
    /// The input is empty after trimming.
    #[error("promo code cannot be empty")]
    Empty,
}

/// A normalized promo code.
///
/// Codes are matched case-insensitively with surrounding whitespace
/// ignored, so `" save10 "` and `SAVE10` are the same code. Normalization
/// happens once at parse time; the stored form is always trimmed and
/// uppercased.
///
/// ## Examples
///
/// ```
/// use stumarcot_core::PromoCode;
///
/// let code = PromoCode::parse(" save10 ").unwrap();
/// assert_eq!(code.as_str(), "SAVE10");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PromoCode(String);

impl PromoCode {
    /// Parse a `PromoCode` from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty after trimming.
    pub fn parse(s: &str) -> Result<Self, PromoCodeError> {
        let normalized = s.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(PromoCodeError::Empty);
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PromoCode {
    type Err = PromoCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
