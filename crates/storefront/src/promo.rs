//! Promo code lookup.
//!
//! A small fixed table of code to discount fraction. Matching is
//! case-insensitive with surrounding whitespace ignored (normalization
//! lives in [`PromoCode::parse`]).

use rust_decimal::Decimal;
use thiserror::Error;

use stumarcot_core::{PromoCode, PromoCodeError};

/// Errors surfaced when applying a promo code.
#[derive(Debug, Error)]
pub enum PromoError {
    /// The input was empty or otherwise not a code at all.
    #[error(transparent)]
    Invalid(#[from] PromoCodeError),

    /// The code is well-formed but not in the table.
    #[error("invalid promo code {0}, please try again")]
    Unrecognized(PromoCode),
}

/// A successfully matched promo code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedPromo {
    /// The normalized code that matched.
    pub code: PromoCode,
    /// Discount fraction, e.g. `0.10` for 10% off.
    pub discount: Decimal,
}

impl AppliedPromo {
    /// The discount as a whole percentage, for acknowledgement messages.
    #[must_use]
    pub fn percent(&self) -> Decimal {
        self.discount * Decimal::ONE_HUNDRED
    }
}

/// Look up the discount fraction for a normalized code.
#[must_use]
pub fn lookup(code: &PromoCode) -> Option<Decimal> {
    match code.as_str() {
        "SAVE10" => Some(Decimal::new(10, 2)),
        "WELCOME15" => Some(Decimal::new(15, 2)),
        "BUILD20" => Some(Decimal::new(20, 2)),
        _ => None,
    }
}

/// Normalize raw user input and look it up in the code table.
///
/// # Errors
///
/// Returns [`PromoError::Invalid`] for empty input and
/// [`PromoError::Unrecognized`] for codes not in the table.
pub fn apply(input: &str) -> Result<AppliedPromo, PromoError> {
    let code = PromoCode::parse(input)?;
    let discount = lookup(&code).ok_or_else(|| PromoError::Unrecognized(code.clone()))?;
    Ok(AppliedPromo { code, discount })
}
