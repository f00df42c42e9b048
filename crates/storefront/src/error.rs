//! Unified error handling for the storefront.
//!
//! Module-level errors stay local where a caller can react to them; this
//! umbrella type exists for front-ends (like the CLI) that want one error
//! surface. Nothing here is fatal to the application - the worst case is
//! an operation that visibly did not happen.

use thiserror::Error;

use stumarcot_core::ProductId;

use crate::config::ConfigError;
use crate::filters::FilterError;
use crate::forms::FormError;
use crate::promo::PromoError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration loading failed.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// The key-value store failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Form input did not validate.
    #[error("{0}")]
    Form(#[from] FormError),

    /// Promo code input did not match.
    #[error("{0}")]
    Promo(#[from] PromoError),

    /// Filter input did not parse.
    #[error("{0}")]
    Filter(#[from] FilterError),

    /// A product id is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
