//! Product listing filters and sorting.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::catalog::{Category, Product};

/// Errors parsing filter inputs.
#[derive(Debug, Error)]
pub enum FilterError {
    /// A price range was not of the form `min-max` or `min+`.
    #[error("invalid price range {0:?} (expected forms like \"25-50\" or \"200+\")")]
    InvalidPriceRange(String),
}

/// An inclusive price band, open-ended when `max` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: Decimal,
    max: Option<Decimal>,
}

impl PriceRange {
    /// Parse a filter-input range: `"25-50"` or the open-ended `"200+"`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPriceRange`] for anything else.
    pub fn parse(s: &str) -> Result<Self, FilterError> {
        let invalid = || FilterError::InvalidPriceRange(s.to_owned());

        if let Some(min) = s.strip_suffix('+') {
            let min = min.trim().parse().map_err(|_| invalid())?;
            return Ok(Self { min, max: None });
        }

        let (min, max) = s.split_once('-').ok_or_else(invalid)?;
        let min = min.trim().parse().map_err(|_| invalid())?;
        let max = max.trim().parse().map_err(|_| invalid())?;
        Ok(Self {
            min,
            max: Some(max),
        })
    }

    /// Whether `amount` falls inside the band.
    #[must_use]
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && self.max.is_none_or(|max| amount <= max)
    }
}

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Alphabetical by name.
    #[default]
    Name,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

/// Error returned when parsing an unknown sort order.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown sort order {0:?} (expected name, price-asc, or price-desc)")]
pub struct ParseSortOrderError(String);

impl std::str::FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            other => Err(ParseSortOrderError(other.to_owned())),
        }
    }
}

/// Combined listing filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    /// Keep only this category, when set.
    pub category: Option<Category>,
    /// Keep only products priced inside this band, when set.
    pub price_range: Option<PriceRange>,
    /// Ordering of the surviving products.
    pub sort: SortOrder,
}

impl ProductFilter {
    /// Apply the filter to a product slice, returning the surviving
    /// products in sorted order.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut survivors: Vec<&Product> = products
            .iter()
            .filter(|product| {
                self.category.is_none_or(|category| product.category == category)
                    && self
                        .price_range
                        .is_none_or(|range| range.contains(product.unit_price.amount))
            })
            .collect();

        match self.sort {
            SortOrder::Name => survivors.sort_by_key(|p| p.name),
            SortOrder::PriceAsc => survivors.sort_by_key(|p| p.unit_price.amount),
            SortOrder::PriceDesc => {
                survivors.sort_by_key(|p| std::cmp::Reverse(p.unit_price.amount));
            }
        }
        survivors
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_price_range_parse_band() {
        let range = PriceRange::parse("25-50").unwrap();
        assert!(range.contains(Decimal::from(25)));
        assert!(range.contains(Decimal::from(50)));
        assert!(!range.contains(Decimal::from(51)));
    }

    #[test]
    fn test_price_range_parse_open_ended() {
        let range = PriceRange::parse("200+").unwrap();
        assert!(range.contains(Decimal::from(200)));
        assert!(range.contains(Decimal::from(5000)));
        assert!(!range.contains(Decimal::from(199)));
    }

    #[test]
    fn test_price_range_parse_invalid() {
        assert!(PriceRange::parse("cheap").is_err());
        assert!(PriceRange::parse("10-abc").is_err());
    }

    #[test]
    fn test_filter_by_category() {
        let filter = ProductFilter {
            category: Some(Category::Blocks),
            ..ProductFilter::default()
        };
        let blocks = filter.apply(catalog::all());
        assert_eq!(blocks.len(), 2);
        assert!(blocks.iter().all(|p| p.category == Category::Blocks));
    }

    #[test]
    fn test_filter_by_price_band() {
        let filter = ProductFilter {
            price_range: Some(PriceRange::parse("60-100").unwrap()),
            ..ProductFilter::default()
        };
        for product in filter.apply(catalog::all()) {
            assert!(product.unit_price.amount >= Decimal::from(60));
            assert!(product.unit_price.amount <= Decimal::from(100));
        }
    }

    #[test]
    fn test_sort_price_ascending() {
        let filter = ProductFilter {
            sort: SortOrder::PriceAsc,
            ..ProductFilter::default()
        };
        let sorted = filter.apply(catalog::all());
        for pair in sorted.windows(2) {
            assert!(pair[0].unit_price.amount <= pair[1].unit_price.amount);
        }
    }

    #[test]
    fn test_sort_price_descending() {
        let filter = ProductFilter {
            sort: SortOrder::PriceDesc,
            ..ProductFilter::default()
        };
        let sorted = filter.apply(catalog::all());
        for pair in sorted.windows(2) {
            assert!(pair[0].unit_price.amount >= pair[1].unit_price.amount);
        }
    }

    #[test]
    fn test_unfiltered_keeps_everything() {
        let all = ProductFilter::default().apply(catalog::all());
        assert_eq!(all.len(), catalog::all().len());
    }
}
