//! Static product catalog.
//!
//! The shop's product list is fixed at build time: twelve construction
//! materials, three of which carry full detail-page data (description,
//! feature list, strikethrough pricing). The id-to-icon mapping lives here
//! too; the cart resolves a line's icon through it exactly once, when the
//! line is created.

use std::sync::LazyLock;

use core::fmt;

use stumarcot_core::{Icon, Price, ProductId};

/// Product category, used by the catalog filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Tiles,
    Blocks,
    Roofing,
    Tools,
    Paint,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Tiles,
        Self::Blocks,
        Self::Roofing,
        Self::Tools,
        Self::Paint,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tiles => "Tiles",
            Self::Blocks => "Blocks",
            Self::Roofing => "Roofing",
            Self::Tools => "Tools",
            Self::Paint => "Paint",
        }
    }

    /// The slug used in filter inputs.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Tiles => "tiles",
            Self::Blocks => "blocks",
            Self::Roofing => "roofing",
            Self::Tools => "tools",
            Self::Paint => "paint",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Error returned when parsing an unknown category slug.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown category {0:?} (expected tiles, blocks, roofing, tools, or paint)")]
pub struct ParseCategoryError(String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "tiles" => Ok(Self::Tiles),
            "blocks" => Ok(Self::Blocks),
            "roofing" => Ok(Self::Roofing),
            "tools" => Ok(Self::Tools),
            "paint" => Ok(Self::Paint),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}

/// A catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    /// Stable slug identifier.
    pub id: ProductId,
    /// Display name.
    pub name: &'static str,
    /// Current unit price.
    pub unit_price: Price,
    /// Category for filtering.
    pub category: Category,
    /// Icon shown in listings and cart rows.
    pub icon: Icon,
}

/// Detail-page data for products that have it.
#[derive(Debug, Clone, Copy)]
pub struct ProductDetail {
    /// Long-form description.
    pub description: &'static str,
    /// Bulleted feature list.
    pub features: &'static [&'static str],
    /// Strikethrough price, when the product is discounted.
    pub original_price: Option<Price>,
}

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    let entry = |id: &str, name, cents, category| Product {
        id: ProductId::new(id),
        name,
        unit_price: Price::from_cents(cents),
        category,
        icon: icon_for(&ProductId::new(id)),
    };

    vec![
        entry("ceramic-wall-tiles", "Ceramic Wall Tiles", 4500, Category::Tiles),
        entry("porcelain-floor-tiles", "Porcelain Floor Tiles", 6500, Category::Tiles),
        entry("pelvin-blocks", "Pelvin Blocks", 2500, Category::Blocks),
        entry("hollow-blocks", "Hollow Blocks", 1800, Category::Blocks),
        entry("clay-roof-tiles", "Clay Roof Tiles", 3500, Category::Roofing),
        entry("metal-roofing-sheets", "Metal Roofing Sheets", 8500, Category::Roofing),
        entry("construction-hammer", "Construction Hammer", 3200, Category::Tools),
        entry("tool-set", "Tool Set", 12000, Category::Tools),
        entry("premium-paint", "Premium Paint", 5500, Category::Paint),
        entry("mosaic-tiles", "Mosaic Tiles", 7500, Category::Tiles),
        entry("natural-stone-tiles", "Natural Stone Tiles", 9500, Category::Tiles),
        entry("subway-tiles", "Subway Tiles", 4000, Category::Tiles),
    ]
});

/// All catalog products, in display order.
#[must_use]
pub fn all() -> &'static [Product] {
    &PRODUCTS
}

/// Look up a product by id.
#[must_use]
pub fn find(id: &ProductId) -> Option<&'static Product> {
    PRODUCTS.iter().find(|p| &p.id == id)
}

/// Resolve the icon for a product id.
///
/// Unmapped ids get the generic box icon.
#[must_use]
pub fn icon_for(id: &ProductId) -> Icon {
    match id.as_str() {
        "ceramic-wall-tiles" => Icon::ThLarge,
        "porcelain-floor-tiles" => Icon::LayerGroup,
        "pelvin-blocks" => Icon::Cube,
        "hollow-blocks" => Icon::Cubes,
        "clay-roof-tiles" => Icon::Home,
        "metal-roofing-sheets" => Icon::Warehouse,
        "construction-hammer" => Icon::Hammer,
        "tool-set" => Icon::Tools,
        "premium-paint" => Icon::PaintRoller,
        "mosaic-tiles" => Icon::Th,
        "natural-stone-tiles" => Icon::Square,
        "subway-tiles" => Icon::GripHorizontal,
        _ => Icon::Box,
    }
}

/// Detail-page data for a product, where available.
#[must_use]
pub fn detail(id: &ProductId) -> Option<&'static ProductDetail> {
    const CERAMIC_WALL_TILES: ProductDetail = ProductDetail {
        description: "Premium ceramic wall tiles perfect for bathrooms and \
                      kitchens. These high-quality tiles offer excellent \
                      durability, water resistance, and easy maintenance.",
        features: &[
            "Water resistant and easy to clean",
            "Durable ceramic construction",
            "Multiple color options available",
            "Professional installation support",
            "5-year manufacturer warranty",
        ],
        original_price: Some(Price::from_cents(5500)),
    };

    const PORCELAIN_FLOOR_TILES: ProductDetail = ProductDetail {
        description: "Durable porcelain tiles for high-traffic areas with \
                      superior strength and style.",
        features: &[
            "High durability for heavy traffic",
            "Scratch and stain resistant",
            "Available in multiple sizes",
            "Easy maintenance",
            "10-year warranty",
        ],
        original_price: None,
    };

    const PELVIN_BLOCKS: ProductDetail = ProductDetail {
        description: "High-strength concrete blocks for structural \
                      construction with excellent load-bearing capacity.",
        features: &[
            "Superior compressive strength",
            "Weather resistant",
            "Consistent dimensions",
            "Eco-friendly production",
            "Meets building standards",
        ],
        original_price: None,
    };

    match id.as_str() {
        "ceramic-wall-tiles" => Some(&CERAMIC_WALL_TILES),
        "porcelain-floor-tiles" => Some(&PORCELAIN_FLOOR_TILES),
        "pelvin-blocks" => Some(&PELVIN_BLOCKS),
        _ => None,
    }
}
