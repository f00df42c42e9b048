//! Symbolic product icon references.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Symbolic icon reference attached to a cart line at creation time.
///
/// Serializes to the icon-font class string the stored cart uses
/// (e.g. `fas fa-th-large`), so snapshots written by earlier versions of
/// the storefront read back unchanged. Unrecognized stored classes fall
/// back to [`Icon::Box`] instead of failing the whole snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    ThLarge,
    LayerGroup,
    Cube,
    Cubes,
    Home,
    Warehouse,
    Hammer,
    Tools,
    PaintRoller,
    Th,
    Square,
    GripHorizontal,
    /// Generic fallback for products without a mapped icon.
    #[default]
    Box,
}

impl Icon {
    /// The icon-font class string for this icon.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::ThLarge => "fas fa-th-large",
            Self::LayerGroup => "fas fa-layer-group",
            Self::Cube => "fas fa-cube",
            Self::Cubes => "fas fa-cubes",
            Self::Home => "fas fa-home",
            Self::Warehouse => "fas fa-warehouse",
            Self::Hammer => "fas fa-hammer",
            Self::Tools => "fas fa-tools",
            Self::PaintRoller => "fas fa-paint-roller",
            Self::Th => "fas fa-th",
            Self::Square => "fas fa-square",
            Self::GripHorizontal => "fas fa-grip-horizontal",
            Self::Box => "fas fa-box",
        }
    }

    /// Resolve an icon from its class string, falling back to [`Icon::Box`].
    #[must_use]
    pub fn from_class(class: &str) -> Self {
        match class {
            "fas fa-th-large" => Self::ThLarge,
            "fas fa-layer-group" => Self::LayerGroup,
            "fas fa-cube" => Self::Cube,
            "fas fa-cubes" => Self::Cubes,
            "fas fa-home" => Self::Home,
            "fas fa-warehouse" => Self::Warehouse,
            "fas fa-hammer" => Self::Hammer,
            "fas fa-tools" => Self::Tools,
            "fas fa-paint-roller" => Self::PaintRoller,
            "fas fa-th" => Self::Th,
            "fas fa-square" => Self::Square,
            "fas fa-grip-horizontal" => Self::GripHorizontal,
            _ => Self::Box,
        }
    }
}

impl From<String> for Icon {
    fn from(class: String) -> Self {
        Self::from_class(&class)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.class().to_owned()
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}
