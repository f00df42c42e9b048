//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_slug_id!` macro to create type-safe ID wrappers that
//! prevent accidentally mixing IDs from different entity types. IDs are
//! opaque slug strings (e.g. `ceramic-wall-tiles`), matching the keys the
//! catalog and the persisted cart use.

/// Macro to define a type-safe slug ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - A `from_name()` constructor deriving a slug from a display name
/// - `From<&str>`/`From<String>` and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use stumarcot_core::define_slug_id;
/// define_slug_id!(ProductId);
/// define_slug_id!(CategoryId);
///
/// let product = ProductId::new("ceramic-wall-tiles");
/// let category = CategoryId::new("tiles");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = category;
/// ```
#[macro_export]
macro_rules! define_slug_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a slug string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Derive an ID from a display name.
            ///
            /// Lowercases the name and collapses whitespace runs into
            /// single dashes, so `"Ceramic Wall Tiles"` becomes
            /// `ceramic-wall-tiles`.
            #[must_use]
            pub fn from_name(name: &str) -> Self {
                let slug = name
                    .to_lowercase()
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join("-");
                Self(slug)
            }

            /// Get the underlying slug as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_slug_id!(ProductId);
define_slug_id!(CategoryId);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_slugifies() {
        assert_eq!(
            ProductId::from_name("Ceramic Wall Tiles").as_str(),
            "ceramic-wall-tiles"
        );
    }

    #[test]
    fn test_from_name_collapses_whitespace() {
        assert_eq!(
            ProductId::from_name("  Tool   Set ").as_str(),
            "tool-set"
        );
    }

    #[test]
    fn test_display() {
        let id = ProductId::new("pelvin-blocks");
        assert_eq!(format!("{id}"), "pelvin-blocks");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("hollow-blocks");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"hollow-blocks\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
