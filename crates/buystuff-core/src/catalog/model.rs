//! Catalog domain models.
//!
//! Catalog entries are read-only data owned by the catalog module; the
//! stores never mutate them. A `CatalogEntry` only becomes interesting to
//! the engine when it is copied into the cart as a cart line.

use serde::{Deserialize, Serialize};

/// Which of the two catalogs an entry belongs to.
///
/// The kind is not stored on the catalog entry itself; it is supplied by the
/// caller when an entry is added to the cart, mirroring the fact that each
/// catalog is a separate, homogeneous list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// Visual media (the movie catalog).
    Visual,
    /// Printed media (the book catalog).
    Print,
}

impl MediaKind {
    /// Stable lowercase name, used as the leading segment of a `cartId`.
    pub fn slug(&self) -> &'static str {
        match self {
            MediaKind::Visual => "visual",
            MediaKind::Print => "print",
        }
    }
}

/// Category-specific fields of a catalog entry.
///
/// Serialized flattened into the entry, so a visual entry carries a
/// `director` key and a print entry an `author` key, the same shape the
/// persisted cart record uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryDetails {
    /// Visual media credit.
    Visual { director: String },
    /// Printed media credit.
    Print { author: String },
}

/// A single purchasable entry in one of the static catalogs.
///
/// Immutable once constructed; `price` is a non-negative currency amount in
/// IEEE-754 double precision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Identifier unique within the owning catalog
    pub id: u32,
    /// Display title
    pub title: String,
    /// Price in currency units (non-negative)
    pub price: f64,
    /// Reference to the cover/poster image
    pub image: String,
    /// Release/publication year
    pub year: u16,
    /// Comma-separated genre labels
    pub genre: String,
    /// Director or author, depending on the catalog
    #[serde(flatten)]
    pub details: EntryDetails,
}

impl CatalogEntry {
    /// The person credited for the entry (director or author).
    pub fn credit(&self) -> &str {
        match &self.details {
            EntryDetails::Visual { director } => director,
            EntryDetails::Print { author } => author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_kind_slug() {
        assert_eq!(MediaKind::Visual.slug(), "visual");
        assert_eq!(MediaKind::Print.slug(), "print");
    }

    #[test]
    fn test_details_flatten_to_credit_key() {
        let entry = CatalogEntry {
            id: 1,
            title: "Metropolis".to_string(),
            price: 9.99,
            image: "/images/movies/metropolis.jpg".to_string(),
            year: 1927,
            genre: "Sci-Fi".to_string(),
            details: EntryDetails::Visual {
                director: "Fritz Lang".to_string(),
            },
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["director"], "Fritz Lang");
        assert!(json.get("details").is_none());

        let back: CatalogEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
        assert_eq!(back.credit(), "Fritz Lang");
    }
}
