//! Product categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a category slug is not recognized.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown product category: {0}")]
pub struct CategoryError(pub String);

/// Storefront product category, addressed by its URL slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    MensClothing,
    WomensClothing,
    KidsWear,
    Combo,
    Hoodies,
    TrackPants,
}

impl ProductCategory {
    /// Every category, in navigation order.
    pub const ALL: [Self; 6] = [
        Self::MensClothing,
        Self::WomensClothing,
        Self::KidsWear,
        Self::Combo,
        Self::Hoodies,
        Self::TrackPants,
    ];

    /// URL slug (`/category/{slug}`).
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::MensClothing => "mens-clothing",
            Self::WomensClothing => "womens-clothing",
            Self::KidsWear => "kids-wear",
            Self::Combo => "combo",
            Self::Hoodies => "hoodies",
            Self::TrackPants => "track-pants",
        }
    }

    /// Human-readable name shown in navigation.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::MensClothing => "Men's Clothing",
            Self::WomensClothing => "Women's Clothing",
            Self::KidsWear => "Kids Wear",
            Self::Combo => "Combo Offers",
            Self::Hoodies => "Hoodies",
            Self::TrackPants => "Track Pants",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == s)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}
