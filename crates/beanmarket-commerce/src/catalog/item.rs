//! Sellable coffee items.

use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest rating an item can carry.
pub const MAX_RATING: u8 = 5;

/// Bag size label. Display only; never converted to a mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PackageWeight {
    #[default]
    #[serde(rename = "250g")]
    Grams250,
    #[serde(rename = "500g")]
    Grams500,
    #[serde(rename = "1kg")]
    Kilogram1,
}

impl PackageWeight {
    /// Label as shown on the bag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageWeight::Grams250 => "250g",
            PackageWeight::Grams500 => "500g",
            PackageWeight::Kilogram1 => "1kg",
        }
    }
}

impl fmt::Display for PackageWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PackageWeight {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "250g" => Ok(PackageWeight::Grams250),
            "500g" => Ok(PackageWeight::Grams500),
            "1kg" => Ok(PackageWeight::Kilogram1),
            other => Err(CommerceError::invalid_item(
                "?",
                format!("unknown package weight {:?}", other),
            )),
        }
    }
}

/// A coffee offered in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    /// Unique within a catalog snapshot.
    pub id: ItemId,
    /// Coffee name.
    pub name: String,
    /// Roaster selling it.
    pub roaster_name: String,
    /// Price per bag.
    pub unit_price: Money,
    /// Bag size.
    pub package_weight: PackageWeight,
    /// Tasting notes, in display order.
    pub flavor_notes: Vec<String>,
    /// Star rating, 0 to 5.
    pub rating: u8,
    /// Image URL or path. Not validated.
    pub image_ref: String,
    /// Whether the item can currently be bought.
    pub in_stock: bool,
    /// Long-form description for the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// About the roaster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roaster_description: Option<String>,
    /// Brewing recommendation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brewing_tips: Option<String>,
}

impl CatalogItem {
    /// Create an in-stock 250g item with no notes and no rating.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        roaster_name: impl Into<String>,
        unit_price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roaster_name: roaster_name.into(),
            unit_price,
            package_weight: PackageWeight::default(),
            flavor_notes: Vec::new(),
            rating: 0,
            image_ref: String::new(),
            in_stock: true,
            description: None,
            roaster_description: None,
            brewing_tips: None,
        }
    }

    /// Set the package weight.
    pub fn with_weight(mut self, weight: PackageWeight) -> Self {
        self.package_weight = weight;
        self
    }

    /// Set the flavor notes, in display order.
    pub fn with_flavor_notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavor_notes = notes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rating (0 to 5).
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating;
        self
    }

    /// Set the image reference.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    /// Set stock availability.
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    /// Set the long description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the roaster's blurb.
    pub fn with_roaster_description(mut self, text: impl Into<String>) -> Self {
        self.roaster_description = Some(text.into());
        self
    }

    /// Set brewing tips.
    pub fn with_brewing_tips(mut self, tips: impl Into<String>) -> Self {
        self.brewing_tips = Some(tips.into());
        self
    }

    /// Check the invariants a catalog snapshot relies on.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.id.as_str().trim().is_empty() {
            return Err(CommerceError::invalid_item(
                self.id.as_str(),
                "id must not be empty",
            ));
        }
        if self.unit_price.is_negative() {
            return Err(CommerceError::invalid_item(
                self.id.as_str(),
                format!("negative price {}", self.unit_price),
            ));
        }
        if self.rating > MAX_RATING {
            return Err(CommerceError::invalid_item(
                self.id.as_str(),
                format!("rating {} exceeds {}", self.rating, MAX_RATING),
            ));
        }
        Ok(())
    }

    /// Case-insensitive substring match on name, roaster, or any flavor note.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(needle)
            || self.roaster_name.to_lowercase().contains(needle)
            || self
                .flavor_notes
                .iter()
                .any(|note| note.to_lowercase().contains(needle))
    }
}
