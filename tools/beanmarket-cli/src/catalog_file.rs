//! Catalog files.
//!
//! A catalog file is TOML or JSON with a list of `items`. Prices are written
//! as numbers or strings with at most two decimals and converted exactly to
//! cents in the session currency.

use std::path::Path;

use anyhow::{Context, Result};
use beanmarket_commerce::catalog::{CatalogItem, PackageWeight};
use beanmarket_commerce::{CommerceError, Currency, Money};
use serde::{Deserialize, Serialize};

/// On-disk catalog layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub items: Vec<CatalogEntry>,
}

/// One coffee as written in a catalog file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub name: String,
    pub roaster: String,
    pub price: PriceValue,
    #[serde(default)]
    pub weight: PackageWeight,
    #[serde(default)]
    pub flavor_notes: Vec<String>,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub image: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub roaster_description: Option<String>,
    #[serde(default)]
    pub brewing_tips: Option<String>,
}

fn default_in_stock() -> bool {
    true
}

/// A price as written in the file: `24.99`, `25` or `"24.99"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceValue {
    Whole(i64),
    Decimal(f64),
    Text(String),
}

impl PriceValue {
    /// Convert to an exact amount. Fractions of a cent, non-finite values and
    /// amounts that overflow are rejected.
    pub fn to_money(&self, currency: Currency) -> Result<Money, CommerceError> {
        match self {
            PriceValue::Whole(units) => units
                .checked_mul(Currency::MINOR_UNITS)
                .map(|cents| Money::new(cents, currency))
                .ok_or_else(|| CommerceError::InvalidAmount(units.to_string())),
            // Display prints the shortest text that round-trips, without exponents.
            PriceValue::Decimal(value) => Money::parse(&value.to_string(), currency),
            PriceValue::Text(text) => Money::parse(text, currency),
        }
    }
}

impl CatalogEntry {
    /// Convert to a catalog item priced in `currency`.
    pub fn into_item(self, currency: Currency) -> Result<CatalogItem> {
        let price = self
            .price
            .to_money(currency)
            .with_context(|| format!("Invalid price for catalog item '{}'", self.id))?;

        let mut item = CatalogItem::new(self.id, self.name, self.roaster, price)
        .with_weight(self.weight)
        .with_flavor_notes(self.flavor_notes)
        .with_rating(self.rating)
        .with_image(self.image)
        .with_stock(self.in_stock);
        item.description = self.description;
        item.roaster_description = self.roaster_description;
        item.brewing_tips = self.brewing_tips;
        Ok(item)
    }
}

impl CatalogFile {
    /// Parse catalog file contents; `.json` paths are read as JSON, anything else as TOML.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        if path.extension().map_or(false, |ext| ext == "json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON catalog: {}", path.display()))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML catalog: {}", path.display()))
        }
    }

    /// Read and parse a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
        Self::parse(path, &content)
    }

    /// Convert every entry to a catalog item. Fails on the first bad entry.
    pub fn into_items(self, currency: Currency) -> Result<Vec<CatalogItem>> {
        self.items
            .into_iter()
            .map(|entry| entry.into_item(currency))
            .collect()
    }
}
