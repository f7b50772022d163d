//! Facet filters for catalog queries.

use crate::catalog::CatalogItem;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stock facet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StockFilter {
    #[default]
    All,
    InStockOnly,
    OutOfStockOnly,
}

impl StockFilter {
    /// Check if an item passes the stock facet.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            StockFilter::All => true,
            StockFilter::InStockOnly => item.in_stock,
            StockFilter::OutOfStockOnly => !item.in_stock,
        }
    }

    /// Value accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            StockFilter::All => "all",
            StockFilter::InStockOnly => "in-stock",
            StockFilter::OutOfStockOnly => "out-of-stock",
        }
    }
}

impl fmt::Display for StockFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StockFilter::All),
            "in-stock" | "in_stock" | "instock" => Ok(StockFilter::InStockOnly),
            "out-of-stock" | "out_of_stock" | "outofstock" => Ok(StockFilter::OutOfStockOnly),
            _ => Err(CommerceError::InvalidFilter {
                kind: "stock",
                value: s.to_string(),
            }),
        }
    }
}

/// Price facet.
///
/// `Under` and `Over` are strict; `Range` includes both bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PriceFilter {
    #[default]
    All,
    Under(Money),
    Range { min: Money, max: Money },
    Over(Money),
}

impl PriceFilter {
    /// The storefront's fixed buckets: all, under 25, 25 to 30, over 30.
    pub fn buckets(currency: Currency) -> [PriceFilter; 4] {
        [
            PriceFilter::All,
            PriceFilter::Under(Money::new(2500, currency)),
            PriceFilter::Range {
                min: Money::new(2500, currency),
                max: Money::new(3000, currency),
            },
            PriceFilter::Over(Money::new(3000, currency)),
        ]
    }

    /// Check if an item's unit price falls in this bucket.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let price = item.unit_price.amount_cents;
        match self {
            PriceFilter::All => true,
            PriceFilter::Under(limit) => price < limit.amount_cents,
            PriceFilter::Range { min, max } => {
                price >= min.amount_cents && price <= max.amount_cents
            }
            PriceFilter::Over(limit) => price > limit.amount_cents,
        }
    }

    /// Parse `all`, `under-X`, `X-Y` or `over-X`, with amounts in `currency`.
    pub fn parse(input: &str, currency: Currency) -> Result<Self, CommerceError> {
        let invalid = || CommerceError::InvalidFilter {
            kind: "price",
            value: input.to_string(),
        };
        let amount = |s: &str| Money::parse(s, currency).map_err(|_| invalid());

        let normalized = input.trim().to_lowercase();
        if normalized == "all" {
            return Ok(PriceFilter::All);
        }
        if let Some(rest) = normalized.strip_prefix("under-") {
            return Ok(PriceFilter::Under(amount(rest)?));
        }
        if let Some(rest) = normalized.strip_prefix("over-") {
            return Ok(PriceFilter::Over(amount(rest)?));
        }
        if let Some((lo, hi)) = normalized.split_once('-') {
            let (min, max) = (amount(lo)?, amount(hi)?);
            if min.amount_cents > max.amount_cents {
                return Err(invalid());
            }
            return Ok(PriceFilter::Range { min, max });
        }
        Err(invalid())
    }

    /// Label in the same form [`PriceFilter::parse`] accepts.
    pub fn label(&self) -> String {
        match self {
            PriceFilter::All => "all".to_string(),
            PriceFilter::Under(limit) => format!("under-{}", short_amount(limit)),
            PriceFilter::Range { min, max } => {
                format!("{}-{}", short_amount(min), short_amount(max))
            }
            PriceFilter::Over(limit) => format!("over-{}", short_amount(limit)),
        }
    }
}

fn short_amount(money: &Money) -> String {
    if money.amount_cents % Currency::MINOR_UNITS == 0 {
        (money.amount_cents / Currency::MINOR_UNITS).to_string()
    } else {
        money.display_amount()
    }
}

impl fmt::Display for PriceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for PriceFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PriceFilter::parse(s, Currency::USD)
    }
}
