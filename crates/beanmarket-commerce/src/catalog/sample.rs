//! Built-in demo catalog.

use crate::catalog::{CatalogItem, PackageWeight};
use crate::money::Money;

/// Six single-origin coffees used by the demo storefront and the tests.
///
/// Guatemala Antigua is the only out-of-stock entry.
pub fn sample_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("1", "Ethiopian Yirgacheffe", "Mountain Peak Roasters", Money::usd(2499))
            .with_weight(PackageWeight::Grams250)
            .with_flavor_notes(["Floral", "Citrus", "Berry"])
            .with_rating(5)
            .with_image("/images/ethiopian-yirgacheffe.jpg")
            .with_description(
                "Bright and clean with jasmine aromatics, lively citrus acidity and a berry finish.",
            )
            .with_roaster_description(
                "Small-batch roastery sourcing single-origin lots from around the world.",
            )
            .with_brewing_tips("Pour-over at a 1:16 ratio, water just off the boil."),
        CatalogItem::new("2", "Colombian Supremo", "Heritage Coffee Co.", Money::usd(2250))
            .with_weight(PackageWeight::Grams250)
            .with_flavor_notes(["Chocolate", "Nutty", "Caramel"])
            .with_rating(4)
            .with_image("/images/colombian-supremo.jpg")
            .with_description("Rich chocolate body, smooth and balanced for espresso or drip.")
            .with_roaster_description("Three decades of traditional drum roasting.")
            .with_brewing_tips("1:15 for espresso, 1:17 for drip."),
        CatalogItem::new("3", "Guatemala Antigua", "Artisan Roast Works", Money::usd(2675))
            .with_weight(PackageWeight::Grams250)
            .with_flavor_notes(["Smoky", "Spicy", "Full-bodied"])
            .with_rating(5)
            .with_image("/images/guatemala-antigua.jpg")
            .with_stock(false),
        CatalogItem::new("4", "Brazilian Santos", "Sunrise Coffee Roasters", Money::usd(1999))
            .with_weight(PackageWeight::Grams250)
            .with_flavor_notes(["Nutty", "Chocolate", "Low Acidity"])
            .with_rating(4)
            .with_image("/images/brazilian-santos.jpg"),
        CatalogItem::new("5", "Kenya AA", "Highland Roasters", Money::usd(2800))
            .with_weight(PackageWeight::Grams250)
            .with_flavor_notes(["Wine-like", "Bright", "Complex"])
            .with_rating(5)
            .with_image("/images/kenya-aa.jpg"),
        CatalogItem::new("6", "Costa Rica Tarrazú", "Pure Origin Coffee", Money::usd(2550))
            .with_weight(PackageWeight::Grams250)
            .with_flavor_notes(["Bright", "Clean", "Citrus"])
            .with_rating(4)
            .with_image("/images/costa-rica-tarrazu.jpg"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_items_are_valid() {
        let items = sample_catalog();
        assert_eq!(items.len(), 6);
        for item in &items {
            item.validate().unwrap();
        }
        assert_eq!(items.iter().filter(|item| !item.in_stock).count(), 1);
    }
}
